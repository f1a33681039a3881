use pov_core::calculator::{
    OP_EX_PERCENT_MAX, OP_EX_PERCENT_MIN, REVENUE_MAX, REVENUE_MIN, compute_savings,
};
use pov_core::category::CATEGORIES;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn close(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= scale * 1e-9
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn operating_expense_is_revenue_times_percent(
        revenue in REVENUE_MIN..=REVENUE_MAX,
        pct in OP_EX_PERCENT_MIN..=OP_EX_PERCENT_MAX
    ) {
        let report = compute_savings(revenue, pct, &CATEGORIES).expect("in-domain inputs");
        let expected = revenue * pct / 100.0;
        let rel = (report.total_operating_expense - expected).abs() / expected;
        prop_assert!(rel <= 1e-6, "revenue={} pct={}", revenue, pct);
    }

    #[test]
    fn every_row_stays_inside_its_band(
        revenue in REVENUE_MIN..=REVENUE_MAX,
        pct in OP_EX_PERCENT_MIN..=OP_EX_PERCENT_MAX
    ) {
        let report = compute_savings(revenue, pct, &CATEGORIES).expect("in-domain inputs");
        for row in &report.categories {
            prop_assert!(row.spend_low <= row.spend, "{}", row.name);
            prop_assert!(row.spend <= row.spend_high, "{}", row.name);
            prop_assert!(row.savings_low <= row.savings, "{}", row.name);
            prop_assert!(row.savings <= row.savings_high, "{}", row.name);
        }
    }

    #[test]
    fn totals_are_the_sum_of_rows(
        revenue in REVENUE_MIN..=REVENUE_MAX,
        pct in OP_EX_PERCENT_MIN..=OP_EX_PERCENT_MAX
    ) {
        let report = compute_savings(revenue, pct, &CATEGORIES).expect("in-domain inputs");
        let sum: f64 = report.categories.iter().map(|r| r.savings).sum();
        let low: f64 = report.categories.iter().map(|r| r.savings_low).sum();
        let high: f64 = report.categories.iter().map(|r| r.savings_high).sum();
        prop_assert!(close(report.totals.total_savings, sum));
        prop_assert!(close(report.totals.total_savings_low, low));
        prop_assert!(close(report.totals.total_savings_high, high));
    }

    #[test]
    fn minimum_inputs_never_exceed_any_other_input(
        revenue in REVENUE_MIN..=REVENUE_MAX,
        pct in OP_EX_PERCENT_MIN..=OP_EX_PERCENT_MAX
    ) {
        let floor = compute_savings(REVENUE_MIN, OP_EX_PERCENT_MIN, &CATEGORIES)
            .expect("domain minimum");
        let report = compute_savings(revenue, pct, &CATEGORIES).expect("in-domain inputs");
        prop_assert!(floor.total_operating_expense <= report.total_operating_expense);
        for (min_row, row) in floor.categories.iter().zip(&report.categories) {
            prop_assert!(min_row.spend <= row.spend, "{}", row.name);
            prop_assert!(min_row.savings <= row.savings, "{}", row.name);
        }
    }
}
