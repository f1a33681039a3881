//! Savings calculator.
//!
//! [`compute_savings`] is a pure function of revenue, operating-expense
//! percentage and a category list. It validates the inputs against their
//! declared domain and then makes a single pass over the categories, deriving
//! spend before savings. Nothing is rounded here; formatting is a render-time
//! concern (see [`crate::format`]).
//!
//! [`CalculatorState`] is the per-page input state. It owns no derived
//! values; call [`CalculatorState::report`] to evaluate it.

use serde::Serialize;

use crate::category::{CATEGORIES, CATEGORY_COUNT, ExpenseCategory};
use crate::error::CalcError;

/// Lowest accepted annual revenue.
pub const REVENUE_MIN: f64 = 500_000_000.0;
/// Highest accepted annual revenue.
pub const REVENUE_MAX: f64 = 20_000_000_000.0;
/// Revenue on page load.
pub const REVENUE_DEFAULT: f64 = 5_200_000_000.0;

/// Lowest accepted operating-expense percentage.
pub const OP_EX_PERCENT_MIN: f64 = 5.0;
/// Highest accepted operating-expense percentage.
pub const OP_EX_PERCENT_MAX: f64 = 50.0;
/// Operating-expense percentage on page load.
pub const OP_EX_PERCENT_DEFAULT: f64 = 20.0;

/// Derived figures for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySavings {
    pub id: usize,
    pub name: &'static str,
    pub spend: f64,
    pub spend_low: f64,
    pub spend_high: f64,
    pub savings: f64,
    pub savings_low: f64,
    pub savings_high: f64,
}

/// Aggregate savings across all categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsTotals {
    pub total_savings: f64,
    pub total_savings_low: f64,
    pub total_savings_high: f64,
}

/// Output of [`compute_savings`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsReport {
    pub revenue: f64,
    pub op_ex_percent: f64,
    pub total_operating_expense: f64,
    pub categories: Vec<CategorySavings>,
    pub totals: SavingsTotals,
}

/// `revenue × (op_ex_percent / 100)`.
#[must_use]
pub fn total_operating_expense(revenue: f64, op_ex_percent: f64) -> f64 {
    revenue * (op_ex_percent / 100.0)
}

/// Check a revenue value against its domain.
///
/// # Errors
///
/// Returns [`CalcError::InvalidInput`] if `revenue` is not finite or lies
/// outside `[REVENUE_MIN, REVENUE_MAX]`.
pub fn validate_revenue(revenue: f64) -> Result<f64, CalcError> {
    check_bounds("revenue", revenue, REVENUE_MIN, REVENUE_MAX)
}

/// Check an operating-expense percentage against its domain.
///
/// # Errors
///
/// Returns [`CalcError::InvalidInput`] if `op_ex_percent` is not finite or
/// lies outside `[OP_EX_PERCENT_MIN, OP_EX_PERCENT_MAX]`.
pub fn validate_op_ex_percent(op_ex_percent: f64) -> Result<f64, CalcError> {
    check_bounds(
        "op_ex_percent",
        op_ex_percent,
        OP_EX_PERCENT_MIN,
        OP_EX_PERCENT_MAX,
    )
}

/// Check a category index against the fixed category list.
///
/// # Errors
///
/// Returns [`CalcError::UnknownCategory`] if `index` is not below
/// [`CATEGORY_COUNT`].
pub fn validate_category_index(index: usize) -> Result<usize, CalcError> {
    if index < CATEGORY_COUNT {
        Ok(index)
    } else {
        Err(CalcError::UnknownCategory {
            index,
            count: CATEGORY_COUNT,
        })
    }
}

fn check_bounds(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, CalcError> {
    // NaN fails both comparisons, so it is rejected here too.
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput {
            field,
            value,
            min,
            max,
        })
    }
}

/// Compute per-category and aggregate savings.
///
/// # Errors
///
/// Returns [`CalcError::InvalidInput`] if either input is outside its domain.
pub fn compute_savings(
    revenue: f64,
    op_ex_percent: f64,
    categories: &[ExpenseCategory],
) -> Result<SavingsReport, CalcError> {
    let revenue = validate_revenue(revenue)?;
    let op_ex_percent = validate_op_ex_percent(op_ex_percent)?;

    let total = total_operating_expense(revenue, op_ex_percent);

    let mut totals = SavingsTotals {
        total_savings: 0.0,
        total_savings_low: 0.0,
        total_savings_high: 0.0,
    };

    let categories: Vec<CategorySavings> = categories
        .iter()
        .map(|cat| {
            let spend = total * cat.base_allocation;
            let spend_low = total * cat.range.low;
            let spend_high = total * cat.range.high;

            let row = CategorySavings {
                id: cat.id,
                name: cat.name,
                spend,
                spend_low,
                spend_high,
                savings: spend * cat.efficiency_gain,
                savings_low: spend_low * cat.efficiency_gain,
                savings_high: spend_high * cat.efficiency_gain,
            };

            totals.total_savings += row.savings;
            totals.total_savings_low += row.savings_low;
            totals.total_savings_high += row.savings_high;
            row
        })
        .collect();

    Ok(SavingsReport {
        revenue,
        op_ex_percent,
        total_operating_expense: total,
        categories,
        totals,
    })
}

/// Per-page calculator inputs.
///
/// Every setter validates, so a constructed state is always inside the
/// domain and [`CalculatorState::report`] cannot fail on its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorState {
    revenue: f64,
    op_ex_percent: f64,
    active_category_index: usize,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            revenue: REVENUE_DEFAULT,
            op_ex_percent: OP_EX_PERCENT_DEFAULT,
            active_category_index: 0,
        }
    }
}

impl CalculatorState {
    /// Build a state from raw inputs.
    ///
    /// # Errors
    ///
    /// Returns the first [`CalcError`] among the three inputs.
    pub fn new(
        revenue: f64,
        op_ex_percent: f64,
        active_category_index: usize,
    ) -> Result<Self, CalcError> {
        Ok(Self {
            revenue: validate_revenue(revenue)?,
            op_ex_percent: validate_op_ex_percent(op_ex_percent)?,
            active_category_index: validate_category_index(active_category_index)?,
        })
    }

    pub fn revenue(&self) -> f64 {
        self.revenue
    }

    pub fn op_ex_percent(&self) -> f64 {
        self.op_ex_percent
    }

    pub fn active_category_index(&self) -> usize {
        self.active_category_index
    }

    /// The currently selected category.
    pub fn active_category(&self) -> &'static ExpenseCategory {
        &CATEGORIES[self.active_category_index]
    }

    /// # Errors
    ///
    /// Returns [`CalcError::InvalidInput`] and leaves the state untouched if
    /// `revenue` is out of domain.
    pub fn set_revenue(&mut self, revenue: f64) -> Result<(), CalcError> {
        self.revenue = validate_revenue(revenue)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`CalcError::InvalidInput`] and leaves the state untouched if
    /// `op_ex_percent` is out of domain.
    pub fn set_op_ex_percent(&mut self, op_ex_percent: f64) -> Result<(), CalcError> {
        self.op_ex_percent = validate_op_ex_percent(op_ex_percent)?;
        Ok(())
    }

    /// Select a category. Returns whether the selection changed; selecting
    /// the current category is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::UnknownCategory`] if `index` is out of range.
    pub fn select_category(&mut self, index: usize) -> Result<bool, CalcError> {
        let index = validate_category_index(index)?;
        let changed = index != self.active_category_index;
        self.active_category_index = index;
        Ok(changed)
    }

    /// Evaluate the calculator against the fixed category list.
    ///
    /// # Errors
    ///
    /// Fails only on out-of-domain inputs, which the validating constructor
    /// and setters already rule out.
    pub fn report(&self) -> Result<SavingsReport, CalcError> {
        compute_savings(self.revenue, self.op_ex_percent, &CATEGORIES)
    }
}
