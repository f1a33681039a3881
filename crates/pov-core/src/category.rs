//! The fixed expense category dataset.
//!
//! Seven categories, each with an assumed share of total operating expense,
//! a plausible allocation band around that share, and an assumed efficiency
//! gain. The gain is an illustrative per-category constant; it is not scaled
//! by the number of categories or by any input.

use serde::Serialize;

/// One expense category. Instances are `'static` and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpenseCategory {
    /// Stable ordering key, equal to the category's position in [`CATEGORIES`].
    pub id: usize,
    /// Display name.
    pub name: &'static str,
    /// Fraction of total operating expense attributed to this category.
    pub base_allocation: f64,
    /// Assumed fractional cost reduction.
    pub efficiency_gain: f64,
    /// Plausible allocation band; `low <= base_allocation <= high`.
    pub range: AllocationRange,
}

/// Low/high bounds around a category's base allocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AllocationRange {
    pub low: f64,
    pub high: f64,
}

impl AllocationRange {
    const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

/// Number of fixed categories.
pub const CATEGORY_COUNT: usize = 7;

/// The fixed category list, in display order.
pub static CATEGORIES: [ExpenseCategory; CATEGORY_COUNT] = [
    ExpenseCategory {
        id: 0,
        name: "Inventory Carrying / Holding Cost",
        base_allocation: 0.12,
        efficiency_gain: 0.15,
        range: AllocationRange::new(0.08, 0.15),
    },
    ExpenseCategory {
        id: 1,
        name: "Warehousing & Logistics (Outbound + Internal)",
        base_allocation: 0.18,
        efficiency_gain: 0.10,
        range: AllocationRange::new(0.12, 0.22),
    },
    ExpenseCategory {
        id: 2,
        name: "Sales, Marketing, & Customer Service",
        base_allocation: 0.25,
        efficiency_gain: 0.08,
        range: AllocationRange::new(0.15, 0.30),
    },
    ExpenseCategory {
        id: 3,
        name: "Order Processing / Back-Office Overhead",
        base_allocation: 0.08,
        efficiency_gain: 0.20,
        range: AllocationRange::new(0.05, 0.12),
    },
    ExpenseCategory {
        id: 4,
        name: "Returns, Obsolescence & Shrinkage",
        base_allocation: 0.05,
        efficiency_gain: 0.12,
        range: AllocationRange::new(0.02, 0.08),
    },
    ExpenseCategory {
        id: 5,
        name: "IT",
        base_allocation: 0.10,
        efficiency_gain: 0.05,
        range: AllocationRange::new(0.05, 0.15),
    },
    ExpenseCategory {
        id: 6,
        name: "Risk & Compliance / Other",
        base_allocation: 0.05,
        efficiency_gain: 0.05,
        range: AllocationRange::new(0.02, 0.08),
    },
];

/// Look up a category by index.
#[must_use]
pub fn get(index: usize) -> Option<&'static ExpenseCategory> {
    CATEGORIES.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_positions() {
        for (i, cat) in CATEGORIES.iter().enumerate() {
            assert_eq!(cat.id, i);
        }
    }

    #[test]
    fn base_allocation_within_range() {
        for cat in &CATEGORIES {
            assert!(
                cat.range.low <= cat.base_allocation && cat.base_allocation <= cat.range.high,
                "{} allocation outside its band",
                cat.name
            );
        }
    }

    #[test]
    fn fractions_are_open_unit_interval() {
        for cat in &CATEGORIES {
            assert!(cat.base_allocation > 0.0 && cat.base_allocation < 1.0);
            assert!(cat.efficiency_gain > 0.0 && cat.efficiency_gain < 1.0);
        }
    }

    #[test]
    fn get_out_of_range_is_none() {
        assert!(get(CATEGORY_COUNT).is_none());
        assert_eq!(get(5).map(|c| c.name), Some("IT"));
    }
}
