//! Drill-down "problems solved" lists.
//!
//! Inventory (id 0) and logistics (id 1) have their own lists; every other
//! category id shares [`DEFAULT_PROBLEMS`].

const INVENTORY_PROBLEMS: &[&str] = &[
    "Demand Forecasting",
    "Inventory Planning & Replenishment",
    "Supplier Lead Time & Reliability",
    "SKU Rationalization",
    "Warehouse Layout & Slotting",
    "Cycle Counting & Inventory Accuracy",
    "Order Pattern Optimization",
    "Inventory Visibility & Data Systems",
    "Obsolescence & Aging Control",
];

const LOGISTICS_PROBLEMS: &[&str] = &[
    "Route Optimization",
    "Carrier Selection Logic",
    "Freight Audit & Payment",
    "Load Consolidation",
    "Cross-Docking Efficiency",
    "Last Mile Delivery Cost",
    "Reverse Logistics Flow",
    "Packaging Optimization",
    "Labor Management",
];

/// Shared list for categories without a bespoke one.
pub const DEFAULT_PROBLEMS: &[&str] = &[
    "Process Automation",
    "Data Silo Integration",
    "Real-time Analytics",
    "Resource Allocation",
    "Predictive Modeling",
    "Workflow Standardization",
];

/// Problem list for a category id, in display order. Never empty.
#[must_use]
pub fn lookup(category_id: usize) -> &'static [&'static str] {
    match category_id {
        0 => INVENTORY_PROBLEMS,
        1 => LOGISTICS_PROBLEMS,
        _ => DEFAULT_PROBLEMS,
    }
}
