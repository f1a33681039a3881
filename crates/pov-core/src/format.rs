//! Render-time formatting.
//!
//! Everything here turns a computed figure into display text or a layout
//! percentage. Results are only ever written into the page; nothing here is
//! read back into calculator state.

use crate::category::ExpenseCategory;

/// Ticks drawn on an efficiency meter.
pub const TICK_COUNT: usize = 20;
/// Gain represented by a full meter.
pub const TICK_METER_SCALE: f64 = 0.30;
/// Allocation represented by the full width of the band axis.
pub const ALLOCATION_AXIS_SCALE: f64 = 0.35;

const COMPACT_SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

/// Whole-dollar USD with thousands separators, e.g. `$18,720,000`.
#[must_use]
pub fn currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// Compact USD with no fraction digits, e.g. `$125M`, `$1B`, `$950K`.
#[must_use]
pub fn compact_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let mut magnitude = value.abs();
    let mut tier = 0;
    while magnitude >= 1000.0 && tier < COMPACT_SUFFIXES.len() - 1 {
        magnitude /= 1000.0;
        tier += 1;
    }

    let mut rounded = magnitude.round();
    // 999.6K rounds up to 1M, not 1000K.
    if rounded >= 1000.0 && tier < COMPACT_SUFFIXES.len() - 1 {
        rounded = (rounded / 1000.0).round();
        tier += 1;
    }

    if tier == 0 {
        format!("{sign}${rounded}")
    } else {
        format!("{sign}${}{}", group_thousands(rounded as u64), COMPACT_SUFFIXES[tier])
    }
}

/// Slider label style: `$5.2B`, `$500M`, otherwise the raw dollar value.
/// Halves round up, so 5.25B reads `$5.3B`.
#[must_use]
pub fn billions(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!("${:.1}B", (value / 100_000_000.0).round() / 10.0)
    } else if value >= 1_000_000.0 {
        format!("${:.0}M", (value / 1_000_000.0).round())
    } else {
        format!("${value}")
    }
}

/// A fraction as a percentage, e.g. `percent(0.12, 1) == "12.0%"`.
#[must_use]
pub fn percent(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

/// Index of the highlighted tick on the efficiency meter.
#[must_use]
pub fn tick_meter_index(efficiency_gain: f64) -> usize {
    let raw = (efficiency_gain / TICK_METER_SCALE * TICK_COUNT as f64).floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(TICK_COUNT - 1)
    }
}

/// Horizontal placement of a category's allocation band, in percent of the
/// axis width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandGeometry {
    pub left_pct: f64,
    pub width_pct: f64,
    /// Position of the base-allocation marker.
    pub marker_pct: f64,
}

#[must_use]
pub fn range_band(category: &ExpenseCategory) -> BandGeometry {
    let scale = |v: f64| v / ALLOCATION_AXIS_SCALE * 100.0;
    BandGeometry {
        left_pct: scale(category.range.low),
        width_pct: scale(category.range.high - category.range.low),
        marker_pct: scale(category.base_allocation),
    }
}

/// Fill percentage of a slider track.
#[must_use]
pub fn slider_position(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min) * 100.0).clamp(0.0, 100.0)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
