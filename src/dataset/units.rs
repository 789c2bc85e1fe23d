//! Unit conversions and display rounding for series values.

use crate::config::RainUnit;

pub const MM_PER_INCH: f64 = 25.4;
pub const INHG_PER_HPA: f64 = 0.029_53;

/// Rounds to `decimals` decimal places, matching the provider widget's
/// display rounding.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Converts a precipitation volume in millimeters to its display value:
/// inches rounded to two decimals, or millimeters rounded to one.
pub fn format_precipitation(mm: f64, unit: RainUnit) -> f64 {
    match unit {
        RainUnit::Inches => round_to(mm / MM_PER_INCH, 2),
        RainUnit::Millimeters => round_to(mm, 1),
    }
}

/// Converts hectopascals to the display value: inches of mercury rounded to
/// two decimals under imperial units, otherwise whole hectopascals as-is.
pub fn format_pressure(hpa: f64, imperial: bool) -> f64 {
    if imperial {
        round_to(hpa * INHG_PER_HPA, 2)
    } else {
        hpa
    }
}
