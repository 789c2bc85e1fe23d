//! Raw forecast records as the dataset builder consumes them.

use std::fmt;

/// Day/night classification of a forecast point, derived once from the
/// trailing character of the provider's icon code (`"10d"` is day, `"01n"`
/// is night). Codes matching neither convention are kept explicit as
/// `Unknown` instead of being silently assigned to one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPhase {
    Day,
    Night,
    Unknown,
}

impl DayPhase {
    pub fn from_icon_code(code: &str) -> Self {
        match code.chars().last() {
            Some('d') => DayPhase::Day,
            Some('n') => DayPhase::Night,
            _ => DayPhase::Unknown,
        }
    }
}

/// A provider icon code such as `"10d"`, carrying its day/night suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconCode {
    code: String,
    phase: DayPhase,
}

impl IconCode {
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        let phase = DayPhase::from_icon_code(&code);
        IconCode { code, phase }
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn phase(&self) -> DayPhase {
        self.phase
    }
}

impl fmt::Display for IconCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// One hourly forecast record. Immutable once received; ordering by
/// timestamp is not guaranteed by the provider and is re-established by the
/// builder.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub timestamp_seconds: i64,
    pub temperature: f64,
    pub icon: IconCode,
    pub rain_mm: Option<f64>,
    pub snow_mm: Option<f64>,
    pub pressure_hpa: Option<f64>,
}

/// One daily forecast record: a min/max temperature pair and daily
/// precipitation totals.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecastPoint {
    pub timestamp_seconds: i64,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub icon: IconCode,
    pub rain_mm: Option<f64>,
    pub snow_mm: Option<f64>,
    pub pressure_hpa: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_follows_the_suffix_convention() {
        assert_eq!(DayPhase::from_icon_code("10d"), DayPhase::Day);
        assert_eq!(DayPhase::from_icon_code("01n"), DayPhase::Night);
        assert_eq!(DayPhase::from_icon_code("13x"), DayPhase::Unknown);
        assert_eq!(DayPhase::from_icon_code(""), DayPhase::Unknown);
    }

    #[test]
    fn icon_code_classifies_once() {
        let icon = IconCode::new("04n");
        assert_eq!(icon.as_str(), "04n");
        assert_eq!(icon.phase(), DayPhase::Night);
    }
}
