//! The configuration surface for a widget instance.
//!
//! Every recognized option lives on [`WidgetConfig`]; defaults match a small
//! hourly forecast widget polling every ten minutes. The struct is built once,
//! validated when the widget is constructed, and never mutated afterwards.

use crate::error::WeatherChartError;
use crate::render::options::ChartStyle;
use bon::Builder;
use std::fmt;
use std::time::Duration;

/// A geographical coordinate: latitude first, longitude second.
///
/// # Examples
///
/// ```
/// use weather_chart::LatLon;
///
/// let berlin = LatLon(52.52, 13.405);
/// assert_eq!(berlin.0, 52.52);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// Where to fetch a forecast for.
///
/// The provider accepts a free-form place name, a numeric city id, or a
/// latitude/longitude pair; exactly one of the three ends up in the query.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationSpec {
    /// A named place, e.g. `"Tokyo,jp"`.
    Place(String),
    /// A provider-assigned numeric city id.
    CityId(u64),
    /// A coordinate pair.
    Coordinates(LatLon),
}

impl LocationSpec {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            LocationSpec::Place(name) => vec![("q", name.clone())],
            LocationSpec::CityId(id) => vec![("id", id.to_string())],
            LocationSpec::Coordinates(LatLon(lat, lon)) => {
                vec![("lat", lat.to_string()), ("lon", lon.to_string())]
            }
        }
    }
}

/// Measurement unit system requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    /// Kelvin temperatures, metric everything else.
    #[default]
    Standard,
    /// Celsius temperatures.
    Metric,
    /// Fahrenheit temperatures; pressure is displayed in inches of mercury.
    Imperial,
}

impl Units {
    pub(crate) fn query_param(&self) -> &'static str {
        match self {
            Units::Standard => "standard",
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    /// Whether displayed pressure should be converted to inches of mercury.
    pub fn is_imperial(&self) -> bool {
        matches!(self, Units::Imperial)
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query_param())
    }
}

/// Display unit for rain and snow volumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RainUnit {
    /// Provider units (millimeters), rounded to one decimal.
    #[default]
    Millimeters,
    /// Converted to inches, rounded to two decimals.
    Inches,
}

/// Formatting of hourly x-axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HourFormat {
    /// `0`..`23`.
    #[default]
    TwentyFourHour,
    /// `12am`, `1am`, .., `11pm`.
    TwelveHour,
}

/// Formatting of daily x-axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DailyLabelStyle {
    /// Day of month: `15`.
    #[default]
    DayOfMonth,
    /// Two-letter weekday: `Mo`.
    Weekday,
    /// Both: `Mo 15`.
    WeekdayAndDay,
}

/// Which forecast array the widget charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForecastKind {
    #[default]
    Hourly,
    Daily,
}

/// Icon sprite size variant appended to the icon URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconVariant {
    #[default]
    Standard,
    /// The provider's `@2x` retina sprites.
    Retina,
}

impl IconVariant {
    pub(crate) fn suffix(&self) -> &'static str {
        match self {
            IconVariant::Standard => "",
            IconVariant::Retina => "@2x",
        }
    }
}

/// Full configuration for one widget instance.
///
/// Built with a builder; only the API key and a location are mandatory for
/// the refresh loop to start (checked by
/// [`crate::WeatherChartWidget::new`], not by the builder, so dataset-only
/// use never needs credentials).
///
/// # Examples
///
/// ```
/// use weather_chart::{LatLon, LocationSpec, Units, WidgetConfig};
///
/// let config = WidgetConfig::builder()
///     .api_key("0123456789abcdef")
///     .location(LocationSpec::Coordinates(LatLon(52.52, 13.405)))
///     .units(Units::Metric)
///     .show_rain(true)
///     .build();
/// assert_eq!(config.data_num, 24);
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct WidgetConfig {
    /// Delay before the next fetch after a successful one.
    #[builder(default = Duration::from_secs(10 * 60))]
    pub update_interval: Duration,
    /// Delay before the next fetch after a recoverable failure.
    #[builder(default = Duration::from_secs(5))]
    pub retry_delay: Duration,
    #[builder(default = String::from("https://api.openweathermap.org/data/"))]
    pub api_base: String,
    #[builder(default = String::from("2.5"))]
    pub api_version: String,
    #[builder(default = String::from("onecall"))]
    pub api_endpoint: String,
    #[builder(default)]
    pub api_key: String,
    pub location: Option<LocationSpec>,
    #[builder(default)]
    pub units: Units,
    #[builder(default = String::from("en"))]
    pub lang: String,
    /// Maximum number of forecast points charted per render.
    #[builder(default = 24)]
    pub data_num: usize,
    /// Fixed offset, in hours, applied to timestamps before labelling.
    #[builder(default = 0)]
    pub time_offset_hours: i32,
    #[builder(default = String::from("Weather Forecast"))]
    pub title: String,
    #[builder(default = String::from("https://openweathermap.org/img/wn/"))]
    pub icon_base_url: String,
    #[builder(default)]
    pub icon_variant: IconVariant,
    #[builder(default)]
    pub data_type: ForecastKind,
    #[builder(default = false)]
    pub show_icon: bool,
    #[builder(default = false)]
    pub show_rain: bool,
    /// Render the rain series even when every value is zero.
    #[builder(default = true)]
    pub show_zero_rain: bool,
    #[builder(default)]
    pub rain_unit: RainUnit,
    /// Floor for the precipitation axis so a near-zero maximum does not
    /// collapse it.
    #[builder(default = 0.01)]
    pub rain_min_height: f64,
    /// Add snow volumes into the combined precipitation series.
    #[builder(default = false)]
    pub include_snow: bool,
    #[builder(default = false)]
    pub show_snow: bool,
    #[builder(default = true)]
    pub show_zero_snow: bool,
    #[builder(default = false)]
    pub show_pressure: bool,
    /// Multiplier applied to the observed precipitation maximum when sizing
    /// that axis. `None` picks the per-kind default (2.8 hourly, 3.2 daily).
    pub precipitation_margin: Option<f64>,
    #[builder(default)]
    pub hour_format: HourFormat,
    #[builder(default)]
    pub daily_label: DailyLabelStyle,
    #[builder(default)]
    pub style: ChartStyle,
}

impl WidgetConfig {
    /// Checks the preconditions for ever issuing a fetch.
    pub(crate) fn validate(&self) -> Result<(), WeatherChartError> {
        if self.api_key.is_empty() {
            return Err(WeatherChartError::MissingApiKey);
        }
        if self.location.is_none() {
            return Err(WeatherChartError::MissingLocation);
        }
        Ok(())
    }
}
