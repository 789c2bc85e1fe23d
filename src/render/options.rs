//! Display options handed to the charting backend alongside the built dataset.
//!
//! These knobs only influence how a backend draws; none of them feed back into
//! dataset derivation except the geometry fields (`height`, `font_size`,
//! `icon_size`, `label_offset`), which parameterize the margin-factor solve.

use bon::Builder;

/// Visual styling and geometry for a rendered chart.
///
/// Defaults mirror a 500x300 widget with white lines on a transparent
/// background.
///
/// # Examples
///
/// ```
/// use weather_chart::ChartStyle;
///
/// let style = ChartStyle::builder()
///     .height(400)
///     .curve_tension(0.2)
///     .build();
/// assert_eq!(style.height, 400);
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct ChartStyle {
    /// Primary line color (temperature).
    #[builder(default = String::from("rgba(255, 255, 255, 1)"))]
    pub color: String,
    /// Line color for the daily minimum-temperature series.
    #[builder(default = String::from("rgba(255, 255, 255, 1)"))]
    pub color_min: String,
    /// Line color for the daily maximum-temperature series.
    #[builder(default = String::from("rgba(255, 255, 255, 1)"))]
    pub color_max: String,
    /// Line color for the rain series.
    #[builder(default = String::from("rgba(255, 255, 255, 1)"))]
    pub color_rain: String,
    /// Line color for the snow series.
    #[builder(default = String::from("rgba(255, 255, 255, 1)"))]
    pub color_snow: String,
    /// Line color for the pressure series.
    #[builder(default = String::from("rgba(255, 255, 255, 1)"))]
    pub color_pressure: String,
    #[builder(default = String::from("rgba(0, 0, 0, 0)"))]
    pub background_color: String,
    /// Fill color under the precipitation bars.
    #[builder(default = String::from("rgba(255, 255, 255, 0.1)"))]
    pub fill_color: String,
    /// Dash pattern for the night-temperature line.
    #[builder(default = vec![5.0, 1.0])]
    pub night_border_dash: Vec<f64>,
    /// Label font size in pixels.
    #[builder(default = 16.0)]
    pub font_size: f64,
    #[builder(default = String::from("normal"))]
    pub font_weight: String,
    /// Line curve tension (0.0 = straight segments).
    #[builder(default = 0.4)]
    pub curve_tension: f64,
    /// Decimal places used when a backend prints point labels.
    #[builder(default = 1)]
    pub label_precision: u32,
    /// Vertical offset, in pixels, between a point and its printed label.
    #[builder(default = 4.0)]
    pub label_offset: f64,
    /// Icon sprite edge length in pixels.
    #[builder(default = 50.0)]
    pub icon_size: f64,
    /// Container width in pixels.
    #[builder(default = 500)]
    pub width: u32,
    /// Container height in pixels.
    #[builder(default = 300)]
    pub height: u32,
    /// Chart animation duration in milliseconds; 0 disables animation.
    #[builder(default = 0)]
    pub animation_ms: u64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::builder().build()
    }
}
