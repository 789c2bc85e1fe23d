//! Transforms ordered forecast records into labeled series and axis ranges.
//!
//! Both builders follow the same pipeline: stable sort by timestamp, truncate
//! to the configured point count, pad one placeholder slot at each end so
//! icon sprites at the extremities are not clipped by the axes, derive the
//! per-point values, then compute NaN-free statistics and axis ranges that
//! keep the temperature lines, icon row and precipitation bars from
//! overlapping. Placeholders hold the explicit "no value" marker and never
//! feed the statistics.

use crate::config::WidgetConfig;
use crate::dataset::labels::{daily_label, hour_label, local_time};
use crate::dataset::margins::{solve_margin_factors, MarginInputs};
use crate::dataset::point::{DailyForecastPoint, DayPhase, ForecastPoint};
use crate::dataset::series::{
    series_max, series_min, AxisId, AxisRange, AxisRanges, ChartDataset, ChartSeries,
};
use crate::dataset::units::{format_precipitation, format_pressure, round_to};
use crate::{IconCode, RainUnit};

pub const DAY_TEMPERATURE: &str = "Day Temperature";
pub const NIGHT_TEMPERATURE: &str = "Night Temperature";
pub const MIN_TEMPERATURE: &str = "Minimum Temperature";
pub const MAX_TEMPERATURE: &str = "Maximum Temperature";
pub const ICON_ROW: &str = "Icons";
pub const RAIN_VOLUME: &str = "Rain Volume";
pub const SNOW_VOLUME: &str = "Snow Volume";
pub const PRESSURE: &str = "Pressure";

/// Default precipitation-axis multipliers; the hourly and daily widgets have
/// always used different constants, so the difference is kept configurable
/// via `WidgetConfig::precipitation_margin` rather than unified.
const HOURLY_PRECIPITATION_MARGIN: f64 = 2.8;
const DAILY_PRECIPITATION_MARGIN: f64 = 3.2;
/// Extra precipitation-axis headroom when the icon row occupies the top of
/// the chart.
const ICON_ROW_PRECIPITATION_ALLOWANCE: f64 = 0.4;

const HOURLY_SERIES_KIND_FACTOR: f64 = 1.0;
const DAILY_SERIES_KIND_FACTOR: f64 = 1.25;

/// Symmetric fraction of the pressure spread added on both sides.
const PRESSURE_AXIS_MARGIN: f64 = 0.1;
/// Floor for the solved factors when the container is too small for the
/// solve, so a margin is always added as long as the spread is non-zero.
const MIN_RANGE_MARGIN: f64 = 0.05;

struct KindParams {
    default_precipitation_margin: f64,
    series_kind_factor: f64,
}

/// Builds the chart dataset for hourly forecast points: day and night
/// temperature series (duplicated at phase transitions so the lines
/// connect), plus the optional icon, rain, snow and pressure series.
pub fn build_hourly_dataset(points: &[ForecastPoint], config: &WidgetConfig) -> ChartDataset {
    let mut sorted: Vec<&ForecastPoint> = points.iter().collect();
    sorted.sort_by_key(|p| p.timestamp_seconds);
    sorted.truncate(config.data_num);

    let mut labels = vec![String::new()];
    let mut day_temps: Vec<Option<f64>> = vec![None];
    let mut night_temps: Vec<Option<f64>> = vec![None];
    let mut temps: Vec<Option<f64>> = vec![None];
    let mut rains: Vec<Option<f64>> = vec![None];
    let mut snows: Vec<Option<f64>> = vec![None];
    let mut pressures: Vec<Option<f64>> = vec![None];
    let mut icons: Vec<Option<String>> = vec![None];

    // The first point decides which phase the chart opens in; Night and
    // Unknown both open as night.
    let mut day_time = sorted
        .first()
        .map(|p| p.icon.phase() == DayPhase::Day)
        .unwrap_or(false);

    for point in &sorted {
        let local = local_time(point.timestamp_seconds, config.time_offset_hours);
        labels.push(hour_label(&local, config.hour_format));

        let temp = round_to(point.temperature, 1);
        match point.icon.phase() {
            DayPhase::Day => {
                day_temps.push(Some(temp));
                // Duplicate into the night series at the night-to-day
                // boundary so the two lines meet.
                night_temps.push(if day_time { None } else { Some(temp) });
                day_time = true;
            }
            DayPhase::Night => {
                night_temps.push(Some(temp));
                day_temps.push(if day_time { Some(temp) } else { None });
                day_time = false;
            }
            // An unclassifiable icon code continues the current phase
            // rather than forcing a transition.
            DayPhase::Unknown => {
                if day_time {
                    day_temps.push(Some(temp));
                    night_temps.push(None);
                } else {
                    night_temps.push(Some(temp));
                    day_temps.push(None);
                }
            }
        }
        temps.push(Some(temp));
        rains.push(Some(derive_precipitation(
            point.rain_mm,
            point.snow_mm,
            config.include_snow,
            config.rain_unit,
        )));
        snows.push(Some(format_precipitation(
            point.snow_mm.unwrap_or(0.0),
            config.rain_unit,
        )));
        pressures.push(
            point
                .pressure_hpa
                .map(|v| format_pressure(v, config.units.is_imperial())),
        );
        icons.push(icon_url(config, &point.icon));
    }

    push_trailing_placeholders(&mut labels, &mut icons, [
        &mut day_temps,
        &mut night_temps,
        &mut temps,
        &mut rains,
        &mut snows,
        &mut pressures,
    ]);

    let temp_pair = vec![
        ChartSeries::new(DAY_TEMPERATURE, day_temps, AxisId::Temperature),
        ChartSeries::new(NIGHT_TEMPERATURE, night_temps, AxisId::Temperature),
    ];
    assemble(
        config,
        labels,
        temp_pair,
        series_min(&temps),
        series_max(&temps),
        rains,
        snows,
        pressures,
        icons,
        KindParams {
            default_precipitation_margin: HOURLY_PRECIPITATION_MARGIN,
            series_kind_factor: HOURLY_SERIES_KIND_FACTOR,
        },
    )
}

/// Builds the chart dataset for daily forecast points: minimum and maximum
/// temperature series plus the optional icon, rain, snow and pressure
/// series.
pub fn build_daily_dataset(points: &[DailyForecastPoint], config: &WidgetConfig) -> ChartDataset {
    let mut sorted: Vec<&DailyForecastPoint> = points.iter().collect();
    sorted.sort_by_key(|p| p.timestamp_seconds);
    sorted.truncate(config.data_num);

    let mut labels = vec![String::new()];
    let mut min_temps: Vec<Option<f64>> = vec![None];
    let mut max_temps: Vec<Option<f64>> = vec![None];
    let mut rains: Vec<Option<f64>> = vec![None];
    let mut snows: Vec<Option<f64>> = vec![None];
    let mut pressures: Vec<Option<f64>> = vec![None];
    let mut icons: Vec<Option<String>> = vec![None];

    for point in &sorted {
        let local = local_time(point.timestamp_seconds, config.time_offset_hours);
        labels.push(daily_label(&local, config.daily_label));
        min_temps.push(Some(round_to(point.temperature_min, 1)));
        max_temps.push(Some(round_to(point.temperature_max, 1)));
        rains.push(Some(derive_precipitation(
            point.rain_mm,
            point.snow_mm,
            config.include_snow,
            config.rain_unit,
        )));
        snows.push(Some(format_precipitation(
            point.snow_mm.unwrap_or(0.0),
            config.rain_unit,
        )));
        pressures.push(
            point
                .pressure_hpa
                .map(|v| format_pressure(v, config.units.is_imperial())),
        );
        icons.push(icon_url(config, &point.icon));
    }

    push_trailing_placeholders(&mut labels, &mut icons, [
        &mut min_temps,
        &mut max_temps,
        &mut rains,
        &mut snows,
        &mut pressures,
    ]);

    let temp_min = series_min(&min_temps);
    let temp_max = series_max(&max_temps);
    let temp_pair = vec![
        ChartSeries::new(MIN_TEMPERATURE, min_temps, AxisId::Temperature),
        ChartSeries::new(MAX_TEMPERATURE, max_temps, AxisId::Temperature),
    ];
    assemble(
        config,
        labels,
        temp_pair,
        temp_min,
        temp_max,
        rains,
        snows,
        pressures,
        icons,
        KindParams {
            default_precipitation_margin: DAILY_PRECIPITATION_MARGIN,
            series_kind_factor: DAILY_SERIES_KIND_FACTOR,
        },
    )
}

/// Combined rain/snow display value for one point: sum when snow inclusion
/// is on and both are present, otherwise rain, otherwise snow (when
/// included), otherwise zero.
fn derive_precipitation(
    rain_mm: Option<f64>,
    snow_mm: Option<f64>,
    include_snow: bool,
    unit: RainUnit,
) -> f64 {
    match (rain_mm, snow_mm, include_snow) {
        (Some(rain), Some(snow), true) => format_precipitation(rain + snow, unit),
        (Some(rain), _, _) => format_precipitation(rain, unit),
        (None, Some(snow), true) => format_precipitation(snow, unit),
        _ => 0.0,
    }
}

fn icon_url(config: &WidgetConfig, icon: &IconCode) -> Option<String> {
    if !config.show_icon || icon.as_str().is_empty() {
        return None;
    }
    Some(format!(
        "{}{}{}.png",
        config.icon_base_url,
        icon,
        config.icon_variant.suffix()
    ))
}

fn push_trailing_placeholders<const N: usize>(
    labels: &mut Vec<String>,
    icons: &mut Vec<Option<String>>,
    values: [&mut Vec<Option<f64>>; N],
) {
    labels.push(String::new());
    icons.push(None);
    for column in values {
        column.push(None);
    }
}

#[allow(clippy::too_many_arguments)]
fn assemble(
    config: &WidgetConfig,
    labels: Vec<String>,
    temp_pair: Vec<ChartSeries>,
    temp_min: Option<f64>,
    temp_max: Option<f64>,
    rains: Vec<Option<f64>>,
    snows: Vec<Option<f64>>,
    pressures: Vec<Option<f64>>,
    icons: Vec<Option<String>>,
    params: KindParams,
) -> ChartDataset {
    let max_rain = series_max(&rains);
    let max_snow = series_max(&snows);
    let has_temperatures = temp_min.is_some() && temp_max.is_some();

    // Zero-value suppression: an optional series renders when enabled and
    // either zero values are allowed or something non-zero was observed.
    let rain_visible = has_temperatures
        && config.show_rain
        && (config.show_zero_rain || max_rain.unwrap_or(0.0) > 0.0);
    let snow_visible = has_temperatures
        && config.show_snow
        && (config.show_zero_snow || max_snow.unwrap_or(0.0) > 0.0);
    let pressure_visible =
        has_temperatures && config.show_pressure && series_max(&pressures).is_some();

    let margins = solve_margin_factors(&MarginInputs {
        container_height: f64::from(config.style.height),
        font_size: config.style.font_size,
        icon_size: config.style.icon_size,
        label_offset: config.style.label_offset,
        show_secondary_axis: rain_visible || snow_visible || pressure_visible,
        series_kind_factor: params.series_kind_factor,
    });

    let mut icon_row_value = None;
    let temperature = match (temp_min, temp_max) {
        (Some(min), Some(max)) => {
            let spread = max - min;
            let top_of_data = if config.show_icon {
                let row = max + spread * margins.icon_below.max(MIN_RANGE_MARGIN);
                icon_row_value = Some(row);
                row
            } else {
                max
            };
            Some(AxisRange {
                min: min - spread * margins.separation.max(MIN_RANGE_MARGIN),
                max: top_of_data + spread * margins.icon_top.max(MIN_RANGE_MARGIN),
            })
        }
        _ => None,
    };

    let precipitation = if rain_visible || snow_visible {
        let observed = max_rain
            .unwrap_or(0.0)
            .max(max_snow.unwrap_or(0.0))
            .max(config.rain_min_height);
        let multiplier = config
            .precipitation_margin
            .unwrap_or(params.default_precipitation_margin)
            + if config.show_icon {
                ICON_ROW_PRECIPITATION_ALLOWANCE
            } else {
                0.0
            };
        Some(AxisRange {
            min: 0.0,
            max: observed * multiplier,
        })
    } else {
        None
    };

    let pressure = if pressure_visible {
        match (series_min(&pressures), series_max(&pressures)) {
            (Some(min), Some(max)) => {
                let spread = max - min;
                let pad = if spread > 0.0 {
                    spread * PRESSURE_AXIS_MARGIN
                } else {
                    1.0
                };
                Some(AxisRange {
                    min: min - pad,
                    max: max + pad,
                })
            }
            _ => None,
        }
    } else {
        None
    };

    let mut series = temp_pair;
    if let Some(row) = icon_row_value {
        // A flat line at the icon-row height; the renderer replaces its
        // point markers with the sprite images.
        let values = icons.iter().map(|url| url.as_ref().map(|_| row)).collect();
        series.push(ChartSeries::new(ICON_ROW, values, AxisId::Temperature));
    }
    if rain_visible {
        series.push(ChartSeries::new(RAIN_VOLUME, rains, AxisId::Precipitation));
    }
    if snow_visible {
        series.push(ChartSeries::new(SNOW_VOLUME, snows, AxisId::Precipitation));
    }
    if pressure_visible {
        series.push(ChartSeries::new(PRESSURE, pressures, AxisId::Pressure));
    }

    ChartDataset {
        labels,
        series,
        icons,
        ranges: AxisRanges {
            temperature,
            precipitation,
            pressure,
        },
    }
}
