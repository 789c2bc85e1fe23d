mod config;
mod dataset;
mod error;
mod fetch;
mod render;
mod schedule;
mod widget;

pub use error::WeatherChartError;
pub use widget::*;

pub use config::{
    DailyLabelStyle, ForecastKind, HourFormat, IconVariant, LatLon, LocationSpec, RainUnit, Units,
    WidgetConfig,
};

pub use dataset::builder::{
    build_daily_dataset, build_hourly_dataset, DAY_TEMPERATURE, ICON_ROW, MAX_TEMPERATURE,
    MIN_TEMPERATURE, NIGHT_TEMPERATURE, PRESSURE, RAIN_VOLUME, SNOW_VOLUME,
};
pub use dataset::margins::{solve_margin_factors, MarginFactors, MarginInputs};
pub use dataset::point::{DailyForecastPoint, DayPhase, ForecastPoint, IconCode};
pub use dataset::series::{
    series_max, series_min, AxisId, AxisRange, AxisRanges, ChartDataset, ChartSeries,
};

pub use fetch::error::FetchError;
pub use fetch::fetcher::ForecastFetcher;
pub use fetch::response::ForecastPayload;

pub use render::error::RenderError;
pub use render::options::ChartStyle;
pub use render::renderer::{ChartRenderer, NullRenderer};

pub use schedule::{FetchOutcome, RefreshPolicy, SchedulerState};
