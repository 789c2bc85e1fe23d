//! The per-instance widget state record and its refresh loop.
//!
//! All mutable widget state (the loaded flag, the cached chart handle, the
//! most recent forecast snapshot) lives on the instance, so any number of
//! independent widgets can coexist. The snapshot is replaced wholesale on
//! every successful fetch; the chart dataset is recomputed from scratch on
//! every render.

use crate::config::{ForecastKind, WidgetConfig};
use crate::dataset::builder::{build_daily_dataset, build_hourly_dataset};
use crate::dataset::series::ChartDataset;
use crate::error::WeatherChartError;
use crate::fetch::fetcher::ForecastFetcher;
use crate::fetch::response::ForecastPayload;
use crate::render::error::RenderError;
use crate::render::renderer::ChartRenderer;
use crate::schedule::{FetchOutcome, RefreshPolicy, SchedulerState};
use log::{error, warn};
use tokio::time::sleep;

/// A forecast chart widget: fetches on a timer, derives the dataset, and
/// hands it to a charting backend.
///
/// # Examples
///
/// ```no_run
/// use weather_chart::{
///     LatLon, LocationSpec, NullRenderer, Units, WeatherChartWidget, WidgetConfig,
/// };
///
/// # async fn run() -> Result<(), weather_chart::WeatherChartError> {
/// let config = WidgetConfig::builder()
///     .api_key("0123456789abcdef")
///     .location(LocationSpec::Coordinates(LatLon(52.52, 13.405)))
///     .units(Units::Metric)
///     .show_icon(true)
///     .show_rain(true)
///     .build();
/// let mut widget = WeatherChartWidget::new(config, NullRenderer)?;
/// widget.run().await;
/// # Ok(())
/// # }
/// ```
pub struct WeatherChartWidget<R: ChartRenderer> {
    config: WidgetConfig,
    policy: RefreshPolicy,
    fetcher: ForecastFetcher,
    renderer: R,
    chart: Option<R::Chart>,
    snapshot: Option<ForecastPayload>,
    loaded: bool,
    state: SchedulerState,
}

impl<R: ChartRenderer> WeatherChartWidget<R> {
    /// Validates the configuration and builds the widget.
    ///
    /// # Errors
    ///
    /// [`WeatherChartError::MissingApiKey`] or
    /// [`WeatherChartError::MissingLocation`] when the mandatory options are
    /// absent. These are fatal: the condition is logged and the refresh loop
    /// is never started.
    pub fn new(config: WidgetConfig, renderer: R) -> Result<Self, WeatherChartError> {
        if let Err(err) = config.validate() {
            error!("invalid widget configuration: {err}");
            return Err(err);
        }
        let policy = RefreshPolicy::from_config(&config);
        let fetcher = ForecastFetcher::new(&config);
        Ok(WeatherChartWidget {
            config,
            policy,
            fetcher,
            renderer,
            chart: None,
            snapshot: None,
            loaded: false,
            state: SchedulerState::Idle,
        })
    }

    /// Performs one fetch cycle: fetch, classify, and on success swap the
    /// snapshot and re-render. Failures are logged and reported as the
    /// outcome; nothing here crashes the loop.
    pub async fn refresh(&mut self) -> FetchOutcome {
        if self.state == SchedulerState::Halted {
            return FetchOutcome::AuthFailure;
        }
        self.state = SchedulerState::Fetching;
        let outcome = match self.fetcher.fetch().await {
            Ok(payload) => {
                self.snapshot = Some(payload);
                self.loaded = true;
                if let Err(err) = self.render() {
                    warn!("chart render failed: {err}");
                }
                FetchOutcome::Success
            }
            Err(err) => {
                let outcome = FetchOutcome::from(&err);
                if outcome == FetchOutcome::AuthFailure {
                    error!("authentication failed, scheduling halted: {err}");
                } else {
                    warn!("forecast fetch failed, will retry: {err}");
                }
                outcome
            }
        };
        self.state = self.policy.next_state(outcome);
        outcome
    }

    /// Drives the refresh loop: an immediate fetch, then the policy delay
    /// between cycles. Returns only when an authentication failure halts
    /// scheduling.
    pub async fn run(&mut self) {
        loop {
            let outcome = self.refresh().await;
            match self.policy.next_delay(outcome) {
                Some(delay) => sleep(delay).await,
                None => break,
            }
        }
    }

    /// Rebuilds the dataset from the current snapshot and re-mounts the
    /// chart, destroying the previous instance first. Without a snapshot
    /// this is a silent no-op, not an error.
    pub fn render(&mut self) -> Result<(), RenderError> {
        let Some(dataset) = self.dataset() else {
            return Ok(());
        };
        if let Some(previous) = self.chart.take() {
            self.renderer.unmount(previous);
        }
        self.chart = Some(self.renderer.mount(&dataset, &self.config.style)?);
        Ok(())
    }

    /// The dataset the current snapshot derives to, or `None` before the
    /// first successful fetch.
    pub fn dataset(&self) -> Option<ChartDataset> {
        let snapshot = self.snapshot.as_ref()?;
        Some(match self.config.data_type {
            ForecastKind::Hourly => build_hourly_dataset(&snapshot.hourly_points(), &self.config),
            ForecastKind::Daily => build_daily_dataset(&snapshot.daily_points(), &self.config),
        })
    }

    /// Whether a fetch has ever succeeded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LatLon, LocationSpec};
    use crate::dataset::builder::DAY_TEMPERATURE;
    use crate::render::options::ChartStyle;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Counts mounts and unmounts so re-render replacement is observable.
    #[derive(Debug, Default)]
    struct RecordingRenderer {
        mounts: usize,
        unmounts: usize,
    }

    impl ChartRenderer for RecordingRenderer {
        type Chart = u32;

        fn mount(&mut self, _: &ChartDataset, _: &ChartStyle) -> Result<u32, RenderError> {
            self.mounts += 1;
            Ok(self.mounts as u32)
        }

        fn unmount(&mut self, _: u32) {
            self.unmounts += 1;
        }
    }

    fn config_for(server: &MockServer) -> WidgetConfig {
        WidgetConfig::builder()
            .api_base(format!("{}/", server.uri()))
            .api_key("test-key")
            .location(LocationSpec::Coordinates(LatLon(52.52, 13.405)))
            .build()
    }

    const PAYLOAD: &str = r#"{
        "hourly": [
            {"dt": 0, "temp": 12.0, "weather": [{"icon": "01d"}]},
            {"dt": 3600, "temp": 9.5, "weather": [{"icon": "01n"}]}
        ]
    }"#;

    #[test]
    fn construction_requires_configuration() {
        let config = WidgetConfig::builder().build();
        assert!(matches!(
            WeatherChartWidget::new(config, RecordingRenderer::default()),
            Err(WeatherChartError::MissingApiKey)
        ));

        let config = WidgetConfig::builder().api_key("key").build();
        assert!(matches!(
            WeatherChartWidget::new(config, RecordingRenderer::default()),
            Err(WeatherChartError::MissingLocation)
        ));
    }

    #[tokio::test]
    async fn successful_refresh_loads_and_mounts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(PAYLOAD, "application/json"))
            .mount(&server)
            .await;

        let mut widget =
            WeatherChartWidget::new(config_for(&server), RecordingRenderer::default()).unwrap();
        assert!(!widget.is_loaded());

        let outcome = widget.refresh().await;
        assert_eq!(outcome, FetchOutcome::Success);
        assert!(widget.is_loaded());
        assert_eq!(widget.state(), SchedulerState::Idle);
        assert_eq!(widget.renderer().mounts, 1);
        assert_eq!(widget.renderer().unmounts, 0);

        let dataset = widget.dataset().unwrap();
        assert_eq!(dataset.series_named(DAY_TEMPERATURE).unwrap().values[1], Some(12.0));

        // A second refresh replaces the mounted chart.
        widget.refresh().await;
        assert_eq!(widget.renderer().mounts, 2);
        assert_eq!(widget.renderer().unmounts, 1);
    }

    #[tokio::test]
    async fn recoverable_failure_leaves_the_widget_unloaded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let mut widget =
            WeatherChartWidget::new(config_for(&server), RecordingRenderer::default()).unwrap();
        let outcome = widget.refresh().await;
        assert_eq!(outcome, FetchOutcome::RecoverableFailure);
        assert!(!widget.is_loaded());
        assert_eq!(widget.state(), SchedulerState::Idle);
        assert_eq!(widget.renderer().mounts, 0);
    }

    #[tokio::test]
    async fn auth_failure_halts_the_run_loop() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let mut widget =
            WeatherChartWidget::new(config_for(&server), RecordingRenderer::default()).unwrap();
        // Terminates instead of scheduling another fetch.
        widget.run().await;
        assert_eq!(widget.state(), SchedulerState::Halted);
        assert!(!widget.is_loaded());

        // Halted is terminal: further refreshes do not fetch again.
        let outcome = widget.refresh().await;
        assert_eq!(outcome, FetchOutcome::AuthFailure);
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn render_without_data_is_a_silent_skip() {
        let server = MockServer::start().await;
        let mut widget =
            WeatherChartWidget::new(config_for(&server), RecordingRenderer::default()).unwrap();
        widget.render().unwrap();
        assert_eq!(widget.renderer().mounts, 0);
    }
}
