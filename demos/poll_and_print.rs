use std::env;
use weather_chart::{
    ChartDataset, ChartRenderer, ChartStyle, LatLon, LocationSpec, RenderError, Units,
    WeatherChartError, WeatherChartWidget, WidgetConfig,
};

/// Prints each built dataset to stdout instead of drawing it.
struct TextRenderer;

impl ChartRenderer for TextRenderer {
    type Chart = ();

    fn mount(&mut self, dataset: &ChartDataset, _style: &ChartStyle) -> Result<(), RenderError> {
        println!("labels: {:?}", dataset.labels);
        for series in &dataset.series {
            println!("{:>18} [{:?}]: {:?}", series.name, series.axis, series.values);
        }
        println!("ranges: {:?}", dataset.ranges);
        Ok(())
    }

    fn unmount(&mut self, _chart: ()) {}
}

#[tokio::main]
async fn main() -> Result<(), WeatherChartError> {
    let api_key = env::var("OPENWEATHER_API_KEY").unwrap_or_default();

    let config = WidgetConfig::builder()
        .api_key(api_key)
        .location(LocationSpec::Coordinates(LatLon(52.52, 13.405)))
        .units(Units::Metric)
        .show_icon(true)
        .show_rain(true)
        .build();

    let mut widget = WeatherChartWidget::new(config, TextRenderer)?;
    println!("{}", widget.config().title);
    widget.run().await;
    Ok(())
}
