use crate::fetch::error::FetchError;
use crate::render::error::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherChartError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("apiKey must be specified")]
    MissingApiKey,

    #[error("a location (place name, city id, or lat/lon pair) must be specified")]
    MissingLocation,
}
