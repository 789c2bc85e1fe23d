//! Issues one HTTP GET per refresh cycle and classifies the outcome.
//!
//! The fetcher is deliberately retry-free: it reports exactly one of
//! success, authentication failure, or recoverable failure per call, and the
//! scheduler owns what happens next.

use crate::config::WidgetConfig;
use crate::fetch::error::FetchError;
use crate::fetch::response::ForecastPayload;
use log::{info, warn};
use reqwest::{Client, StatusCode};

pub struct ForecastFetcher {
    client: Client,
    /// `{apiBase}{apiVersion}/{endpoint}`; query parameters are attached per
    /// request so the key never appears in logs.
    endpoint_url: String,
    params: Vec<(&'static str, String)>,
}

impl ForecastFetcher {
    pub fn new(config: &WidgetConfig) -> Self {
        let endpoint_url = format!(
            "{}{}/{}",
            config.api_base, config.api_version, config.api_endpoint
        );
        let mut params = config
            .location
            .as_ref()
            .map(|l| l.query_pairs())
            .unwrap_or_default();
        params.push(("units", config.units.query_param().to_string()));
        params.push(("lang", config.lang.clone()));
        params.push(("appid", config.api_key.clone()));
        ForecastFetcher {
            client: Client::new(),
            endpoint_url,
            params,
        }
    }

    /// Performs a single fetch and parse.
    ///
    /// # Errors
    ///
    /// * [`FetchError::Unauthorized`] on HTTP 401.
    /// * [`FetchError::HttpStatus`] on any other non-2xx status.
    /// * [`FetchError::Network`] / [`FetchError::Body`] on transport errors.
    /// * [`FetchError::Parse`] when the body is not a forecast payload.
    pub async fn fetch(&self) -> Result<ForecastPayload, FetchError> {
        info!("requesting forecast from {}", self.endpoint_url);

        let response = self
            .client
            .get(&self.endpoint_url)
            .query(&self.params)
            .send()
            .await
            .map_err(|e| FetchError::Network(self.endpoint_url.clone(), e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!("provider rejected the API key for {}", self.endpoint_url);
            return Err(FetchError::Unauthorized);
        }
        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {}", self.endpoint_url, status);
                return Err(FetchError::HttpStatus {
                    url: self.endpoint_url.clone(),
                    status,
                    source: e,
                });
            }
        };

        let body = response.bytes().await.map_err(FetchError::Body)?;
        let payload: ForecastPayload = serde_json::from_slice(&body)?;
        info!(
            "received forecast payload with {} hourly and {} daily records",
            payload.hourly.len(),
            payload.daily.len()
        );
        Ok(payload)
    }
}
