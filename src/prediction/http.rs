//! HTTP client for the ML crowd forecaster.

use super::{CrowdForecaster, CrowdPrediction, PredictionError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Upstream used when nothing is configured.
pub const DEFAULT_CROWD_SERVICE_URL: &str = "http://localhost:5001/predict/crowd";

/// Fetches forecasts with `GET <url>`.
#[derive(Debug, Clone)]
pub struct HttpCrowdForecaster {
    http: reqwest::Client,
    url: String,
}

impl HttpCrowdForecaster {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, PredictionError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, url: url.into() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CrowdForecaster for HttpCrowdForecaster {
    async fn fetch(&self) -> Result<CrowdPrediction, PredictionError> {
        debug!(url = %self.url, "Fetching crowd forecast");
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let mut prediction: CrowdPrediction =
            serde_json::from_slice(&body).map_err(|e| PredictionError::Decode(e.to_string()))?;
        if prediction.hours.len() != prediction.counts.len() {
            return Err(PredictionError::Decode(format!(
                "{} hours but {} counts",
                prediction.hours.len(),
                prediction.counts.len()
            )));
        }
        prediction.warning = None;
        Ok(prediction)
    }
}
