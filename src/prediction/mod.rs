//! # Crowd Prediction Gateway
//!
//! Hourly footfall forecasts come from an external ML service. [`CrowdForecaster`] is the
//! seam; [`HttpCrowdForecaster`] is the real implementation and [`CrowdService`] wraps any
//! forecaster so callers always get an answer: when the upstream fails, a fixed fallback
//! forecast carrying a `warning` is returned instead.

pub mod error;
pub mod http;

pub use error::*;
pub use http::*;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Warning attached to the fallback forecast.
pub const FALLBACK_WARNING: &str = "ML service offline (fallback data)";

/// Hourly crowd forecast, `hours[i]` paired with `counts[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrowdPrediction {
    pub hours: Vec<String>,
    pub counts: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl CrowdPrediction {
    /// The forecast served while the ML service is unreachable.
    pub fn fallback() -> Self {
        Self {
            hours: ["09:00", "10:00", "11:00", "12:00", "13:00"]
                .into_iter()
                .map(String::from)
                .collect(),
            counts: vec![20, 40, 70, 100, 60],
            warning: Some(FALLBACK_WARNING.to_string()),
        }
    }
}

/// Source of crowd forecasts.
#[async_trait]
pub trait CrowdForecaster: Send + Sync {
    async fn fetch(&self) -> Result<CrowdPrediction, PredictionError>;
}

/// Forecasts that never fail.
#[derive(Clone)]
pub struct CrowdService {
    forecaster: Arc<dyn CrowdForecaster>,
}

impl CrowdService {
    pub fn new(forecaster: Arc<dyn CrowdForecaster>) -> Self {
        Self { forecaster }
    }

    pub async fn predict(&self) -> CrowdPrediction {
        match self.forecaster.fetch().await {
            Ok(prediction) => {
                debug!(hours = prediction.hours.len(), "Crowd forecast fetched");
                prediction
            }
            Err(e) => {
                warn!(error = %e, "ML service error, returning fallback data");
                CrowdPrediction::fallback()
            }
        }
    }
}
