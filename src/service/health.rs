//! Service health summary.

use chrono::Utc;
use serde::Serialize;

use crate::predictor::models::{BEST_MODEL, MODEL_PERFORMANCES};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub available_models: Vec<&'static str>,
    pub best_model: &'static str,
    pub timestamp: String,
}

/// Reports the static model registry and the current time.
pub fn health_status() -> HealthStatus {
    HealthStatus {
        status: "healthy",
        available_models: MODEL_PERFORMANCES.iter().map(|m| m.name).collect(),
        best_model: BEST_MODEL,
        timestamp: Utc::now().to_rfc3339(),
    }
}
