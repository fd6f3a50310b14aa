//! Payload assembly for the dashboard client.
//!
//! Each submodule builds the body of one API surface. HTTP routing,
//! status codes, and CORS live outside this crate; given a predictor
//! and validated inputs these builders are pure, so any transport can
//! serialize the results as-is.

pub mod dashboard;
pub mod health;
pub mod pollutants;
pub mod prediction;
pub mod recommendations;

use serde::Serialize;

/// Label/value series shaped for the dashboard's chart widgets.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}
