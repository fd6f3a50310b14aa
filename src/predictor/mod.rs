//! Deterministic synthetic AQI prediction.
//!
//! Every figure is a pure function of its date key: the key seeds a
//! fresh ChaCha8 stream (see [`crate::seed`]) and a fixed sequence of
//! draws shapes the value, so repeated calls, restarts, and derived
//! views all agree. No model inference happens anywhere; [`models`]
//! carries the fixed metrics the dashboard reports.

pub mod daily;
pub mod models;
pub mod pollutants;

pub use daily::{AqiPredictor, TrendPoint};

use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate};

/// Seasonal sine factor over the 1-indexed ordinal day, period 365.
pub(crate) fn seasonal_factor(date: NaiveDate) -> f64 {
    (date.ordinal() as f64 * 2.0 * PI / 365.0).sin()
}
