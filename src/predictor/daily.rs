//! Daily AQI figures with memoization.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::predictor::{models, seasonal_factor};
use crate::seed::DateRng;

/// Display bounds for a daily AQI figure.
const AQI_FLOOR: f64 = 15.0;
const AQI_CEIL: f64 = 150.0;

/// One point of the 7-day forecast strip.
#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    /// `MM-DD` label for the chart axis.
    pub date: String,
    pub aqi: i64,
}

/// Produces deterministic daily AQI figures.
///
/// Each figure is a seasonal sine base plus one gaussian draw from a
/// stream seeded by the date key, clamped to the display range. Results
/// are memoized per `(date, model)`; a cache hit returns exactly what a
/// recompute would, so the cache is a pure speed-up.
pub struct AqiPredictor {
    model: String,
    cache: Mutex<HashMap<(NaiveDate, String), i64>>,
}

impl AqiPredictor {
    pub fn new() -> Self {
        Self {
            model: models::BEST_MODEL.to_string(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Daily AQI for `date` under the default model key.
    pub fn predict_for_date(&self, date: NaiveDate) -> i64 {
        self.predict_with_model(date, None)
    }

    /// Daily AQI for `date`, memoized under `(date, model)`.
    ///
    /// The model name only keys the cache; the figure itself depends on
    /// the date alone.
    pub fn predict_with_model(&self, date: NaiveDate, model: Option<&str>) -> i64 {
        let model = model.unwrap_or(&self.model);
        let key = (date, model.to_string());

        {
            let cache = self.lock_cache();
            if let Some(&aqi) = cache.get(&key) {
                debug!(date = %date, model, aqi, "Prediction cache hit");
                return aqi;
            }
        }

        let aqi = compute_daily_aqi(date);
        // Insert-if-absent: a racing computation produced the same value.
        *self.lock_cache().entry(key).or_insert(aqi)
    }

    /// AQI for `start` and the six days after it, with `MM-DD` labels.
    pub fn seven_day_trend(&self, start: NaiveDate) -> Vec<TrendPoint> {
        (0..7)
            .map(|offset| {
                let date = start + Days::new(offset);
                TrendPoint {
                    date: date.format("%m-%d").to_string(),
                    aqi: self.predict_for_date(date),
                }
            })
            .collect()
    }

    /// Drops every memoized figure. Recomputation yields identical values.
    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, HashMap<(NaiveDate, String), i64>> {
        // A poisoned lock only means another thread panicked mid-insert;
        // the map contents are still valid memoized values.
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for AqiPredictor {
    fn default() -> Self {
        Self::new()
    }
}

/// The memoization-free daily formula: seasonal base plus one gaussian
/// variation draw, clamped and rounded.
fn compute_daily_aqi(date: NaiveDate) -> i64 {
    let mut rng = DateRng::for_key(&date.format("%Y-%m-%d").to_string());
    let base = 45.0 + 25.0 * seasonal_factor(date);
    let variation = rng.normal(0.0, 15.0);
    (base + variation).clamp(AQI_FLOOR, AQI_CEIL).round() as i64
}
