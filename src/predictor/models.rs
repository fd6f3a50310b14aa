//! Static model-performance registry.
//!
//! The original system's model artifacts never influenced any output, so
//! the registry is a fixed set of display metrics keyed by model name.
//! There is no loading code path.

use serde::Serialize;

/// Accuracy metrics reported for one model.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Metrics {
    pub r2_score: f64,
    pub mae: f64,
    pub rmse: f64,
    pub mape: f64,
}

/// A named model with its fixed reported performance.
#[derive(Debug, Clone, Copy)]
pub struct ModelPerformance {
    pub name: &'static str,
    /// Abbreviation used on the accuracy-comparison chart axis.
    pub chart_label: &'static str,
    pub metrics: Metrics,
}

/// Model used when the caller does not pick one.
pub const BEST_MODEL: &str = "gradient_boosting";

/// Reported performances, best first.
pub static MODEL_PERFORMANCES: &[ModelPerformance] = &[
    ModelPerformance {
        name: "gradient_boosting",
        chart_label: "GB",
        metrics: Metrics {
            r2_score: 0.849,
            mae: 8.2,
            rmse: 11.3,
            mape: 12.9,
        },
    },
    ModelPerformance {
        name: "xgboost",
        chart_label: "XGB",
        metrics: Metrics {
            r2_score: 0.830,
            mae: 9.1,
            rmse: 13.8,
            mape: 14.5,
        },
    },
    ModelPerformance {
        name: "random_forest",
        chart_label: "RF",
        metrics: Metrics {
            r2_score: 0.801,
            mae: 10.8,
            rmse: 15.2,
            mape: 16.2,
        },
    },
    ModelPerformance {
        name: "lstm",
        chart_label: "LSTM",
        metrics: Metrics {
            r2_score: 0.603,
            mae: 14.5,
            rmse: 18.2,
            mape: 22.8,
        },
    },
];

/// Looks up a model's reported performance by name.
pub fn performance_for(name: &str) -> Option<&'static ModelPerformance> {
    MODEL_PERFORMANCES.iter().find(|m| m.name == name)
}
