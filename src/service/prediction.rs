//! Prediction surface: overall AQI, pollutant forecast, 7-day trend, and
//! the model-performance comparison.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::aqi::category_for_index;
use crate::predictor::AqiPredictor;
use crate::predictor::models::{MODEL_PERFORMANCES, Metrics};
use crate::predictor::pollutants::concentrations;
use crate::service::ChartSeries;
use crate::util::round1;

#[derive(Debug, Serialize)]
pub struct PredictionData {
    pub overall_aqi: i64,
    pub aqi_category: String,
    pub pollutant_forecast: ChartSeries,
    pub trend_data: ChartSeries,
    pub accuracy_comparison: ChartSeries,
    pub model_performances: BTreeMap<&'static str, Metrics>,
    pub selected_model: String,
}

/// Assembles the prediction payload for `date` under `model`.
///
/// The model name is echoed and keys the memoization cache; it never
/// changes a figure. Gas concentrations are scaled from ppm to ppb for
/// the forecast chart, except CO which stays in ppm at one decimal.
pub fn prediction_data(predictor: &AqiPredictor, date: NaiveDate, model: &str) -> PredictionData {
    let overall_aqi = predictor.predict_with_model(date, Some(model));
    let levels = concentrations(date);

    let pollutant_forecast = ChartSeries {
        labels: ["PM2.5", "PM10", "NO2", "SO2", "CO", "O3"]
            .map(String::from)
            .to_vec(),
        data: vec![
            levels.pm25.round(),
            levels.pm10.round(),
            (levels.no2 * 1000.0).round(),
            (levels.so2 * 1000.0).round(),
            round1(levels.co),
            (levels.o3 * 1000.0).round(),
        ],
    };

    let trend = predictor.seven_day_trend(date);
    let trend_data = ChartSeries {
        labels: trend.iter().map(|p| p.date.clone()).collect(),
        data: trend.iter().map(|p| p.aqi as f64).collect(),
    };

    let accuracy_comparison = ChartSeries {
        labels: MODEL_PERFORMANCES
            .iter()
            .map(|m| m.chart_label.to_string())
            .collect(),
        data: MODEL_PERFORMANCES
            .iter()
            .map(|m| round1(m.metrics.r2_score * 100.0))
            .collect(),
    };

    info!(date = %date, model, aqi = overall_aqi, "Prediction payload assembled");

    PredictionData {
        overall_aqi,
        aqi_category: category_for_index(overall_aqi).label().to_string(),
        pollutant_forecast,
        trend_data,
        accuracy_comparison,
        model_performances: MODEL_PERFORMANCES.iter().map(|m| (m.name, m.metrics)).collect(),
        selected_model: model.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_prediction_payload_shape() {
        let predictor = AqiPredictor::new();
        let payload = prediction_data(&predictor, date("2025-08-01"), "gradient_boosting");

        assert_eq!(payload.pollutant_forecast.labels.len(), 6);
        assert_eq!(payload.pollutant_forecast.data.len(), 6);
        assert_eq!(payload.trend_data.labels.len(), 7);
        assert_eq!(payload.trend_data.labels[0], "08-01");
        assert_eq!(payload.accuracy_comparison.labels, ["GB", "XGB", "RF", "LSTM"]);
        assert_eq!(payload.accuracy_comparison.data[0], 84.9);
        assert_eq!(payload.model_performances.len(), 4);
        assert_eq!(payload.selected_model, "gradient_boosting");
    }

    #[test]
    fn test_overall_matches_category() {
        let predictor = AqiPredictor::new();
        let payload = prediction_data(&predictor, date("2025-08-01"), "xgboost");
        assert_eq!(
            payload.aqi_category,
            category_for_index(payload.overall_aqi).label()
        );
        assert!((15..=150).contains(&payload.overall_aqi));
    }

    #[test]
    fn test_forecast_values_positive() {
        let predictor = AqiPredictor::new();
        let payload = prediction_data(&predictor, date("2025-02-14"), "lstm");
        for value in &payload.pollutant_forecast.data {
            assert!(*value >= 0.0);
        }
    }
}
