//! Dashboard surface: current and next-day AQI, sensor readouts, and a
//! 12-month history chart.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::info;

use crate::aqi::category_for_index;
use crate::predictor::AqiPredictor;
use crate::predictor::pollutants::{concentrations, main_pollutant};
use crate::util::round1;

/// Live-sensor style readout: PM2.5 in µg/m³, O3 and NO2 in ppb.
#[derive(Debug, Serialize)]
pub struct SensorData {
    pub pm25: f64,
    pub o3: f64,
    pub no2: f64,
}

/// Pre-formatted concentration strings for the summary cards.
#[derive(Debug, Serialize)]
pub struct ConcentrationDisplay {
    pub pm25: String,
    pub co: String,
    pub o3: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub current_aqi: i64,
    pub current_category: String,
    pub main_pollutant: String,
    pub next_day_aqi: i64,
    pub next_day_category: String,
    pub sensor_data: SensorData,
    pub pollutant_concentrations: ConcentrationDisplay,
    pub chart_aqi: Vec<i64>,
    pub date: String,
}

/// Assembles the dashboard payload for `date`.
pub fn dashboard_data(predictor: &AqiPredictor, date: NaiveDate) -> DashboardData {
    let current_aqi = predictor.predict_for_date(date);
    let next_day_aqi = predictor.predict_for_date(date + Days::new(1));

    let levels = concentrations(date);
    let sensor_data = SensorData {
        pm25: round1(levels.pm25),
        o3: round1(levels.o3 * 1000.0),
        no2: round1(levels.no2 * 1000.0),
    };

    let payload = DashboardData {
        current_aqi,
        current_category: category_for_index(current_aqi).label().to_string(),
        main_pollutant: main_pollutant(date).aqs_label().to_string(),
        next_day_aqi,
        next_day_category: category_for_index(next_day_aqi).label().to_string(),
        pollutant_concentrations: ConcentrationDisplay {
            pm25: format!("{} µg/m³", sensor_data.pm25),
            co: format!("{} ppm", round1(levels.co)),
            o3: format!("{} ppb", sensor_data.o3),
        },
        sensor_data,
        chart_aqi: twelve_month_chart(predictor, date),
        date: date.format("%Y-%m-%d").to_string(),
    };

    info!(
        date = %payload.date,
        aqi = payload.current_aqi,
        category = %payload.current_category,
        "Dashboard payload assembled"
    );

    payload
}

/// Daily AQI of the 15th of each of the 12 months ending at `date`'s
/// month, oldest first.
fn twelve_month_chart(predictor: &AqiPredictor, date: NaiveDate) -> Vec<i64> {
    (0..12)
        .map(|i| {
            let mut month = date.month() as i32 - 11 + i;
            let mut year = date.year();
            while month <= 0 {
                month += 12;
                year -= 1;
            }
            // The 15th exists in every month.
            let mid = NaiveDate::from_ymd_opt(year, month as u32, 15).expect("mid-month date");
            predictor.predict_for_date(mid)
        })
        .collect()
}
