//! Per-pollutant synthetic concentrations and monthly peak days.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::aqi::Pollutant;
use crate::dates::days_in_month;
use crate::predictor::seasonal_factor;
use crate::seed::{DateRng, date_seed};
use crate::util::round1;

/// Synthetic concentration levels for one date, in native units
/// (µg/m³ for particulates, ppm for the gases).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PollutantLevels {
    pub pm25: f64,
    pub pm10: f64,
    pub co: f64,
    pub no2: f64,
    pub so2: f64,
    pub o3: f64,
}

/// Concentration levels for `date`.
///
/// One seeding, then six gaussian draws in field order; reordering the
/// draws would change every figure. Ozone rises in both season extremes,
/// hence the absolute seasonal term. Each level is floored at its
/// pollutant's background value.
pub fn concentrations(date: NaiveDate) -> PollutantLevels {
    let mut rng = DateRng::for_key(&date.format("%Y-%m-%d").to_string());
    let s = seasonal_factor(date);

    PollutantLevels {
        pm25: (20.0 + 10.0 * s + rng.normal(0.0, 8.0)).max(5.0),
        pm10: (35.0 + 15.0 * s + rng.normal(0.0, 12.0)).max(10.0),
        co: (1.2 + 0.5 * s + rng.normal(0.0, 0.4)).max(0.1),
        no2: (0.025 + 0.010 * s + rng.normal(0.0, 0.008)).max(0.005),
        so2: (0.012 + 0.005 * s + rng.normal(0.0, 0.004)).max(0.002),
        o3: (0.050 + 0.015 * s.abs() + rng.normal(0.0, 0.012)).max(0.020),
    }
}

/// Weights for the dominant-pollutant draw. PM2.5 dominates most days.
const MAIN_POLLUTANT_WEIGHTS: &[(Pollutant, f64)] = &[
    (Pollutant::Pm25, 0.45),
    (Pollutant::O3, 0.25),
    (Pollutant::No2, 0.20),
    (Pollutant::Pm10, 0.10),
];

/// The pollutant reported as dominant for `date`.
pub fn main_pollutant(date: NaiveDate) -> Pollutant {
    let mut rng = DateRng::for_key(&date.format("%Y-%m-%d").to_string());
    let weights: Vec<f64> = MAIN_POLLUTANT_WEIGHTS.iter().map(|&(_, w)| w).collect();
    MAIN_POLLUTANT_WEIGHTS[rng.pick_weighted(&weights)].0
}

/// Peak-day synthesis parameters: `(pollutant, unit, base, std dev)`.
const PEAK_PARAMS: &[(Pollutant, &str, f64, f64)] = &[
    (Pollutant::Pm25, "µg/m³", 35.0, 12.0),
    (Pollutant::O3, "ppb", 65.0, 15.0),
    (Pollutant::No2, "ppb", 28.0, 10.0),
    (Pollutant::So2, "ppb", 18.0, 6.0),
    (Pollutant::Co, "ppm", 1.2, 0.4),
];

/// The day a pollutant peaked in a month, with its peak concentration.
#[derive(Debug, Clone, Copy)]
pub struct PeakDay {
    pub pollutant: Pollutant,
    pub day: u32,
    pub concentration: f64,
    pub unit: &'static str,
}

/// Highest-concentration days for a month, one per tracked pollutant.
///
/// Seeded from `"YYYY-MM"`, offset per pollutant so each gets its own
/// stream: a uniform day draw, then a gaussian concentration floored at
/// 30% of the pollutant's base and clamped to its display window.
///
/// # Errors
///
/// Rejects months outside `1..=12` and unrepresentable years.
pub fn monthly_peaks(year: i32, month: u32) -> Result<Vec<PeakDay>> {
    let num_days = days_in_month(year, month)?;
    let month_seed = date_seed(&format!("{year:04}-{month:02}")) as u64;

    let peaks = PEAK_PARAMS
        .iter()
        .enumerate()
        .map(|(i, &(pollutant, unit, base, std_dev))| {
            let mut rng = DateRng::for_seed(month_seed + i as u64 * 1000);
            let day = rng.day_in(num_days);
            let raw = (base + rng.normal(0.0, std_dev)).max(base * 0.3);
            let concentration = if unit == "ppm" {
                raw.clamp(0.2, 3.0)
            } else {
                raw.clamp(5.0, 80.0)
            };
            PeakDay {
                pollutant,
                day,
                concentration: round1(concentration),
                unit,
            }
        })
        .collect();

    Ok(peaks)
}
