//! Pollutants surface: granularity charts, the monthly calendar, and the
//! highest-concentration table.

use std::str::FromStr;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::info;

use crate::aqi::category_for_index;
use crate::dates::days_in_month;
use crate::error::InputError;
use crate::predictor::AqiPredictor;
use crate::predictor::pollutants::{main_pollutant, monthly_peaks};
use crate::seed::DateRng;
use crate::service::ChartSeries;

/// Chart granularity selector for the pollutants page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFilter {
    Hourly,
    Weekly,
    Daily,
}

impl ChartFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Weekly => "weekly",
            Self::Daily => "daily",
        }
    }
}

impl FromStr for ChartFilter {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hourly" => Ok(Self::Hourly),
            "weekly" => Ok(Self::Weekly),
            "daily" => Ok(Self::Daily),
            other => Err(InputError::InvalidFilter(other.to_string())),
        }
    }
}

/// Sampled hours for the hourly view.
const CHART_HOURS: [u32; 8] = [0, 3, 6, 9, 12, 15, 18, 21];

/// One cell of the monthly AQI calendar.
#[derive(Debug, Serialize)]
pub struct CalendarDay {
    pub day: u32,
    pub aqi: i64,
    pub category: String,
    pub main_pollutant: String,
}

/// One row of the highest-concentration table.
#[derive(Debug, Serialize)]
pub struct PeakEntry {
    pub day: u32,
    pub month_name: String,
    pub pollutant: String,
    pub concentration: f64,
    pub unit: String,
}

#[derive(Debug, Serialize)]
pub struct PollutantsData {
    pub highest_concentration: Vec<PeakEntry>,
    pub chart_data: ChartSeries,
    pub calendar_data: Vec<CalendarDay>,
    pub month_year: String,
    pub filter_type: String,
    pub selected_pollutant: String,
}

/// Assembles the pollutants payload for a month.
///
/// `today` anchors the hourly and daily views when the requested month
/// is the current one; it is an explicit parameter so the payload stays
/// a pure function of its inputs. `pollutant` is echoed back for the
/// client's filter state.
pub fn pollutants_data(
    predictor: &AqiPredictor,
    year: i32,
    month: u32,
    filter: ChartFilter,
    pollutant: &str,
    today: NaiveDate,
) -> Result<PollutantsData> {
    let num_days = days_in_month(year, month)?;
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("validated year and month");

    let chart_data = match filter {
        ChartFilter::Hourly => hourly_chart(predictor, year, month, today),
        ChartFilter::Weekly => weekly_chart(predictor, year, month),
        ChartFilter::Daily => daily_chart(predictor, year, month, num_days, today),
    };

    let month_name = first.format("%B").to_string();
    let highest_concentration = monthly_peaks(year, month)?
        .into_iter()
        .map(|peak| PeakEntry {
            day: peak.day,
            month_name: month_name.clone(),
            pollutant: peak.pollutant.code().to_string(),
            concentration: peak.concentration,
            unit: peak.unit.to_string(),
        })
        .collect();

    let payload = PollutantsData {
        highest_concentration,
        chart_data,
        calendar_data: calendar_days(predictor, year, month)?,
        month_year: first.format("%B %Y").to_string(),
        filter_type: filter.as_str().to_string(),
        selected_pollutant: pollutant.to_string(),
    };

    info!(
        year,
        month,
        filter = filter.as_str(),
        chart_points = payload.chart_data.labels.len(),
        "Pollutants payload assembled"
    );

    Ok(payload)
}

/// One calendar cell per day of the month.
pub fn calendar_days(predictor: &AqiPredictor, year: i32, month: u32) -> Result<Vec<CalendarDay>> {
    let num_days = days_in_month(year, month)?;
    Ok((1..=num_days)
        .map(|day| {
            let date = NaiveDate::from_ymd_opt(year, month, day).expect("day within month");
            let aqi = predictor.predict_for_date(date);
            CalendarDay {
                day,
                aqi,
                category: category_for_index(aqi).label().to_string(),
                main_pollutant: main_pollutant(date).code().to_string(),
            }
        })
        .collect())
}

/// Hour-of-day shape applied to the base daily figure.
fn hour_multiplier(hour: u32) -> f64 {
    match hour {
        0 | 3 | 21 => 0.85, // overnight lull
        6 | 9 => 1.15,      // morning rush
        12 | 15 => 1.25,    // afternoon peak
        18 => 1.10,         // evening rush
        _ => 1.0,
    }
}

/// Eight samples across the anchor day: mid-month, or `today` when the
/// requested month is the current one.
fn hourly_chart(predictor: &AqiPredictor, year: i32, month: u32, today: NaiveDate) -> ChartSeries {
    let day = if year == today.year() && month == today.month() {
        today.day()
    } else {
        15
    };
    let base_date = NaiveDate::from_ymd_opt(year, month, day).expect("day within month");
    let base_key = base_date.format("%Y-%m-%d").to_string();
    let base_aqi = predictor.predict_for_date(base_date) as f64;

    let mut labels = Vec::with_capacity(CHART_HOURS.len());
    let mut data = Vec::with_capacity(CHART_HOURS.len());
    for hour in CHART_HOURS {
        // Jitter is seeded per (date, hour) so repeated requests agree.
        let mut rng = DateRng::for_key(&format!("{base_key}-{hour}"));
        let value = (base_aqi * hour_multiplier(hour) * rng.jitter(0.9, 1.1)).clamp(20.0, 110.0);
        labels.push(format!("{hour:02}:00"));
        data.push(value.round());
    }

    ChartSeries { labels, data }
}

/// Four weekly samples, anchored to days 7, 14, 21, and 28.
fn weekly_chart(predictor: &AqiPredictor, year: i32, month: u32) -> ChartSeries {
    let mut labels = Vec::with_capacity(4);
    let mut data = Vec::with_capacity(4);
    for week in 1..=4u32 {
        let day = (week * 7).min(28);
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("day within month");
        labels.push(format!("Week {week}"));
        data.push(predictor.predict_for_date(date) as f64);
    }

    ChartSeries { labels, data }
}

/// Up to 14 daily samples: the month's first days, or a window around
/// `today` when the requested month is the current one.
fn daily_chart(
    predictor: &AqiPredictor,
    year: i32,
    month: u32,
    num_days: u32,
    today: NaiveDate,
) -> ChartSeries {
    let (start, end) = if year == today.year() && month == today.month() {
        let start = today.day().saturating_sub(6).max(1);
        let end = (today.day() + 7).min(num_days);
        if end - start + 1 < 14 {
            // Widen back toward the month start when clipped at an edge.
            (end.saturating_sub(13).max(1), end)
        } else {
            (start, end)
        }
    } else {
        (1, num_days.min(14))
    };

    let mut labels = Vec::new();
    let mut data = Vec::new();
    for day in start..=end {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("day within month");
        labels.push(date.format("%b %d").to_string());
        data.push(predictor.predict_for_date(date) as f64);
    }

    ChartSeries { labels, data }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("hourly".parse::<ChartFilter>().unwrap(), ChartFilter::Hourly);
        assert_eq!("Weekly".parse::<ChartFilter>().unwrap(), ChartFilter::Weekly);
        assert_eq!("DAILY".parse::<ChartFilter>().unwrap(), ChartFilter::Daily);
        assert!("monthly".parse::<ChartFilter>().is_err());
    }

    #[test]
    fn test_hourly_chart_shape_and_determinism() {
        let predictor = AqiPredictor::new();
        let today = date("2025-07-01");
        let first = hourly_chart(&predictor, 2025, 8, today);
        let second = hourly_chart(&AqiPredictor::new(), 2025, 8, today);

        assert_eq!(first.labels.len(), 8);
        assert_eq!(first.labels[0], "00:00");
        assert_eq!(first.labels[7], "21:00");
        assert_eq!(first.data, second.data);
        for value in &first.data {
            assert!((20.0..=110.0).contains(value));
        }
    }

    #[test]
    fn test_hourly_chart_anchors_to_today_in_current_month() {
        let predictor = AqiPredictor::new();
        let today = date("2025-08-05");
        let anchored = hourly_chart(&predictor, 2025, 8, today);
        let mid_month = hourly_chart(&predictor, 2025, 8, date("2025-09-01"));
        // Different anchor days yield different base figures.
        assert_ne!(anchored.data, mid_month.data);
    }

    #[test]
    fn test_weekly_chart_labels() {
        let predictor = AqiPredictor::new();
        let chart = weekly_chart(&predictor, 2025, 8);
        assert_eq!(chart.labels, ["Week 1", "Week 2", "Week 3", "Week 4"]);
        assert_eq!(
            chart.data[3],
            predictor.predict_for_date(date("2025-08-28")) as f64
        );
    }

    #[test]
    fn test_daily_chart_other_month_starts_at_first() {
        let predictor = AqiPredictor::new();
        let chart = daily_chart(&predictor, 2025, 8, 31, date("2025-09-10"));
        assert_eq!(chart.labels.len(), 14);
        assert_eq!(chart.labels[0], "Aug 01");
    }

    #[test]
    fn test_daily_chart_window_clips_at_month_edges() {
        let predictor = AqiPredictor::new();
        // Early in the month the window widens forward from day 1.
        let early = daily_chart(&predictor, 2025, 8, 31, date("2025-08-02"));
        assert_eq!(early.labels[0], "Aug 01");
        assert_eq!(early.labels.len(), 9); // days 1..=9

        // Late in the month it widens backward from the last day.
        let late = daily_chart(&predictor, 2025, 8, 31, date("2025-08-30"));
        assert_eq!(late.labels.len(), 14);
        assert_eq!(late.labels[13], "Aug 31"); // days 18..=31
    }

    #[test]
    fn test_calendar_covers_month() {
        let predictor = AqiPredictor::new();
        let days = calendar_days(&predictor, 2024, 2).unwrap();
        assert_eq!(days.len(), 29);
        assert_eq!(days[0].day, 1);
        assert_eq!(days[28].day, 29);
        for cell in &days {
            assert!((15..=150).contains(&cell.aqi));
            assert_eq!(cell.category, category_for_index(cell.aqi).label());
        }
    }

    #[test]
    fn test_pollutants_payload_shape() {
        let predictor = AqiPredictor::new();
        let payload = pollutants_data(
            &predictor,
            2025,
            8,
            ChartFilter::Daily,
            "PM2.5",
            date("2025-09-10"),
        )
        .unwrap();

        assert_eq!(payload.highest_concentration.len(), 5);
        assert_eq!(payload.calendar_data.len(), 31);
        assert_eq!(payload.month_year, "August 2025");
        assert_eq!(payload.filter_type, "daily");
        assert_eq!(payload.selected_pollutant, "PM2.5");
        for peak in &payload.highest_concentration {
            assert_eq!(peak.month_name, "August");
            assert!((1..=31).contains(&peak.day));
        }
    }

    #[test]
    fn test_pollutants_rejects_bad_month() {
        let predictor = AqiPredictor::new();
        let err = pollutants_data(
            &predictor,
            2025,
            13,
            ChartFilter::Daily,
            "PM2.5",
            date("2025-09-10"),
        )
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::InvalidMonth(13))
        );
    }
}
