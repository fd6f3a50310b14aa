//! Health recommendations keyed on the day's AQI tier.

use chrono::NaiveDate;
use serde::Serialize;

use crate::aqi::category_for_index;
use crate::predictor::AqiPredictor;

/// One advice card shown on the dashboard.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Recommendation {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const GOOD_AIR: [Recommendation; 2] = [
    Recommendation {
        icon: "fa-person-hiking",
        title: "Outdoor Activities",
        description: "Great time for walks, sports, or picnics!",
    },
    Recommendation {
        icon: "fa-wind",
        title: "Ventilation",
        description: "Open your windows and enjoy the breeze.",
    },
];

const MODERATE_AIR: [Recommendation; 2] = [
    Recommendation {
        icon: "fa-person-walking",
        title: "Light Outdoor Activity",
        description: "Short walks are fine unless you're sensitive.",
    },
    Recommendation {
        icon: "fa-house",
        title: "Indoor Time",
        description: "Try to stay indoors during peak hours.",
    },
];

const POOR_AIR: [Recommendation; 2] = [
    Recommendation {
        icon: "fa-head-side-mask",
        title: "Wear a Mask",
        description: "Use a pollution mask outdoors.",
    },
    Recommendation {
        icon: "fa-fan",
        title: "Use Air Purifier",
        description: "Keep air clean inside your home or office.",
    },
];

#[derive(Debug, Serialize)]
pub struct RecommendationsData {
    pub aqi: i64,
    pub category: String,
    pub recommendations: Vec<Recommendation>,
}

/// Picks the advice tier for `date`'s AQI.
pub fn recommendations_data(predictor: &AqiPredictor, date: NaiveDate) -> RecommendationsData {
    let aqi = predictor.predict_for_date(date);
    let tier = if aqi <= 50 {
        GOOD_AIR
    } else if aqi <= 100 {
        MODERATE_AIR
    } else {
        POOR_AIR
    };

    RecommendationsData {
        aqi,
        category: category_for_index(aqi).label().to_string(),
        recommendations: tier.to_vec(),
    }
}
