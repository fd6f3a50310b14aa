//! AQI breakpoint conversion and category banding.
//!
//! Concentrations map to index values through the EPA piecewise-linear
//! breakpoint tables, capped to the dashboard's 0–200 display range.
//! The conversion is total: unknown pollutant names and values outside
//! every band resolve to fixed fallbacks instead of errors.

/// Index returned for unknown pollutants or non-finite arithmetic.
const DEFAULT_INDEX: i64 = 50;
/// Index returned for concentrations outside every breakpoint band.
const ABOVE_RANGE_INDEX: i64 = 180;

/// The six pollutant kinds tracked by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    Pm25,
    Pm10,
    Co,
    No2,
    So2,
    O3,
}

impl Pollutant {
    /// All kinds, in the order concentrations are generated.
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::Co,
        Pollutant::No2,
        Pollutant::So2,
        Pollutant::O3,
    ];

    /// Short display code used in charts and calendars.
    pub fn code(self) -> &'static str {
        match self {
            Self::Pm25 => "PM2.5",
            Self::Pm10 => "PM10",
            Self::Co => "CO",
            Self::No2 => "NO2",
            Self::So2 => "SO2",
            Self::O3 => "O3",
        }
    }

    /// Full AQS parameter label, as shown on the dashboard.
    pub fn aqs_label(self) -> &'static str {
        match self {
            Self::Pm25 => "PM2.5 - Local Conditions",
            Self::Pm10 => "PM10 Total 0-10um STP",
            Self::Co => "Carbon monoxide",
            Self::No2 => "Nitrogen dioxide (NO2)",
            Self::So2 => "Sulfur dioxide",
            Self::O3 => "Ozone",
        }
    }

    /// Resolves a short code or full AQS label. Unknown names are `None`;
    /// the conversion path turns that into [`DEFAULT_INDEX`].
    pub fn from_name(name: &str) -> Option<Pollutant> {
        Self::ALL
            .into_iter()
            .find(|p| p.code() == name || p.aqs_label() == name)
    }
}

/// One breakpoint band: `(conc_low, conc_high, index_low, index_high)`.
type Band = (f64, f64, i64, i64);

static PM25_BANDS: &[Band] = &[
    (0.0, 12.0, 0, 50),
    (12.1, 35.4, 51, 100),
    (35.5, 55.4, 101, 150),
    (55.5, 150.4, 151, 200),
    (150.5, 250.4, 201, 300),
    (250.5, 350.4, 301, 400),
    (350.5, 500.4, 401, 500),
];

static PM10_BANDS: &[Band] = &[
    (0.0, 54.0, 0, 50),
    (55.0, 154.0, 51, 100),
    (155.0, 254.0, 101, 150),
    (255.0, 354.0, 151, 200),
    (355.0, 424.0, 201, 300),
    (425.0, 504.0, 301, 400),
    (505.0, 604.0, 401, 500),
];

static CO_BANDS: &[Band] = &[
    (0.0, 4.4, 0, 50),
    (4.5, 9.4, 51, 100),
    (9.5, 12.4, 101, 150),
    (12.5, 15.4, 151, 200),
    (15.5, 30.4, 201, 300),
    (30.5, 40.4, 301, 400),
    (40.5, 50.4, 401, 500),
];

static NO2_BANDS: &[Band] = &[
    (0.0, 53.0, 0, 50),
    (54.0, 100.0, 51, 100),
    (101.0, 360.0, 101, 150),
    (361.0, 649.0, 151, 200),
    (650.0, 1249.0, 201, 300),
    (1250.0, 1649.0, 301, 400),
    (1650.0, 2049.0, 401, 500),
];

static SO2_BANDS: &[Band] = &[
    (0.0, 35.0, 0, 50),
    (36.0, 75.0, 51, 100),
    (76.0, 185.0, 101, 150),
    (186.0, 304.0, 151, 200),
    (305.0, 604.0, 201, 300),
    (605.0, 804.0, 301, 400),
    (805.0, 1004.0, 401, 500),
];

// O3 stops at index 300; higher concentrations take the capped sentinel.
static O3_BANDS: &[Band] = &[
    (0.000, 0.054, 0, 50),
    (0.055, 0.070, 51, 100),
    (0.071, 0.085, 101, 150),
    (0.086, 0.105, 151, 200),
    (0.106, 0.200, 201, 300),
];

fn bands(pollutant: Pollutant) -> &'static [Band] {
    match pollutant {
        Pollutant::Pm25 => PM25_BANDS,
        Pollutant::Pm10 => PM10_BANDS,
        Pollutant::Co => CO_BANDS,
        Pollutant::No2 => NO2_BANDS,
        Pollutant::So2 => SO2_BANDS,
        Pollutant::O3 => O3_BANDS,
    }
}

/// Converts a raw concentration to a 0–200 index value.
///
/// Linear interpolation within the band containing `concentration`.
/// Unknown pollutant names and non-finite inputs resolve to 50;
/// concentrations outside every band (above the table, or below zero in
/// the integer-gapped tables) resolve to 180. Never panics.
pub fn concentration_to_index(concentration: f64, pollutant: &str) -> i64 {
    let Some(kind) = Pollutant::from_name(pollutant) else {
        return DEFAULT_INDEX;
    };
    if !concentration.is_finite() {
        return DEFAULT_INDEX;
    }

    for &(c_lo, c_hi, i_lo, i_hi) in bands(kind) {
        if concentration >= c_lo && concentration <= c_hi {
            let slope = (i_hi - i_lo) as f64 / (c_hi - c_lo);
            let index = slope * (concentration - c_lo) + i_lo as f64;
            if !index.is_finite() {
                return DEFAULT_INDEX;
            }
            return (index.round() as i64).clamp(0, 200);
        }
    }

    ABOVE_RANGE_INDEX
}

/// Severity categories in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl Category {
    /// Display name shown to the dashboard client.
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitive => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }
}

/// Maps an index value to its severity category.
///
/// Band boundaries are inclusive on the upper edge; the function is
/// total over all integers, with negatives landing in `Good`.
pub fn category_for_index(index: i64) -> Category {
    match index {
        i if i <= 50 => Category::Good,
        i if i <= 100 => Category::Moderate,
        i if i <= 150 => Category::UnhealthyForSensitive,
        i if i <= 200 => Category::Unhealthy,
        i if i <= 300 => Category::VeryUnhealthy,
        _ => Category::Hazardous,
    }
}
