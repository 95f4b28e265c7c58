//! Output of the month scorer

use chrono::Month;
use serde::{Serialize, Serializer};

/// Calendar months in January-first order
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Zero-based index of a month, January = 0
#[must_use]
pub fn month_index(month: Month) -> usize {
    // number_from_month is 1..=12
    month.number_from_month() as usize - 1
}

/// Display scores on a 0-100 scale, higher is better
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayScores {
    pub weather: u8,
    pub crowd: u8,
    pub cost: u8,
}

impl DisplayScores {
    #[must_use]
    pub const fn new(weather: u8, crowd: u8, cost: u8) -> Self {
        Self {
            weather,
            crowd,
            cost,
        }
    }
}

/// Best travel month for a location plus the scores shown next to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    #[serde(serialize_with = "serialize_month")]
    pub best_month: Month,
    pub scores: DisplayScores,
    /// Latitude rounded to two decimals
    pub lat: f64,
    /// Longitude rounded to two decimals
    pub lon: f64,
}

fn serialize_month<S: Serializer>(month: &Month, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(month.name())
}
