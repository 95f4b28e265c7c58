//! Month scoring
//!
//! Picks the best month to travel to a latitude with a deliberately simple
//! climate model: a triangular weather curve per climate band, a fixed
//! school-holiday crowd calendar, and a cost level that follows the crowds.

use chrono::Month;
use tracing::{debug, instrument};

use crate::models::{AnalysisResult, Coordinate, DisplayScores, MONTHS};

const WEIGHT_WEATHER: f64 = 0.4;
const WEIGHT_CROWD: f64 = 0.3;
const WEIGHT_COST: f64 = 0.3;

/// Latitude beyond which the tropics end
pub const TROPIC_LATITUDE: f64 = 23.5;

const SUMMER_CROWD_LEVEL: u8 = 9;
const HOLIDAY_CROWD_LEVEL: u8 = 7;
const QUIET_CROWD_LEVEL: u8 = 4;

/// Climate band used for the weather curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimateBand {
    /// Tropics north of the equator, dry season around January
    NorthernTropics,
    /// Tropics on or south of the equator, dry season around July
    SouthernTropics,
    /// Northern temperate latitudes, best around July
    NorthernTemperate,
    /// Southern temperate latitudes, best around January
    SouthernTemperate,
}

impl ClimateBand {
    #[must_use]
    pub fn from_latitude(latitude: f64) -> Self {
        let northern = latitude > 0.0;
        match (latitude.abs() < TROPIC_LATITUDE, northern) {
            (true, true) => Self::NorthernTropics,
            (true, false) => Self::SouthernTropics,
            (false, true) => Self::NorthernTemperate,
            (false, false) => Self::SouthernTemperate,
        }
    }

    /// Month at which the weather curve peaks
    #[must_use]
    pub fn peak_month(self) -> Month {
        match self {
            Self::NorthernTropics | Self::SouthernTemperate => Month::January,
            Self::SouthernTropics | Self::NorthernTemperate => Month::July,
        }
    }

    /// Weather sub-score in [1, 10] for a zero-based month index
    #[must_use]
    pub fn weather_score(self, month: usize) -> f64 {
        let raw = match self {
            Self::NorthernTropics => 9.0 - 0.5 * distance_from_january(month),
            Self::SouthernTropics => 9.0 - 0.5 * distance_from_july(month),
            Self::NorthernTemperate => 10.0 - distance_from_july(month),
            Self::SouthernTemperate => 10.0 - distance_from_january(month),
        };
        raw.clamp(1.0, 10.0)
    }
}

// Wraps around the year end: December is one month from January.
fn distance_from_january(month: usize) -> f64 {
    month.min(12 - month) as f64
}

fn distance_from_july(month: usize) -> f64 {
    month.abs_diff(6) as f64
}

/// Crowd level in [4, 9] from the school-holiday calendar, 9 = packed
#[must_use]
pub fn crowd_level(northern: bool, month: usize) -> u8 {
    if northern {
        match month {
            5..=7 => SUMMER_CROWD_LEVEL,
            0 | 11 => HOLIDAY_CROWD_LEVEL,
            _ => QUIET_CROWD_LEVEL,
        }
    } else {
        match month {
            0 | 1 | 11 => SUMMER_CROWD_LEVEL,
            _ => QUIET_CROWD_LEVEL,
        }
    }
}

/// Per-month breakdown of the weighted score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthScore {
    pub month: Month,
    pub weather: f64,
    pub crowd_score: f64,
    pub cost_score: f64,
    pub total: f64,
}

/// Score all twelve months for a latitude
#[must_use]
pub fn score_months(latitude: f64) -> [MonthScore; 12] {
    let band = ClimateBand::from_latitude(latitude);
    let northern = latitude > 0.0;

    MONTHS.map(|month| {
        let index = crate::models::month_index(month);
        let weather = band.weather_score(index);
        let crowd = crowd_level(northern, index);
        // Cost tracks crowd level.
        let cost = crowd;
        let crowd_score = f64::from(11 - crowd);
        let cost_score = f64::from(11 - cost);
        MonthScore {
            month,
            weather,
            crowd_score,
            cost_score,
            total: weather * WEIGHT_WEATHER + crowd_score * WEIGHT_CROWD + cost_score * WEIGHT_COST,
        }
    })
}

/// Highest-scoring month; the earliest month wins ties
#[must_use]
pub fn best_month(scores: &[MonthScore; 12]) -> MonthScore {
    scores
        .iter()
        .skip(1)
        .fold(scores[0], |best, candidate| {
            if candidate.total > best.total {
                *candidate
            } else {
                best
            }
        })
}

fn display_scores(northern: bool, best: &MonthScore) -> DisplayScores {
    if northern {
        if matches!(best.month, Month::June | Month::July | Month::August) {
            DisplayScores::new(90, 30, 40)
        } else {
            DisplayScores::new(70, 80, 80)
        }
    } else {
        let weather = (best.total * 10.0).round().clamp(1.0, 100.0) as u8;
        DisplayScores::new(weather, 70, 70)
    }
}

/// Best month and display scores for a coordinate
#[instrument(level = "debug")]
#[must_use]
pub fn analyze(coordinate: Coordinate) -> AnalysisResult {
    let scores = score_months(coordinate.latitude);
    let best = best_month(&scores);
    let display = display_scores(coordinate.is_northern(), &best);
    let rounded = coordinate.rounded();

    debug!(
        best_month = best.month.name(),
        total = best.total,
        "Scored months"
    );

    AnalysisResult {
        best_month: best.month,
        scores: display,
        lat: rounded.latitude,
        lon: rounded.longitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10.0, ClimateBand::NorthernTropics)]
    #[case(0.0, ClimateBand::SouthernTropics)]
    #[case(-23.4, ClimateBand::SouthernTropics)]
    #[case(23.5, ClimateBand::NorthernTemperate)]
    #[case(-23.5, ClimateBand::SouthernTemperate)]
    #[case(70.0, ClimateBand::NorthernTemperate)]
    fn test_climate_band(#[case] latitude: f64, #[case] expected: ClimateBand) {
        assert_eq!(ClimateBand::from_latitude(latitude), expected);
    }

    #[rstest]
    #[case(35.0)]
    #[case(48.85)]
    #[case(60.0)]
    #[case(-35.0)]
    #[case(-48.0)]
    #[case(-60.0)]
    fn test_temperate_weather_peaks_at_band_peak(#[case] latitude: f64) {
        let band = ClimateBand::from_latitude(latitude);
        let expected = if latitude > 0.0 {
            Month::July
        } else {
            Month::January
        };
        assert_eq!(band.peak_month(), expected);

        let scores = score_months(latitude);
        let peak = scores
            .iter()
            .fold(scores[0], |best, s| if s.weather > best.weather { *s } else { best });
        assert_eq!(peak.month, expected);
        assert_eq!(peak.weather, 10.0);
    }

    #[rstest]
    #[case(35.0, Month::May)]
    #[case(48.85, Month::May)]
    #[case(60.0, Month::May)]
    #[case(-35.0, Month::March)]
    #[case(-60.0, Month::March)]
    fn test_temperate_best_month(#[case] latitude: f64, #[case] expected: Month) {
        let result = analyze(Coordinate::new(latitude, 0.0));
        assert_eq!(result.best_month, expected);
    }

    #[test]
    fn test_weather_score_is_clamped() {
        for month in 0..12 {
            for band in [
                ClimateBand::NorthernTropics,
                ClimateBand::SouthernTropics,
                ClimateBand::NorthernTemperate,
                ClimateBand::SouthernTemperate,
            ] {
                let score = band.weather_score(month);
                assert!((1.0..=10.0).contains(&score));
            }
        }
    }

    #[test]
    fn test_january_distance_wraps() {
        let band = ClimateBand::SouthernTemperate;
        assert_eq!(band.weather_score(11), 9.0);
        assert_eq!(band.weather_score(6), 4.0);
    }

    #[rstest]
    #[case(true, 6, 9)]
    #[case(true, 11, 7)]
    #[case(true, 0, 7)]
    #[case(true, 3, 4)]
    #[case(false, 1, 9)]
    #[case(false, 11, 9)]
    #[case(false, 6, 4)]
    fn test_crowd_level(#[case] northern: bool, #[case] month: usize, #[case] expected: u8) {
        assert_eq!(crowd_level(northern, month), expected);
    }

    #[test]
    fn test_northern_off_season_display_scores() {
        let result = analyze(Coordinate::new(48.8566, 2.3522));
        assert_eq!(result.best_month, Month::May);
        assert_eq!(result.scores, DisplayScores::new(70, 80, 80));
        assert_eq!(result.lat, 48.86);
        assert_eq!(result.lon, 2.35);
    }

    #[test]
    fn test_southern_display_weather_from_total() {
        // March: weather 8, crowd 4 -> 0.4*8 + 0.3*7 + 0.3*7 = 7.4
        let result = analyze(Coordinate::new(-40.0, 174.0));
        assert_eq!(result.best_month, Month::March);
        assert_eq!(result.scores, DisplayScores::new(74, 70, 70));
    }

    #[test]
    fn test_northern_tropics_prefer_quiet_early_year() {
        // February: weather 8.5, crowd 4 -> 7.6, beats January (9, crowd 7 -> 6.0)
        let result = analyze(Coordinate::new(13.75, 100.5));
        assert_eq!(result.best_month, Month::February);
        assert_eq!(result.scores, DisplayScores::new(70, 80, 80));
    }

    #[test]
    fn test_equator_uses_southern_calendar() {
        // July: weather 9, crowd 4 -> 3.6 + 4.2 = 7.8
        let result = analyze(Coordinate::new(0.0, 0.0));
        assert_eq!(result.best_month, Month::July);
        assert_eq!(result.scores, DisplayScores::new(78, 70, 70));
    }

    #[test]
    fn test_tie_goes_to_earliest_month() {
        let scores = score_months(48.0);
        // May and September both total 7.4
        assert_eq!(scores[4].total, scores[8].total);
        assert_eq!(best_month(&scores).month, Month::May);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let coordinate = Coordinate::new(-12.05, -77.04);
        let first = serde_json::to_string(&analyze(coordinate)).unwrap();
        let second = serde_json::to_string(&analyze(coordinate)).unwrap();
        assert_eq!(first, second);
    }
}
