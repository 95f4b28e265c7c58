//! Request orchestration: scorer, attractions, tips and hotel links

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::attractions::AttractionFetcher;
use crate::links::AccommodationLinks;
use crate::models::{AnalysisResult, Coordinate, PlaceRecord};
use crate::{scoring, tips};

/// City used when a form arrives without one
pub const UNKNOWN_CITY: &str = "Unknown Location";

/// Raw form or query fields as submitted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripRequest {
    pub city: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl TripRequest {
    /// Submitted city, or [`UNKNOWN_CITY`]
    #[must_use]
    pub fn city(&self) -> &str {
        self.city.as_deref().unwrap_or(UNKNOWN_CITY)
    }

    /// Raw latitude and longitude, only when both are non-empty
    #[must_use]
    pub fn coordinates(&self) -> Option<(&str, &str)> {
        let lat = self.lat.as_deref().filter(|v| !v.is_empty())?;
        let lon = self.lon.as_deref().filter(|v| !v.is_empty())?;
        Some((lat, lon))
    }
}

/// Everything the result page shows
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub attractions: Vec<PlaceRecord>,
    pub hotels: AccommodationLinks,
    pub tips: Vec<String>,
}

/// Score the months, look up attractions, then derive tips and hotel links
#[instrument(skip(fetcher))]
pub async fn plan_trip(
    fetcher: &AttractionFetcher,
    city: &str,
    coordinate: Coordinate,
) -> Recommendation {
    let analysis = scoring::analyze(coordinate);
    let attractions = fetcher.fetch(coordinate, city).await;
    let tips = tips::generate_tips(
        analysis.lat,
        analysis.lon,
        analysis.best_month,
        &analysis.scores,
    );
    let hotels = AccommodationLinks::for_city(city);

    info!(
        "Recommended {} for {city} with {} attractions",
        analysis.best_month.name(),
        attractions.len()
    );

    Recommendation {
        analysis,
        attractions,
        hotels,
        tips,
    }
}
