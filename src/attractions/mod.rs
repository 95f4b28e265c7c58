//! Nearby attractions
//!
//! [`AttractionFetcher`] runs the lookup sequence against a [`PlaceSearch`]
//! backend: geosearch around the coordinate, a free-text fallback on the
//! city name, then one batched details call for descriptions and URLs.
//! Every failure is folded into a placeholder record so callers always get
//! a non-empty list.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, info, instrument, warn};

use crate::Result;
use crate::config::SearchConfig;
use crate::models::place::{FREE_TICKET_TEXT, PAID_TICKET_TEXT, plus_encode};
use crate::models::{Coordinate, PlaceRecord};

pub mod wikipedia;

pub use wikipedia::WikipediaClient;

/// Phrases in a description that mark a place as free to visit
const FREE_PHRASES: [&str; 5] = [
    "public park",
    "free admission",
    "no entry fee",
    "open to the public",
    "public square",
];

const NO_DESCRIPTION: &str = "No description available.";

/// A page returned by a geo or text search
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageHit {
    pub pageid: u64,
    pub title: String,
    /// Meters from the search center; text search results carry none
    #[serde(default)]
    pub dist: Option<f64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// Extract and canonical URL of a page
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageDetails {
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub fullurl: Option<String>,
}

/// The three query shapes the fetcher needs from a knowledge API
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    /// Pages geotagged within `radius_meters` of `center`, nearest first
    async fn geosearch(
        &self,
        center: Coordinate,
        radius_meters: u32,
        limit: u32,
    ) -> Result<Vec<PageHit>>;

    /// Pages ranked by relevance to a free-text query
    async fn text_search(&self, query: &str, limit: u32) -> Result<Vec<PageHit>>;

    /// Intro extracts and URLs for a batch of pages, keyed by page id
    async fn page_details(
        &self,
        page_ids: &[u64],
        extract_chars: u32,
    ) -> Result<HashMap<u64, PageDetails>>;
}

/// Looks up attractions and turns them into display records
#[derive(Clone)]
pub struct AttractionFetcher {
    source: Arc<dyn PlaceSearch>,
    settings: SearchConfig,
}

impl AttractionFetcher {
    #[must_use]
    pub fn new(source: Arc<dyn PlaceSearch>, settings: SearchConfig) -> Self {
        Self { source, settings }
    }

    /// Up to `geo_limit` attractions near the coordinate; never empty, never fails
    #[instrument(skip(self), fields(lat = coordinate.latitude, lon = coordinate.longitude))]
    pub async fn fetch(&self, coordinate: Coordinate, city: &str) -> Vec<PlaceRecord> {
        match self.try_fetch(coordinate, city).await {
            Ok(places) => places,
            Err(e) => {
                error!("Error fetching attractions: {e}");
                vec![PlaceRecord::error_placeholder(&e.to_string())]
            }
        }
    }

    async fn try_fetch(&self, coordinate: Coordinate, city: &str) -> Result<Vec<PlaceRecord>> {
        let mut hits = self
            .source
            .geosearch(
                coordinate,
                self.settings.radius_meters,
                self.settings.geo_limit,
            )
            .await?;
        debug!("Geosearch returned {} pages", hits.len());

        if hits.is_empty() && !city.is_empty() {
            warn!("No geotagged pages near coordinate, searching for '{city}' instead");
            hits = self
                .source
                .text_search(&format!("{city} tourist attraction"), self.settings.text_limit)
                .await?;
            for hit in &mut hits {
                hit.dist = Some(0.0);
            }
        }

        if hits.is_empty() {
            info!("No attractions found for '{city}', suggesting a web search");
            return Ok(vec![PlaceRecord::explore_placeholder(city)]);
        }

        let page_ids: Vec<u64> = hits.iter().map(|hit| hit.pageid).collect();
        let details = self
            .source
            .page_details(&page_ids, self.settings.extract_chars)
            .await?;

        let max_chars = self.settings.extract_chars as usize;
        Ok(hits
            .into_iter()
            .map(|hit| {
                let page = details.get(&hit.pageid).cloned().unwrap_or_default();
                build_record(hit, page, max_chars)
            })
            .collect())
    }
}

fn build_record(hit: PageHit, details: PageDetails, max_chars: usize) -> PlaceRecord {
    let description = details
        .extract
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());
    let is_free = looks_free(&description);
    let search_terms = plus_encode(&hit.title);

    let (ticket_link, ticket_text) = if is_free {
        (
            format!("https://www.google.com/search?q={search_terms}+visitor+info"),
            FREE_TICKET_TEXT,
        )
    } else {
        (
            format!("https://www.google.com/search?q={search_terms}+official+site+tickets"),
            PAID_TICKET_TEXT,
        )
    };

    PlaceRecord {
        title: hit.title,
        dist: hit.dist.unwrap_or(0.0),
        lat: hit.lat,
        lon: hit.lon,
        description: truncate_description(description, max_chars),
        wiki_url: details.fullurl.unwrap_or_else(|| "#".to_string()),
        ticket_link,
        ticket_text: ticket_text.to_string(),
        is_free,
    }
}

/// Case-insensitive match against [`FREE_PHRASES`]
#[must_use]
pub fn looks_free(description: &str) -> bool {
    let lower = description.to_lowercase();
    FREE_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

/// Cut to `max_chars` characters, marking the cut with `...`
#[must_use]
pub fn truncate_description(description: String, max_chars: usize) -> String {
    if description.chars().count() <= max_chars {
        return description;
    }
    let mut truncated: String = description.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}
