//! Attraction records shown to the user

use serde::{Deserialize, Serialize};

/// Label used on the ticket link when the attraction lookup failed
pub const ERROR_TICKET_TEXT: &str = "Error";
/// Label for places that look free to enter
pub const FREE_TICKET_TEXT: &str = "Free / Visit Info";
/// Label for places that probably need a ticket
pub const PAID_TICKET_TEXT: &str = "🎟 Buy Tickets";

/// A nearby point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub title: String,
    /// Distance from the requested coordinate in meters, 0 when unknown
    pub dist: f64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub description: String,
    /// Canonical article URL, `#` when unknown
    pub wiki_url: String,
    pub ticket_link: String,
    pub ticket_text: String,
    pub is_free: bool,
}

impl PlaceRecord {
    /// Suggestion shown when the knowledge API has nothing for the location
    #[must_use]
    pub fn explore_placeholder(city: &str) -> Self {
        Self {
            title: format!("Explore {city}"),
            dist: 0.0,
            lat: None,
            lon: None,
            description: "We couldn't find specific geotagged attractions, but this city is definitely worth exploring!".to_string(),
            wiki_url: "#".to_string(),
            ticket_link: format!(
                "https://www.google.com/search?q=things+to+do+in+{}",
                plus_encode(city)
            ),
            ticket_text: "Search Google".to_string(),
            is_free: true,
        }
    }

    /// Degraded entry standing in for a failed lookup
    #[must_use]
    pub fn error_placeholder(reason: &str) -> Self {
        Self {
            title: "Could not fetch local attractions.".to_string(),
            dist: 0.0,
            lat: None,
            lon: None,
            description: format!("Error: {reason}"),
            wiki_url: "#".to_string(),
            ticket_link: "#".to_string(),
            ticket_text: ERROR_TICKET_TEXT.to_string(),
            is_free: false,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.ticket_text == ERROR_TICKET_TEXT
    }

    /// Distance formatted for display
    #[must_use]
    pub fn format_distance(&self) -> String {
        if self.dist <= 0.0 {
            return "distance unknown".to_string();
        }
        format!("{:.1} km away", self.dist / 1000.0)
    }
}

/// Query-string form of free text: spaces become `+`, other reserved
/// characters are percent-encoded
#[must_use]
pub fn plus_encode(text: &str) -> String {
    text.split(' ')
        .map(|word| urlencoding::encode(word).into_owned())
        .collect::<Vec<_>>()
        .join("+")
}
