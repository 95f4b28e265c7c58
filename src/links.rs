//! Accommodation search links

use serde::Serialize;

use crate::models::place::plus_encode;

/// Hotel search URLs for a city
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccommodationLinks {
    pub booking: String,
    pub airbnb: String,
    pub google_hotels: String,
}

impl AccommodationLinks {
    /// Build the three search URLs for a city name
    #[must_use]
    pub fn for_city(city: &str) -> Self {
        let city = plus_encode(city);
        Self {
            booking: format!("https://www.booking.com/searchresults.html?ss={city}"),
            airbnb: format!("https://www.airbnb.com/s/{city}/homes"),
            google_hotels: format!("https://www.google.com/travel/hotels?q={city}"),
        }
    }

    /// Provider label and URL pairs, in display order
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("Booking.com", self.booking.as_str()),
            ("Airbnb", self.airbnb.as_str()),
            ("Google Hotels", self.google_hotels.as_str()),
        ]
    }
}
