//! `travelmonth` - best time to travel, nearby attractions and trip tips
//!
//! This library scores the twelve months for a coordinate, looks up
//! attractions through the Wikipedia action API, derives packing, crowd and
//! budget tips, and serves the result over HTTP.

pub mod api;
pub mod attractions;
pub mod config;
pub mod error;
pub mod http_client;
pub mod links;
pub mod models;
pub mod planner;
pub mod render;
pub mod scoring;
pub mod telemetry;
pub mod tips;
pub mod web;

// Re-export core types for public API
pub use attractions::{AttractionFetcher, PageDetails, PageHit, PlaceSearch, WikipediaClient};
pub use config::AppConfig;
pub use error::TravelError;
pub use links::AccommodationLinks;
pub use models::{AnalysisResult, Coordinate, DisplayScores, PlaceRecord};
pub use planner::{Recommendation, TripRequest, plan_trip};
pub use scoring::analyze;
pub use tips::generate_tips;
pub use web::AppState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelError>;
