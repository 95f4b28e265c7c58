//! Data models for the travel month service
//!
//! - Coordinate: the location a request is about
//! - Analysis: best month and display scores
//! - Place: attraction records from the knowledge API

pub mod analysis;
pub mod coordinate;
pub mod place;

pub use analysis::{AnalysisResult, DisplayScores, MONTHS, month_index};
pub use coordinate::Coordinate;
pub use place::PlaceRecord;
