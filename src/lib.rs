//! Trip Scout - trip parameter extraction and flight search service
//!
//! This library turns free-text trip requests into structured parameters
//! (destination airport, duration, travel dates) through a model-first,
//! fallback-second pipeline, and searches live flight offers for them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{extract_destination, extract_duration_days, extract_json_block, trip_dates};
pub use crate::models::{Confidence, ExtractionResult, LocationResult, TripQuery};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(extract_duration_days("weekend trip", 7, 365), 2);
        let guess = extract_destination("trip to Dubai");
        assert_eq!(guess.iata_code.as_deref(), Some("DXB"));
    }
}
