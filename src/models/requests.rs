use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for trip parameter extraction
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TripExtractionRequest {
    /// Free-text description of the trip
    #[validate(length(min = 1, message = "user_query must not be empty"))]
    pub user_query: String,

    /// Optional origin airport hint (IATA code)
    #[serde(default)]
    pub origin_iata: Option<String>,

    /// Duration to assume when no signal can be extracted
    #[serde(default = "default_fallback_days")]
    #[validate(range(min = 1, message = "fallback_days must be at least 1"))]
    pub fallback_days: u32,

    /// Upper bound on an acceptable trip duration in days
    #[serde(default = "default_max_duration")]
    #[validate(range(min = 1, message = "max_duration must be at least 1"))]
    pub max_duration: u32,
}

fn default_fallback_days() -> u32 {
    7
}

fn default_max_duration() -> u32 {
    365
}

/// Request body for flight offer search
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FlightSearchRequest {
    #[validate(length(equal = 3, message = "origin must be a 3-letter IATA code"))]
    pub origin: String,

    #[validate(length(equal = 3, message = "destination must be a 3-letter IATA code"))]
    pub destination: String,

    /// Departure date in YYYY-MM-DD form
    #[validate(length(min = 1, message = "departure_date must not be empty"))]
    pub departure_date: String,

    /// Omit for a one-way search
    #[serde(default)]
    pub return_date: Option<String>,

    #[serde(default = "default_adults")]
    #[validate(range(min = 1, max = 9, message = "adults must be between 1 and 9"))]
    pub adults: u32,

    #[serde(default = "default_max_results")]
    #[validate(range(min = 1, max = 50, message = "max_results must be between 1 and 50"))]
    pub max_results: u32,

    #[serde(default = "default_currency")]
    pub currency: String,

    /// ECONOMY, PREMIUM_ECONOMY, BUSINESS or FIRST
    #[serde(default)]
    pub travel_class: Option<String>,

    /// Restrict the search itself to direct flights
    #[serde(default)]
    pub non_stop: bool,

    /// Filter returned offers by stop count after the search
    #[serde(default)]
    pub max_stops: Option<u32>,
}

fn default_adults() -> u32 {
    1
}

fn default_max_results() -> u32 {
    10
}

fn default_currency() -> String {
    "INR".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_request_defaults() {
        let req: TripExtractionRequest =
            serde_json::from_str(r#"{"user_query": "weekend in Dubai"}"#).unwrap();
        assert_eq!(req.fallback_days, 7);
        assert_eq!(req.max_duration, 365);
        assert!(req.origin_iata.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_extraction_request_rejects_empty_query() {
        let req: TripExtractionRequest = serde_json::from_str(r#"{"user_query": ""}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_search_request_defaults() {
        let req: FlightSearchRequest = serde_json::from_str(
            r#"{"origin": "DEL", "destination": "DXB", "departure_date": "2026-09-01"}"#,
        )
        .unwrap();
        assert_eq!(req.adults, 1);
        assert_eq!(req.max_results, 10);
        assert_eq!(req.currency, "INR");
        assert!(!req.non_stop);
        assert!(req.max_stops.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_search_request_rejects_bad_codes() {
        let req: FlightSearchRequest = serde_json::from_str(
            r#"{"origin": "DELHI", "destination": "DXB", "departure_date": "2026-09-01"}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }
}
