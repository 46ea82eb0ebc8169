use crate::models::domain::{ExtractionResult, FlightOffer, LocationResult};
use serde::{Deserialize, Serialize};

/// Response for the trip extraction endpoint
///
/// Both pipelines always report, even when one of them fell back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripExtractionResponse {
    /// True when a destination airport code was resolved
    pub success: bool,
    pub origin_iata: Option<String>,
    pub origin_city: Option<String>,
    pub duration: ExtractionResult,
    pub destination: LocationResult,
}

/// Response for the flight search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSearchResponse {
    pub success: bool,
    pub origin: String,
    pub destination: String,
    pub total_offers: usize,
    pub flights: Vec<FlightOffer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Currency dictionary echoed from the upstream response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<serde_json::Value>,
}

/// A supported origin airport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportInfo {
    pub iata: String,
    pub city: String,
    pub name: String,
    pub country: String,
}

/// Airline lookup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirlineInfoResponse {
    pub carrier_code: String,
    pub airline_name: String,
    pub website: Option<String>,
    pub has_direct_booking: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub gemini_configured: bool,
    pub amadeus_configured: bool,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Root banner listing the available endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub status: String,
    pub service: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
