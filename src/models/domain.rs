use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable extraction input, assembled once per request
#[derive(Debug, Clone)]
pub struct TripQuery {
    pub query: String,
    pub origin: Option<String>,
    pub fallback_days: u32,
    pub max_duration: u32,
}

impl TripQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            origin: None,
            fallback_days: 7,
            max_duration: 365,
        }
    }
}

/// Reliability tag attached to an extracted destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Parse a model-supplied confidence label. Unknown labels degrade to
    /// `Medium`, the same default used when the field is absent.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "high" => Confidence::High,
            "low" => Confidence::Low,
            _ => Confidence::Medium,
        }
    }
}

/// Duration extraction outcome with derived travel dates
///
/// `duration_days` is always within `[1, max_duration]` no matter which
/// path (model or fallback) produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub duration_days: u32,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub raw_model_output: Option<String>,
    pub model_used: Option<String>,
    pub used_fallback: bool,
    pub error: Option<String>,
}

/// Destination extraction outcome
///
/// `iata_code`, when present, is exactly 3 uppercase letters. A missing
/// code is a valid terminal state, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationResult {
    pub destination_city: Option<String>,
    pub iata_code: Option<String>,
    pub confidence: Confidence,
    pub raw_output: Option<String>,
    pub model_used: Option<String>,
    pub used_fallback: bool,
    pub error: Option<String>,
}

/// One failed generation attempt, kept only for diagnostics
#[derive(Debug, Clone, Serialize)]
pub struct ModelAttempt {
    pub model: String,
    pub detail: String,
}

impl ModelAttempt {
    pub fn new(model: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            detail: detail.into(),
        }
    }
}

/// Price breakdown of a flight offer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceInfo {
    pub total: Option<String>,
    pub currency: String,
    pub base: Option<String>,
    #[serde(default)]
    pub fees: Vec<Fee>,
    pub grand_total: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fee {
    pub amount: Option<String>,
    #[serde(rename = "type")]
    pub fee_type: Option<String>,
}

/// Departure or arrival point of a segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentEndpoint {
    pub iata: Option<String>,
    pub time: Option<String>,
    pub terminal: Option<String>,
}

/// A single flight segment within an itinerary leg
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSegment {
    pub departure: SegmentEndpoint,
    pub arrival: SegmentEndpoint,
    pub carrier: Option<String>,
    pub flight_number: Option<String>,
    pub aircraft: Option<String>,
    pub aircraft_name: Option<String>,
    pub duration: Option<String>,
    pub duration_label: String,
    pub cabin: Option<String>,
    pub operating_carrier: Option<String>,
}

/// Outbound or return leg of an offer, summarized from its segments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryLeg {
    pub departure: SegmentEndpoint,
    pub arrival: SegmentEndpoint,
    pub duration: Option<String>,
    pub duration_label: String,
    pub stops: usize,
    pub carrier: Option<String>,
    pub flight_number: Option<String>,
    pub aircraft: Option<String>,
    pub cabin: String,
    pub fare_class: Option<String>,
    pub segments: Vec<FlightSegment>,
}

/// A reshaped flight offer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOffer {
    pub id: Option<String>,
    pub price: PriceInfo,
    pub outbound: ItineraryLeg,
    #[serde(rename = "return", skip_serializing_if = "Option::is_none")]
    pub return_leg: Option<ItineraryLeg>,
    pub seats_available: Option<i64>,
    pub instant_ticketing: bool,
    pub validating_airline: Option<String>,
}
