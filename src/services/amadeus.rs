use crate::core::airlines;
use crate::models::{
    FlightOffer, FlightSearchRequest, FlightSearchResponse, FlightSegment, ItineraryLeg,
    PriceInfo, SegmentEndpoint,
};
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Tokens are refreshed this many seconds before they actually expire
const TOKEN_EXPIRY_BUFFER_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum AmadeusError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("flight search credentials not configured")]
    NotConfigured,
    #[error("authentication failed: {0}")]
    AuthFailed(String),
    #[error("API returned error: {0}")]
    ApiError(String),
    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// Client for the Amadeus flight offers API
///
/// - OAuth2 client-credentials flow with an in-process token cache
/// - Offers are reshaped into our own response types; at most 10 per search
/// - Unparseable offers are skipped rather than failing the search
pub struct AmadeusClient {
    client: Client,
    base_url: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    token: Mutex<Option<CachedToken>>,
}

impl AmadeusClient {
    pub fn new(base_url: String, client_id: Option<String>, client_secret: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            client_id,
            client_secret,
            token: Mutex::new(None),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }

    /// Search flight offers for the given route and dates.
    pub async fn search_flights(
        &self,
        request: &FlightSearchRequest,
    ) -> Result<FlightSearchResponse, AmadeusError> {
        let token = self.access_token().await?;

        let mut query = format!(
            "originLocationCode={}&destinationLocationCode={}&departureDate={}&adults={}&currencyCode={}&max={}",
            urlencoding::encode(&request.origin),
            urlencoding::encode(&request.destination),
            urlencoding::encode(&request.departure_date),
            request.adults,
            urlencoding::encode(&request.currency),
            request.max_results
        );
        if let Some(return_date) = &request.return_date {
            query.push_str(&format!("&returnDate={}", urlencoding::encode(return_date)));
        }
        if let Some(travel_class) = &request.travel_class {
            query.push_str(&format!("&travelClass={}", urlencoding::encode(travel_class)));
        }
        if request.non_stop {
            query.push_str("&nonStop=true");
        }

        let url = format!(
            "{}/v2/shopping/flight-offers?{}",
            self.base_url.trim_end_matches('/'),
            query
        );

        debug!(
            "Searching flights {} -> {} on {}",
            request.origin, request.destination, request.departure_date
        );

        let response = self.client.get(&url).bearer_auth(&token).send().await?;
        let status = response.status();

        if status == StatusCode::BAD_REQUEST {
            let body: Value = response.json().await.unwrap_or_default();
            let detail = body
                .pointer("/errors/0/detail")
                .and_then(|d| d.as_str())
                .unwrap_or("Bad request")
                .to_string();
            return Err(AmadeusError::ApiError(detail));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(AmadeusError::ApiError(format!("{status}: {body}")));
        }

        let data: Value = response.json().await?;
        let result = parse_flight_offers(&data, &request.origin, &request.destination);
        info!(
            "Found {} offers for {} -> {}",
            result.total_offers, request.origin, request.destination
        );
        Ok(result)
    }

    /// Current access token, refreshed through the cache as needed.
    async fn access_token(&self) -> Result<String, AmadeusError> {
        let (client_id, client_secret) = match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => (id, secret),
            _ => return Err(AmadeusError::NotConfigured),
        };

        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.expires_at {
                return Ok(token.access_token.clone());
            }
        }

        let url = format!(
            "{}/v1/security/oauth2/token",
            self.base_url.trim_end_matches('/')
        );
        let response = self
            .client
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", client_id.as_str()),
                ("client_secret", client_secret.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(AmadeusError::AuthFailed(format!("{status}: {body}")));
        }

        let data: Value = response.json().await?;
        let access_token = data
            .get("access_token")
            .and_then(|t| t.as_str())
            .ok_or_else(|| AmadeusError::InvalidResponse("missing access_token".to_string()))?
            .to_string();
        let expires_in = data.get("expires_in").and_then(|e| e.as_u64()).unwrap_or(1800);

        debug!("Fetched new access token, expires in {}s", expires_in);
        *cached = Some(CachedToken {
            access_token: access_token.clone(),
            expires_at: Instant::now()
                + Duration::from_secs(expires_in.saturating_sub(TOKEN_EXPIRY_BUFFER_SECS)),
        });

        Ok(access_token)
    }
}

/// Convert an ISO 8601 duration like "PT5H30M" to "5h 30m".
pub fn format_duration(duration: Option<&str>) -> String {
    let Some(raw) = duration else {
        return "N/A".to_string();
    };

    let mut rest = raw.trim_start_matches("PT");
    let mut hours = 0i64;
    if let Some(idx) = rest.find('H') {
        hours = rest[..idx].parse().unwrap_or(0);
        rest = &rest[idx + 1..];
    }
    let mut minutes = 0i64;
    if let Some(idx) = rest.find('M') {
        minutes = rest[..idx].parse().unwrap_or(0);
    }

    match (hours > 0, minutes > 0) {
        (true, true) => format!("{hours}h {minutes}m"),
        (true, false) => format!("{hours}h"),
        (false, true) => format!("{minutes}m"),
        (false, false) => "N/A".to_string(),
    }
}

fn text(value: &Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(|v| v.as_str())
        .map(String::from)
}

fn parse_flight_offers(data: &Value, origin: &str, destination: &str) -> FlightSearchResponse {
    let offers: &[Value] = data
        .get("data")
        .and_then(|d| d.as_array())
        .map(|v| v.as_slice())
        .unwrap_or(&[]);

    if offers.is_empty() {
        return FlightSearchResponse {
            success: true,
            origin: origin.to_string(),
            destination: destination.to_string(),
            total_offers: 0,
            flights: Vec::new(),
            message: Some("No flights found for the selected route and dates.".to_string()),
            currency: None,
        };
    }

    let flights: Vec<FlightOffer> = offers.iter().take(10).filter_map(parse_single_offer).collect();

    FlightSearchResponse {
        success: true,
        origin: origin.to_string(),
        destination: destination.to_string(),
        total_offers: offers.len(),
        flights,
        message: None,
        currency: Some(
            data.pointer("/dictionaries/currencies")
                .cloned()
                .unwrap_or_else(|| Value::Object(Map::new())),
        ),
    }
}

fn parse_single_offer(offer: &Value) -> Option<FlightOffer> {
    let itineraries = offer.get("itineraries").and_then(|i| i.as_array())?;
    let outbound = parse_leg(itineraries.first()?, fare_detail(offer, 0))?;
    let return_leg = itineraries
        .get(1)
        .and_then(|leg| parse_leg(leg, fare_detail(offer, 1)));

    let price = PriceInfo {
        total: text(offer, "/price/total"),
        currency: offer
            .pointer("/price/currency")
            .and_then(|c| c.as_str())
            .unwrap_or("INR")
            .to_string(),
        base: text(offer, "/price/base"),
        fees: offer
            .pointer("/price/fees")
            .and_then(|f| serde_json::from_value(f.clone()).ok())
            .unwrap_or_default(),
        grand_total: text(offer, "/price/grandTotal"),
    };

    Some(FlightOffer {
        id: text(offer, "/id"),
        price,
        outbound,
        return_leg,
        seats_available: offer.get("numberOfBookableSeats").and_then(|s| s.as_i64()),
        instant_ticketing: offer
            .get("instantTicketingRequired")
            .and_then(|i| i.as_bool())
            .unwrap_or(false),
        validating_airline: text(offer, "/validatingAirlineCodes/0"),
    })
}

/// Fare details for a leg; falls back to the first entry when the
/// pricing data has fewer entries than legs.
fn fare_detail(offer: &Value, leg_index: usize) -> Option<&Value> {
    let fares = offer
        .pointer("/travelerPricings/0/fareDetailsBySegment")?
        .as_array()?;
    fares.get(leg_index).or_else(|| fares.first())
}

fn parse_leg(leg: &Value, fare: Option<&Value>) -> Option<ItineraryLeg> {
    let segments_raw = leg.get("segments").and_then(|s| s.as_array())?;
    let segments: Vec<FlightSegment> = segments_raw.iter().map(parse_segment).collect();
    let first = segments.first()?;
    let last = segments.last()?;
    let duration = text(leg, "/duration");

    Some(ItineraryLeg {
        departure: first.departure.clone(),
        arrival: last.arrival.clone(),
        duration_label: format_duration(duration.as_deref()),
        duration,
        stops: segments.len() - 1,
        carrier: first.carrier.clone(),
        flight_number: first.flight_number.clone(),
        aircraft: first.aircraft.clone(),
        cabin: fare
            .and_then(|f| f.get("cabin"))
            .and_then(|c| c.as_str())
            .unwrap_or("Economy")
            .to_string(),
        fare_class: fare
            .and_then(|f| f.get("class"))
            .and_then(|c| c.as_str())
            .map(String::from),
        segments,
    })
}

fn parse_segment(segment: &Value) -> FlightSegment {
    let aircraft = text(segment, "/aircraft/code");
    let duration = text(segment, "/duration");

    FlightSegment {
        departure: parse_endpoint(segment.get("departure")),
        arrival: parse_endpoint(segment.get("arrival")),
        carrier: text(segment, "/carrierCode"),
        flight_number: text(segment, "/number"),
        aircraft_name: aircraft
            .as_deref()
            .map(|code| airlines::aircraft_name(code).to_string()),
        duration_label: format_duration(duration.as_deref()),
        duration,
        cabin: text(segment, "/cabin"),
        operating_carrier: text(segment, "/operating/carrierCode"),
        aircraft,
    }
}

fn parse_endpoint(value: Option<&Value>) -> SegmentEndpoint {
    SegmentEndpoint {
        iata: value
            .and_then(|v| v.get("iataCode"))
            .and_then(|c| c.as_str())
            .map(String::from),
        time: value
            .and_then(|v| v.get("at"))
            .and_then(|t| t.as_str())
            .map(String::from),
        terminal: value
            .and_then(|v| v.get("terminal"))
            .and_then(|t| t.as_str())
            .map(String::from),
    }
}
