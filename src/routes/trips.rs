use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

use crate::core::{airlines, airports};
use crate::models::{
    AirlineInfoResponse, ErrorResponse, FlightSearchRequest, HealthResponse, ServiceInfo,
    TripExtractionRequest, TripExtractionResponse, TripQuery,
};
use crate::services::{AmadeusClient, AmadeusError, GeminiClient, TripExtractor};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<GeminiClient>,
    pub amadeus: Arc<AmadeusClient>,
    pub extractor: Arc<TripExtractor>,
}

/// Configure trip routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/airports", web::get().to(list_airports))
        .route("/extract-trip", web::post().to(extract_trip))
        .route("/search-flights", web::post().to(search_flights))
        .route("/airline-info/{carrier_code}", web::get().to(airline_info));
}

/// Root banner with the endpoint listing
pub async fn service_info() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        status: "online".to_string(),
        service: "Trip Scout API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            "GET /api/v1/health".to_string(),
            "GET /api/v1/airports".to_string(),
            "POST /api/v1/extract-trip".to_string(),
            "POST /api/v1/search-flights".to_string(),
            "GET /api/v1/airline-info/{carrier_code}".to_string(),
        ],
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        gemini_configured: state.gemini.is_configured(),
        amadeus_configured: state.amadeus.is_configured(),
        timestamp: chrono::Utc::now(),
    })
}

/// List the supported origin airports
async fn list_airports() -> impl Responder {
    HttpResponse::Ok().json(airports::origin_airports())
}

/// Extract trip parameters from a natural-language query
///
/// Request body:
/// ```json
/// {
///   "user_query": "weekend trip to Dubai",
///   "origin_iata": "DEL",
///   "fallback_days": 7,
///   "max_duration": 365
/// }
/// ```
async fn extract_trip(
    state: web::Data<AppState>,
    req: web::Json<TripExtractionRequest>,
) -> impl Responder {
    // Validate request
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_error".to_string(),
            message: format!("{e}"),
            status_code: 400,
        });
    }

    let origin = req
        .origin_iata
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase);

    let query = TripQuery {
        query: req.user_query.clone(),
        origin: origin.clone(),
        fallback_days: req.fallback_days,
        max_duration: req.max_duration,
    };

    info!("Extracting trip parameters ({} chars)", query.query.len());

    match state.extractor.extract_trip(&query).await {
        Ok((duration, destination)) => {
            let origin_city = origin
                .as_deref()
                .and_then(airports::origin_city)
                .map(String::from);
            let success = destination.iata_code.is_some();
            HttpResponse::Ok().json(TripExtractionResponse {
                success,
                origin_iata: origin,
                origin_city,
                duration,
                destination,
            })
        }
        Err(e) => {
            error!("Trip extraction failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "extraction_error".to_string(),
                message: format!("{e}"),
                status_code: 500,
            })
        }
    }
}

/// Search flight offers through the Amadeus API
///
/// Request body:
/// ```json
/// {
///   "origin": "DEL",
///   "destination": "DXB",
///   "departure_date": "2026-09-01",
///   "return_date": "2026-09-08",
///   "adults": 1,
///   "max_stops": 0
/// }
/// ```
async fn search_flights(
    state: web::Data<AppState>,
    req: web::Json<FlightSearchRequest>,
) -> impl Responder {
    // Validate request
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_error".to_string(),
            message: format!("{e}"),
            status_code: 400,
        });
    }

    if !state.amadeus.is_configured() {
        return HttpResponse::ServiceUnavailable().json(ErrorResponse {
            error: "service_unavailable".to_string(),
            message: "Flight search credentials not configured".to_string(),
            status_code: 503,
        });
    }

    info!(
        "Searching flights {} -> {} on {}",
        req.origin, req.destination, req.departure_date
    );

    match state.amadeus.search_flights(&req).await {
        Ok(mut result) => {
            // Stop-count filtering happens here; the upstream API only
            // understands a hard non-stop flag
            if let Some(max_stops) = req.max_stops {
                result.flights.retain(|flight| {
                    let outbound_ok = flight.outbound.stops as u32 <= max_stops;
                    let return_ok = flight
                        .return_leg
                        .as_ref()
                        .map(|leg| leg.stops as u32 <= max_stops)
                        .unwrap_or(true);
                    outbound_ok && return_ok
                });
                result.total_offers = result.flights.len();
            }
            HttpResponse::Ok().json(result)
        }
        Err(AmadeusError::NotConfigured) => HttpResponse::ServiceUnavailable().json(ErrorResponse {
            error: "service_unavailable".to_string(),
            message: "Flight search credentials not configured".to_string(),
            status_code: 503,
        }),
        Err(e) => {
            error!("Flight search failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "flight_search_error".to_string(),
                message: format!("{e}"),
                status_code: 500,
            })
        }
    }
}

/// Airline name and booking site for a carrier code
async fn airline_info(path: web::Path<String>) -> impl Responder {
    let carrier_code = path.into_inner();
    let airline_name = airlines::airline_name(&carrier_code).to_string();
    let website = airlines::airline_website(&carrier_code).map(String::from);

    HttpResponse::Ok().json(AirlineInfoResponse {
        has_direct_booking: website.is_some(),
        carrier_code,
        airline_name,
        website,
    })
}
