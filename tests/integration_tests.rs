// Integration tests for Trip Scout

use std::sync::Arc;

use chrono::Duration;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use trip_scout::models::{Confidence, FlightSearchRequest, TripQuery};
use trip_scout::services::{AmadeusClient, AmadeusError, GeminiClient, TripExtractor};

fn model_body(text: &str) -> String {
    json!({
        "candidates": [{
            "content": {
                "parts": [{"text": text}]
            }
        }]
    })
    .to_string()
}

fn extractor_for(
    server: &ServerGuard,
    duration_models: &[&str],
    destination_models: &[&str],
) -> TripExtractor {
    let gemini = Arc::new(GeminiClient::new(server.url(), Some("test-key".to_string())));
    TripExtractor::new(
        gemini,
        duration_models.iter().map(|m| m.to_string()).collect(),
        destination_models.iter().map(|m| m.to_string()).collect(),
    )
}

fn search_request(origin: &str, destination: &str) -> FlightSearchRequest {
    serde_json::from_value(json!({
        "origin": origin,
        "destination": destination,
        "departure_date": "2026-09-01",
        "return_date": "2026-09-08"
    }))
    .unwrap()
}

#[tokio::test]
async fn test_duration_extracted_from_model_output() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-pro:generateContent")
        .match_header("x-goog-api-key", "test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(model_body("{\"duration_days\": 12}"))
        .create_async()
        .await;

    let extractor = extractor_for(&server, &["gemini-2.5-pro"], &["gemini-2.5-flash"]);
    let result = extractor
        .extract_duration(&TripQuery::new("a flexible trip"))
        .await
        .unwrap();

    assert_eq!(result.duration_days, 12);
    assert!(!result.used_fallback);
    assert_eq!(result.model_used.as_deref(), Some("gemini-2.5-pro"));
    assert!(result.error.is_none());
    assert_eq!(result.return_date - result.departure_date, Duration::days(12));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_model_unknown_answer_falls_back() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-pro:generateContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(model_body("{\"duration_days\": \"UNKNOWN\"}"))
        .create_async()
        .await;

    let extractor = extractor_for(&server, &["gemini-2.5-pro"], &[]);
    let result = extractor
        .extract_duration(&TripQuery::new("ten days in Rome"))
        .await
        .unwrap();

    // The model answered but declined, so the textual rules take over
    assert_eq!(result.duration_days, 10);
    assert!(result.used_fallback);
    assert!(result.raw_model_output.is_some());
    assert!(result.error.as_deref().unwrap().contains("validation"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_model_value_above_cap_falls_back() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-pro:generateContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(model_body("{\"duration_days\": 900}"))
        .create_async()
        .await;

    let extractor = extractor_for(&server, &["gemini-2.5-pro"], &[]);
    let result = extractor
        .extract_duration(&TripQuery::new("somewhere warm"))
        .await
        .unwrap();

    // 900 is never clamped; the query has no signal, so the default wins
    assert_eq!(result.duration_days, 7);
    assert!(result.used_fallback);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_second_model_candidate_answers() {
    let mut server = Server::new_async().await;
    let failing = server
        .mock("POST", "/v1beta/models/gemini-2.5-pro:generateContent")
        .with_status(503)
        .with_body("overloaded")
        .expect(1)
        .create_async()
        .await;
    let working = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(model_body("{\"duration_days\": 3}"))
        .expect(1)
        .create_async()
        .await;

    let extractor = extractor_for(
        &server,
        &["gemini-2.5-pro", "gemini-2.5-flash"],
        &[],
    );
    let result = extractor
        .extract_duration(&TripQuery::new("short break"))
        .await
        .unwrap();

    assert_eq!(result.duration_days, 3);
    assert_eq!(result.model_used.as_deref(), Some("gemini-2.5-flash"));
    assert!(!result.used_fallback);
    failing.assert_async().await;
    working.assert_async().await;
}

#[tokio::test]
async fn test_destination_extracted_from_model_output() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(model_body(
            "{\"destination_city\": \"Zurich\", \"iata_code\": \"zrh\", \"confidence\": \"high\"}",
        ))
        .create_async()
        .await;

    let extractor = extractor_for(&server, &[], &["gemini-2.5-flash"]);
    let result = extractor
        .extract_destination(&TripQuery::new("skiing near Zurich"))
        .await;

    assert_eq!(result.iata_code.as_deref(), Some("ZRH"));
    assert_eq!(result.destination_city.as_deref(), Some("Zurich"));
    assert_eq!(result.confidence, Confidence::High);
    assert!(!result.used_fallback);
    assert!(result.error.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_destination_bad_model_code_uses_fallback() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(model_body(
            "{\"destination_city\": \"Dubai\", \"iata_code\": \"DUBAI\", \"confidence\": \"high\"}",
        ))
        .create_async()
        .await;

    let extractor = extractor_for(&server, &[], &["gemini-2.5-flash"]);
    let result = extractor
        .extract_destination(&TripQuery::new("trip to Dubai"))
        .await;

    // Five letters is not an airport code; the textual scan recovers it
    assert_eq!(result.iata_code.as_deref(), Some("DXB"));
    assert_eq!(result.destination_city.as_deref(), Some("Dubai"));
    assert_eq!(result.confidence, Confidence::Medium);
    assert!(result.used_fallback);
    assert!(result.error.is_some());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_token_fetched_once_for_repeated_searches() {
    let mut server = Server::new_async().await;
    let token_mock = server
        .mock("POST", "/v1/security/oauth2/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"access_token": "testtoken", "expires_in": 1799}).to_string())
        .expect(1)
        .create_async()
        .await;
    let search_mock = server
        .mock("GET", "/v2/shopping/flight-offers")
        .match_query(Matcher::Any)
        .match_header("authorization", "Bearer testtoken")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"data": []}).to_string())
        .expect(2)
        .create_async()
        .await;

    let client = AmadeusClient::new(
        server.url(),
        Some("client-id".to_string()),
        Some("client-secret".to_string()),
    );

    let first = client.search_flights(&search_request("DEL", "DXB")).await.unwrap();
    let second = client.search_flights(&search_request("DEL", "SIN")).await.unwrap();

    assert_eq!(first.total_offers, 0);
    assert!(first.message.is_some());
    assert_eq!(second.destination, "SIN");
    token_mock.assert_async().await;
    search_mock.assert_async().await;
}

#[tokio::test]
async fn test_bad_request_detail_is_surfaced() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/security/oauth2/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"access_token": "testtoken", "expires_in": 1799}).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/v2/shopping/flight-offers")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(json!({"errors": [{"detail": "Date/Time is in the past"}]}).to_string())
        .create_async()
        .await;

    let client = AmadeusClient::new(
        server.url(),
        Some("client-id".to_string()),
        Some("client-secret".to_string()),
    );

    let err = client
        .search_flights(&search_request("DEL", "DXB"))
        .await
        .unwrap_err();
    assert!(
        matches!(err, AmadeusError::ApiError(ref detail) if detail == "Date/Time is in the past"),
        "Unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_auth_failure_is_reported() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/security/oauth2/token")
        .with_status(401)
        .with_body("invalid_client")
        .create_async()
        .await;

    let client = AmadeusClient::new(
        server.url(),
        Some("client-id".to_string()),
        Some("wrong-secret".to_string()),
    );

    let err = client
        .search_flights(&search_request("DEL", "DXB"))
        .await
        .unwrap_err();
    assert!(matches!(err, AmadeusError::AuthFailed(_)));
}

#[tokio::test]
async fn test_flight_offers_parsed_end_to_end() {
    let payload = json!({
        "data": [{
            "id": "1",
            "numberOfBookableSeats": 5,
            "instantTicketingRequired": false,
            "validatingAirlineCodes": ["AI"],
            "price": {
                "total": "21500.00",
                "currency": "INR",
                "base": "19000.00",
                "grandTotal": "21500.00",
                "fees": [{"amount": "0.00", "type": "SUPPLIER"}]
            },
            "travelerPricings": [{
                "fareDetailsBySegment": [{"cabin": "ECONOMY", "class": "U"}]
            }],
            "itineraries": [{
                "duration": "PT3H50M",
                "segments": [{
                    "departure": {"iataCode": "DEL", "at": "2026-09-01T04:30:00", "terminal": "3"},
                    "arrival": {"iataCode": "DXB", "at": "2026-09-01T06:50:00", "terminal": "1"},
                    "carrierCode": "AI",
                    "number": "995",
                    "aircraft": {"code": "32N"},
                    "duration": "PT3H50M"
                }]
            }]
        }],
        "dictionaries": {"currencies": {"INR": "INDIAN RUPEE"}}
    });

    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/security/oauth2/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"access_token": "testtoken", "expires_in": 1799}).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/v2/shopping/flight-offers")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(payload.to_string())
        .create_async()
        .await;

    let client = AmadeusClient::new(
        server.url(),
        Some("client-id".to_string()),
        Some("client-secret".to_string()),
    );

    let result = client
        .search_flights(&search_request("DEL", "DXB"))
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.total_offers, 1);
    assert_eq!(result.flights.len(), 1);
    assert!(result.currency.is_some());

    let offer = &result.flights[0];
    assert_eq!(offer.id.as_deref(), Some("1"));
    assert_eq!(offer.seats_available, Some(5));
    assert_eq!(offer.price.currency, "INR");
    assert_eq!(offer.outbound.departure.iata.as_deref(), Some("DEL"));
    assert_eq!(offer.outbound.arrival.iata.as_deref(), Some("DXB"));
    assert_eq!(offer.outbound.duration_label, "3h 50m");
    assert_eq!(offer.outbound.cabin, "ECONOMY");
    assert!(offer.return_leg.is_none());
}
