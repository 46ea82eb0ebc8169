// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Confidence, ExtractionResult, Fee, FlightOffer, FlightSegment, ItineraryLeg, LocationResult, ModelAttempt, PriceInfo, SegmentEndpoint, TripQuery};
pub use requests::{FlightSearchRequest, TripExtractionRequest};
pub use responses::{AirlineInfoResponse, AirportInfo, ErrorResponse, FlightSearchResponse, HealthResponse, ServiceInfo, TripExtractionResponse};
