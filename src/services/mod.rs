// Service exports
pub mod amadeus;
pub mod extractor;
pub mod gemini;

pub use amadeus::{format_duration, AmadeusClient, AmadeusError};
pub use extractor::TripExtractor;
pub use gemini::{GeminiClient, GenerationOutcome};
