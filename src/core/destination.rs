use crate::core::airports::POPULAR_DESTINATIONS;
use crate::models::Confidence;
use regex::Regex;
use std::sync::OnceLock;

static IATA_TOKEN_RE: OnceLock<Regex> = OnceLock::new();

fn iata_token_re() -> &'static Regex {
    IATA_TOKEN_RE.get_or_init(|| Regex::new(r"\b([A-Z]{3})\b").expect("valid regex"))
}

/// Destination guess produced without any model help
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackDestination {
    pub destination_city: Option<String>,
    pub iata_code: Option<String>,
    pub confidence: Confidence,
}

/// Guess a destination airport from the query text alone.
///
/// A bare 3-letter token is taken as an airport code at low confidence
/// with the city left as "Unknown". Failing that, the text is scanned
/// against the known destinations by name or code at medium confidence.
/// No match at all leaves both fields empty.
pub fn extract_destination(text: &str) -> FallbackDestination {
    let upper = text.to_uppercase();
    if let Some(caps) = iata_token_re().captures(&upper) {
        return FallbackDestination {
            destination_city: Some("Unknown".to_string()),
            iata_code: Some(caps[1].to_string()),
            confidence: Confidence::Low,
        };
    }

    let lower = text.to_lowercase();
    for (code, name) in POPULAR_DESTINATIONS {
        if lower.contains(&name.to_lowercase()) || lower.contains(&code.to_lowercase()) {
            return FallbackDestination {
                destination_city: Some((*name).to_string()),
                iata_code: Some((*code).to_string()),
                confidence: Confidence::Medium,
            };
        }
    }

    FallbackDestination {
        destination_city: None,
        iata_code: None,
        confidence: Confidence::Low,
    }
}
