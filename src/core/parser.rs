use crate::models::Confidence;
use serde_json::Value;
use thiserror::Error;

/// Failure modes of the extraction pipelines.
///
/// Everything except `FallbackExhausted` is recovered locally: the
/// pipeline records the failure and switches to its textual fallback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("generation service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("no model produced text: {0}")]
    NoResponse(String),
    #[error("model output is not valid JSON: {0}")]
    ParseError(String),
    #[error("model output failed validation: {0}")]
    ValidationError(String),
    #[error("fallback produced no usable duration")]
    FallbackExhausted,
}

/// Parsed location fields, prior to the fallback stage.
///
/// An invalid or missing airport code is not a hard error: the city and
/// confidence survive, and `code_error` carries the detail.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationParse {
    pub destination_city: Option<String>,
    pub iata_code: Option<String>,
    pub confidence: Confidence,
    pub code_error: Option<String>,
}

/// Cut the JSON object out of raw model text.
///
/// Models wrap their JSON in prose or code fences often enough that we
/// take the substring from the first `{` to the last `}`. Without both
/// braces in order, the text is returned untouched.
pub fn extract_json_block(raw: &str) -> &str {
    match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if end > start => &raw[start..=end],
        _ => raw,
    }
}

/// Parse and validate a duration from raw model text.
///
/// Accepts an integer, an integer-valued float, or a digit string for
/// `duration_days`. A declared "UNKNOWN", a non-integer value, or a
/// value outside `[1, max_duration]` is a validation error; out-of-range
/// values are never clamped.
pub fn parse_duration_response(raw: &str, max_duration: u32) -> Result<u32, ExtractError> {
    let block = extract_json_block(raw);
    let parsed: Value =
        serde_json::from_str(block).map_err(|e| ExtractError::ParseError(e.to_string()))?;

    let value = parsed
        .get("duration_days")
        .ok_or_else(|| ExtractError::ValidationError("missing duration_days field".to_string()))?;

    let days = match value {
        Value::Number(n) => {
            if let Some(days) = n.as_i64() {
                days
            } else if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f.is_finite() {
                    f as i64
                } else {
                    return Err(ExtractError::ValidationError(format!(
                        "duration_days is not a whole number: {f}"
                    )));
                }
            } else {
                return Err(ExtractError::ValidationError(format!(
                    "duration_days is not an integer: {n}"
                )));
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.eq_ignore_ascii_case("UNKNOWN") {
                return Err(ExtractError::ValidationError(
                    "model declined with UNKNOWN".to_string(),
                ));
            }
            if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
                trimmed.parse::<i64>().map_err(|e| {
                    ExtractError::ValidationError(format!("duration_days overflow: {e}"))
                })?
            } else {
                return Err(ExtractError::ValidationError(format!(
                    "duration_days is not numeric: {trimmed:?}"
                )));
            }
        }
        other => {
            return Err(ExtractError::ValidationError(format!(
                "duration_days has unexpected type: {other}"
            )));
        }
    };

    if days < 1 || days > i64::from(max_duration) {
        return Err(ExtractError::ValidationError(format!(
            "duration_days {days} outside 1..={max_duration}"
        )));
    }

    Ok(days as u32)
}

/// Parse destination fields from raw model text.
///
/// `Err` only for unparseable JSON. A code that is not exactly three
/// letters is nulled out and reported through `code_error` while the
/// rest of the parse is kept.
pub fn parse_location_response(raw: &str) -> Result<LocationParse, ExtractError> {
    let block = extract_json_block(raw);
    let parsed: Value =
        serde_json::from_str(block).map_err(|e| ExtractError::ParseError(e.to_string()))?;

    let destination_city = parsed
        .get("destination_city")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    let confidence = parsed
        .get("confidence")
        .and_then(|v| v.as_str())
        .map(Confidence::from_label)
        .unwrap_or(Confidence::Medium);

    let (iata_code, code_error) = match parsed.get("iata_code") {
        Some(Value::String(code)) if is_valid_iata(code) => (Some(code.to_uppercase()), None),
        Some(Value::Null) | None => (
            None,
            Some("missing iata_code in model output".to_string()),
        ),
        Some(other) => (
            None,
            Some(format!("invalid IATA code format: {other}")),
        ),
    };

    Ok(LocationParse {
        destination_city,
        iata_code,
        confidence,
        code_error,
    })
}

/// Exactly three alphabetic characters.
fn is_valid_iata(code: &str) -> bool {
    code.chars().count() == 3 && code.chars().all(|c| c.is_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_block_plain() {
        assert_eq!(extract_json_block(r#"{"duration_days": 5}"#), r#"{"duration_days": 5}"#);
    }

    #[test]
    fn test_json_block_with_prose() {
        let raw = "Sure! Here is the answer:\n```json\n{\"duration_days\": 5}\n```\nDone.";
        assert_eq!(extract_json_block(raw), r#"{"duration_days": 5}"#);
    }

    #[test]
    fn test_json_block_absent_returns_input() {
        assert_eq!(extract_json_block("no braces here"), "no braces here");
        assert_eq!(extract_json_block("} reversed {"), "} reversed {");
    }

    #[test]
    fn test_duration_integer() {
        assert_eq!(parse_duration_response(r#"{"duration_days": 10}"#, 365), Ok(10));
    }

    #[test]
    fn test_duration_integer_valued_float() {
        assert_eq!(parse_duration_response(r#"{"duration_days": 7.0}"#, 365), Ok(7));
    }

    #[test]
    fn test_duration_fractional_float_rejected() {
        let err = parse_duration_response(r#"{"duration_days": 7.9}"#, 365).unwrap_err();
        assert!(matches!(err, ExtractError::ValidationError(_)));
    }

    #[test]
    fn test_duration_digit_string() {
        assert_eq!(parse_duration_response(r#"{"duration_days": "12"}"#, 365), Ok(12));
    }

    #[test]
    fn test_duration_unknown_rejected() {
        let err = parse_duration_response(r#"{"duration_days": "UNKNOWN"}"#, 365).unwrap_err();
        assert!(matches!(err, ExtractError::ValidationError(_)));
        let err = parse_duration_response(r#"{"duration_days": "unknown"}"#, 365).unwrap_err();
        assert!(matches!(err, ExtractError::ValidationError(_)));
    }

    #[test]
    fn test_duration_out_of_range_not_clamped() {
        let err = parse_duration_response(r#"{"duration_days": 900}"#, 365).unwrap_err();
        assert!(matches!(err, ExtractError::ValidationError(_)));
        let err = parse_duration_response(r#"{"duration_days": 0}"#, 365).unwrap_err();
        assert!(matches!(err, ExtractError::ValidationError(_)));
    }

    #[test]
    fn test_duration_respects_caller_max() {
        assert_eq!(parse_duration_response(r#"{"duration_days": 30}"#, 30), Ok(30));
        assert!(parse_duration_response(r#"{"duration_days": 31}"#, 30).is_err());
    }

    #[test]
    fn test_duration_garbage_is_parse_error() {
        let err = parse_duration_response("not json at all", 365).unwrap_err();
        assert!(matches!(err, ExtractError::ParseError(_)));
    }

    #[test]
    fn test_duration_missing_field() {
        let err = parse_duration_response(r#"{"days": 5}"#, 365).unwrap_err();
        assert!(matches!(err, ExtractError::ValidationError(_)));
    }

    #[test]
    fn test_location_full_parse() {
        let raw = r#"{"destination_city": "Dubai", "iata_code": "DXB", "confidence": "high"}"#;
        let parsed = parse_location_response(raw).unwrap();
        assert_eq!(parsed.destination_city.as_deref(), Some("Dubai"));
        assert_eq!(parsed.iata_code.as_deref(), Some("DXB"));
        assert_eq!(parsed.confidence, Confidence::High);
        assert!(parsed.code_error.is_none());
    }

    #[test]
    fn test_location_lowercase_code_uppercased() {
        let raw = r#"{"destination_city": "Dubai", "iata_code": "dxb", "confidence": "high"}"#;
        let parsed = parse_location_response(raw).unwrap();
        assert_eq!(parsed.iata_code.as_deref(), Some("DXB"));
    }

    #[test]
    fn test_location_bad_code_keeps_city() {
        let raw = r#"{"destination_city": "Dubai", "iata_code": "DUBAI", "confidence": "high"}"#;
        let parsed = parse_location_response(raw).unwrap();
        assert_eq!(parsed.destination_city.as_deref(), Some("Dubai"));
        assert!(parsed.iata_code.is_none());
        assert!(parsed.code_error.is_some());
    }

    #[test]
    fn test_location_numeric_code_rejected() {
        let raw = r#"{"destination_city": "Dubai", "iata_code": 123}"#;
        let parsed = parse_location_response(raw).unwrap();
        assert!(parsed.iata_code.is_none());
        assert!(parsed.code_error.is_some());
    }

    #[test]
    fn test_location_missing_confidence_defaults_medium() {
        let raw = r#"{"destination_city": "Dubai", "iata_code": "DXB"}"#;
        let parsed = parse_location_response(raw).unwrap();
        assert_eq!(parsed.confidence, Confidence::Medium);
    }

    #[test]
    fn test_location_garbage_is_parse_error() {
        assert!(matches!(
            parse_location_response("???").unwrap_err(),
            ExtractError::ParseError(_)
        ));
    }
}
