use crate::core::{dates, destination, duration, parser, prompts};
use crate::models::{ExtractionResult, LocationResult, ModelAttempt, TripQuery};
use crate::services::gemini::GeminiClient;
use chrono::Local;
use std::sync::Arc;
use tracing::{debug, info};

/// Runs the two extraction pipelines: model first, textual fallback second.
///
/// Model failures never escape; they are recorded on the result and the
/// fallback takes over. The duration pipeline additionally guarantees a
/// value in `[1, max_duration]`.
pub struct TripExtractor {
    gemini: Arc<GeminiClient>,
    duration_models: Vec<String>,
    destination_models: Vec<String>,
}

impl TripExtractor {
    pub fn new(
        gemini: Arc<GeminiClient>,
        duration_models: Vec<String>,
        destination_models: Vec<String>,
    ) -> Self {
        Self {
            gemini,
            duration_models,
            destination_models,
        }
    }

    /// Run both pipelines for one query. The pipelines are independent:
    /// a fallback on one side says nothing about the other.
    pub async fn extract_trip(
        &self,
        query: &TripQuery,
    ) -> Result<(ExtractionResult, LocationResult), parser::ExtractError> {
        let duration = self.extract_duration(query).await?;
        let destination = self.extract_destination(query).await;
        Ok((duration, destination))
    }

    /// Extract the trip duration and derive departure and return dates.
    pub async fn extract_duration(
        &self,
        query: &TripQuery,
    ) -> Result<ExtractionResult, parser::ExtractError> {
        let today = Local::now().date_naive();
        let system_prompt = prompts::duration_system_prompt(query.origin.as_deref());
        let user_prompt = prompts::user_prompt(&query.query);

        let outcome = self
            .gemini
            .generate(&system_prompt, &user_prompt, &self.duration_models)
            .await;

        let mut error = None;
        let mut duration_days = None;

        match outcome.text.as_deref() {
            Some(raw) => match parser::parse_duration_response(raw, query.max_duration) {
                Ok(days) => duration_days = Some(days),
                Err(e) => {
                    debug!("Duration output rejected: {}", e);
                    error = Some(e);
                }
            },
            None => {
                error = Some(if self.gemini.is_configured() {
                    parser::ExtractError::NoResponse(summarize_attempts(&outcome.attempts))
                } else {
                    parser::ExtractError::ServiceUnavailable(summarize_attempts(&outcome.attempts))
                });
            }
        }

        let used_fallback = duration_days.is_none();
        let duration_days = match duration_days {
            Some(days) => days,
            None => {
                let days =
                    duration::extract_duration_days(&query.query, query.fallback_days, query.max_duration);
                info!("Duration fallback produced {} days", days);
                days
            }
        };

        if duration_days < 1 || duration_days > query.max_duration {
            return Err(parser::ExtractError::FallbackExhausted);
        }

        let (departure_date, return_date) = dates::trip_dates(today, duration_days);

        Ok(ExtractionResult {
            duration_days,
            departure_date,
            return_date,
            raw_model_output: outcome.text,
            model_used: outcome.model_used,
            used_fallback,
            error: error.map(|e| e.to_string()),
        })
    }

    /// Extract the destination city and airport code.
    ///
    /// A missing code after both stages is a valid outcome, so this
    /// pipeline has no hard failure mode.
    pub async fn extract_destination(&self, query: &TripQuery) -> LocationResult {
        let user_prompt = prompts::user_prompt(&query.query);
        let outcome = self
            .gemini
            .generate(prompts::destination_system_prompt(), &user_prompt, &self.destination_models)
            .await;

        let mut result = LocationResult {
            destination_city: None,
            iata_code: None,
            confidence: crate::models::Confidence::Low,
            raw_output: outcome.text.clone(),
            model_used: outcome.model_used,
            used_fallback: false,
            error: None,
        };

        match outcome.text.as_deref() {
            Some(raw) => match parser::parse_location_response(raw) {
                Ok(parsed) => {
                    result.destination_city = parsed.destination_city;
                    result.iata_code = parsed.iata_code;
                    result.confidence = parsed.confidence;
                    result.error = parsed.code_error;
                }
                Err(e) => {
                    debug!("Destination output rejected: {}", e);
                    result.error = Some(e.to_string());
                }
            },
            None => {
                let error = if self.gemini.is_configured() {
                    parser::ExtractError::NoResponse(summarize_attempts(&outcome.attempts))
                } else {
                    parser::ExtractError::ServiceUnavailable(summarize_attempts(&outcome.attempts))
                };
                result.error = Some(error.to_string());
            }
        }

        if result.iata_code.is_none() {
            result.used_fallback = true;
            let guess = destination::extract_destination(&query.query);
            if guess.iata_code.is_some() {
                info!("Destination fallback guessed {:?}", guess.iata_code);
                result.destination_city = guess.destination_city;
                result.iata_code = guess.iata_code;
                result.confidence = guess.confidence;
            }
        }

        result
    }
}

fn summarize_attempts(attempts: &[ModelAttempt]) -> String {
    if attempts.is_empty() {
        return "no model candidates configured".to_string();
    }
    attempts
        .iter()
        .map(|a| format!("{}: {}", a.model, a.detail))
        .collect::<Vec<_>>()
        .join("; ")
}
