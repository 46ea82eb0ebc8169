use crate::models::ModelAttempt;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Pause between model candidates after a failed attempt
const CANDIDATE_PAUSE: Duration = Duration::from_millis(250);

/// Result of walking the model candidate list.
///
/// `text` is set by the first candidate that produced non-empty output;
/// `attempts` records every candidate that did not.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub text: Option<String>,
    pub model_used: Option<String>,
    pub attempts: Vec<ModelAttempt>,
}

impl GenerationOutcome {
    fn empty(attempts: Vec<ModelAttempt>) -> Self {
        Self {
            text: None,
            model_used: None,
            attempts,
        }
    }
}

/// Client for the Gemini generateContent REST API
///
/// - Walks an ordered candidate list, one attempt per model, no retries
/// - Short pause between candidates to avoid hammering the API
/// - Missing API key short-circuits without any network traffic
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl GeminiClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            api_key,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Ask the first responsive candidate model for text.
    ///
    /// A candidate fails by transport error, non-success status, or empty
    /// response text; each failure is recorded and the next candidate is
    /// tried after a short pause. A model is never retried.
    pub async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        candidates: &[String],
    ) -> GenerationOutcome {
        let Some(api_key) = self.api_key.as_deref() else {
            return GenerationOutcome::empty(vec![ModelAttempt::new(
                "none",
                "no API key configured",
            )]);
        };

        let mut attempts = Vec::new();
        for (index, model) in candidates.iter().enumerate() {
            match self.try_model(api_key, model, system_prompt, user_prompt).await {
                Ok(text) if !text.is_empty() => {
                    debug!("Model {} answered with {} bytes", model, text.len());
                    return GenerationOutcome {
                        text: Some(text),
                        model_used: Some(model.clone()),
                        attempts,
                    };
                }
                Ok(_) => {
                    warn!("Model {} returned empty text", model);
                    attempts.push(ModelAttempt::new(model, "empty response text"));
                }
                Err(detail) => {
                    warn!("Model {} failed: {}", model, detail);
                    attempts.push(ModelAttempt::new(model, detail));
                }
            }
            if index + 1 < candidates.len() {
                tokio::time::sleep(CANDIDATE_PAUSE).await;
            }
        }

        GenerationOutcome::empty(attempts)
    }

    async fn try_model(
        &self,
        api_key: &str,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        );

        let body = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_prompt,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: user_prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(format!("{status}: {body}"));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| format!("invalid JSON body: {e}"))?;

        let text = json
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.as_array())
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        Ok(text.trim().to_string())
    }
}
