use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use super::types::GenerateContentRequest;

/// Build the generateContent URL with the credential as a query parameter.
pub fn generate_url(api_base: &str, model: &str, api_key: &str) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent?key={}",
        api_base.trim_end_matches('/'),
        model,
        api_key
    )
}

/// Upstream transcription backend.
///
/// The relay handler forwards every well-formed request through this trait
/// and relays whatever JSON comes back, so implementations must not
/// interpret the upstream body.
#[async_trait]
pub trait TranscriptionBackend: Send + Sync {
    /// Forward one audio payload and return the raw upstream JSON body.
    async fn generate(&self, audio_b64: &str, mime_type: &str) -> Result<serde_json::Value>;

    /// Backend name for logging
    fn name(&self) -> &str;
}

/// Transcription API client holding the server-side credential
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_base: &str, model: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl TranscriptionBackend for GeminiClient {
    async fn generate(&self, audio_b64: &str, mime_type: &str) -> Result<serde_json::Value> {
        let url = generate_url(&self.api_base, &self.model, &self.api_key);
        let request = GenerateContentRequest::transcription(mime_type, audio_b64);

        info!("Forwarding to {} ({})", self.model, mime_type);

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Upstream request failed")?;

        // The body travels back whether or not the upstream call succeeded
        // semantically; error objects are relayed like any other response.
        let body = response
            .json()
            .await
            .context("Failed to decode upstream response")?;

        Ok(body)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
