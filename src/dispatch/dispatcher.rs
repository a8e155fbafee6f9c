use base64::Engine;
use serde_json::json;
use tracing::{error, info};

use super::sink::TranscriptSink;
use super::transport::Transport;
use crate::capture::{AudioBlob, SessionId};
use crate::error::ClientError;
use crate::upstream::{generate_url, GenerateContentRequest, GenerateContentResponse};

/// Marker left in the relay URL by the shipped configuration. Dispatching
/// against it means the deployment step was skipped.
pub const RELAY_URL_PLACEHOLDER: &str = "your-relay-host";

/// Shown when the upstream answered but no text could be extracted.
pub const NO_TRANSCRIPT_MESSAGE: &str = "No text was recognized.";

/// Alert fired when neither a key nor a configured relay URL exists.
pub const UNCONFIGURED_RELAY_MESSAGE: &str =
    "Enter an API key, or deploy the relay endpoint and configure its URL.";

const REQUEST_FAILED_MESSAGE: &str = "API request failed";

/// Where a dispatch will send its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Caller-supplied credential, straight to the transcription API
    Direct { url: String },
    /// Credential-less path through the relay endpoint
    Relay { url: String },
    /// Relay URL still carries the placeholder; nothing to send to
    Unconfigured,
}

/// Pick the destination for one dispatch.
///
/// A caller-supplied key wins when it is non-empty after trimming; the
/// relay is only usable once its URL has been configured.
pub fn select_destination(
    api_key: Option<&str>,
    relay_url: &str,
    api_base: &str,
    model: &str,
) -> Destination {
    match api_key.map(str::trim).filter(|key| !key.is_empty()) {
        Some(key) => Destination::Direct {
            url: generate_url(api_base, model, key),
        },
        None if relay_url.contains(RELAY_URL_PLACEHOLDER) => Destination::Unconfigured,
        None => Destination::Relay {
            url: relay_url.to_string(),
        },
    }
}

/// Client-side dispatch pipeline
///
/// One finalized blob in, one rendered outcome out. The processing
/// indicator is always cleared at the end, keyed by the session id so a
/// newer session's state is never clobbered by a stale response.
pub struct Dispatcher<T: Transport> {
    transport: T,
    relay_url: String,
    api_base: String,
    model: String,
    /// Caller-supplied credential, if any (direct mode)
    api_key: Option<String>,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(
        transport: T,
        relay_url: String,
        api_base: String,
        model: String,
        api_key: Option<String>,
    ) -> Self {
        Self {
            transport,
            relay_url,
            api_base,
            model,
            api_key,
        }
    }

    /// Send one finalized capture and render the result through the sink.
    pub async fn dispatch(&self, id: SessionId, blob: &AudioBlob, sink: &mut dyn TranscriptSink) {
        sink.begin_processing(id);
        self.run(id, blob, sink).await;
        sink.end_processing(id);
    }

    async fn run(&self, id: SessionId, blob: &AudioBlob, sink: &mut dyn TranscriptSink) {
        let destination = select_destination(
            self.api_key.as_deref(),
            &self.relay_url,
            &self.api_base,
            &self.model,
        );

        let audio_b64 = base64::engine::general_purpose::STANDARD.encode(&blob.data);

        let (url, body) = match destination {
            Destination::Direct { url } => {
                let request = GenerateContentRequest::transcription(&blob.mime_type, &audio_b64);
                match serde_json::to_value(&request) {
                    Ok(value) => (url, value),
                    Err(e) => {
                        sink.show_error(&ClientError::RequestFailed(e.to_string()).to_string());
                        return;
                    }
                }
            }
            Destination::Relay { url } => (
                url,
                json!({ "audio": audio_b64, "mimeType": blob.mime_type }),
            ),
            Destination::Unconfigured => {
                sink.alert(
                    &ClientError::Configuration(UNCONFIGURED_RELAY_MESSAGE.to_string())
                        .to_string(),
                );
                return;
            }
        };

        info!(
            "Dispatching session {} ({}, {} base64 chars)",
            id,
            blob.mime_type,
            audio_b64.len()
        );

        let (status, response) = match self.transport.post_json(&url, &body).await {
            Ok(result) => result,
            Err(e) => {
                error!("Dispatch for session {} failed: {:#}", id, e);
                sink.show_error(&ClientError::RequestFailed(e.to_string()).to_string());
                return;
            }
        };

        if !(200..300).contains(&status) {
            let message = upstream_error_message(&response)
                .unwrap_or(REQUEST_FAILED_MESSAGE)
                .to_string();
            sink.show_error(&ClientError::RequestFailed(message).to_string());
            return;
        }

        match serde_json::from_value::<GenerateContentResponse>(response.clone()) {
            Ok(parsed) => match parsed.first_text() {
                Some(text) => sink.show_transcript(text),
                // Upstream error objects come back as 200 through the relay;
                // surface their message instead of the generic no-text line.
                None => match upstream_error_message(&response) {
                    Some(message) => sink
                        .show_error(&ClientError::RequestFailed(message.to_string()).to_string()),
                    None => sink.show_error(NO_TRANSCRIPT_MESSAGE),
                },
            },
            Err(e) => sink.show_error(&ClientError::RequestFailed(e.to_string()).to_string()),
        }
    }
}

fn upstream_error_message(body: &serde_json::Value) -> Option<&str> {
    body.pointer("/error/message").and_then(|m| m.as_str())
}
