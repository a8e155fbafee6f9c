use super::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

pub const MISSING_FIELDS_ERROR: &str = "Missing audio or mimeType";
pub const MISSING_KEY_ERROR: &str = "Server configuration error: Missing API Key";

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RelayRequest {
    /// Base64-encoded audio payload
    #[serde(default)]
    pub audio: Option<String>,

    /// MIME type the client recorded with (e.g. "audio/webm")
    #[serde(rename = "mimeType", default)]
    pub mime_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /
/// Forward one transcription request upstream with the server-held credential
pub async fn relay(
    State(state): State<AppState>,
    payload: Result<Json<RelayRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            // Non-JSON or undecodable body is a request-shape failure.
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    // Empty strings count as missing, same as absent fields.
    let (audio, mime_type) = match (non_empty(request.audio), non_empty(request.mime_type)) {
        (Some(audio), Some(mime_type)) => (audio, mime_type),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: MISSING_FIELDS_ERROR.to_string(),
                }),
            )
                .into_response();
        }
    };

    let upstream = match &state.upstream {
        Some(upstream) => upstream,
        None => {
            error!("Relay request received but no upstream credential is configured");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: MISSING_KEY_ERROR.to_string(),
                }),
            )
                .into_response();
        }
    };

    info!(
        "Relaying transcription request ({}, {} base64 chars)",
        mime_type,
        audio.len()
    );

    match upstream.generate(&audio, &mime_type).await {
        // Pass-through: the upstream body goes back verbatim, even when it
        // encodes an upstream-side error.
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            error!("Upstream forward failed: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Any method other than POST/OPTIONS on the relay route
pub async fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response()
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
