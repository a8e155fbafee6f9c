use thiserror::Error;

/// Client-side failure classes.
///
/// Every variant is terminal for its request; there is no retry path. All
/// are surfaced to the user as text through the `TranscriptSink`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The platform refused microphone access.
    #[error("microphone permission denied")]
    PermissionDenied,

    /// No usable capture device or capture input exists.
    #[error("no capture device available: {0}")]
    DeviceUnavailable(String),

    /// A capture session is already active. Start controls must be disabled
    /// while recording; this variant means the guard was bypassed.
    #[error("a capture session is already active")]
    AlreadyRecording,

    /// Unset relay URL or other local misconfiguration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Non-success response or transport failure from the relay or the API.
    #[error("request failed: {0}")]
    RequestFailed(String),
}
