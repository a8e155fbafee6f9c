pub mod capture;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod upstream;

pub use capture::{
    encode_wav, AudioBlob, CaptureBackend, CaptureSession, Recorder, SessionId, WavFileBackend,
};
pub use config::Config;
pub use dispatch::{
    select_destination, ConsoleSink, Destination, Dispatcher, HttpTransport, TranscriptSink,
    Transport, NO_TRANSCRIPT_MESSAGE, RELAY_URL_PLACEHOLDER, UNCONFIGURED_RELAY_MESSAGE,
};
pub use error::ClientError;
pub use http::{create_router, AppState, MISSING_FIELDS_ERROR, MISSING_KEY_ERROR};
pub use upstream::{
    generate_url, GeminiClient, GenerateContentRequest, GenerateContentResponse,
    TranscriptionBackend, TRANSCRIBE_INSTRUCTION,
};
