//! Client dispatch pipeline
//!
//! Turns a finalized capture blob into one transcription request:
//! base64-encode, pick a destination (direct API with a caller key, or the
//! relay endpoint), send, and render the outcome through `TranscriptSink`.
//! One request per stop-recording event; every failure is terminal.

mod dispatcher;
mod sink;
mod transport;

pub use dispatcher::{
    select_destination, Destination, Dispatcher, NO_TRANSCRIPT_MESSAGE, RELAY_URL_PLACEHOLDER,
    UNCONFIGURED_RELAY_MESSAGE,
};
pub use sink::{ConsoleSink, TranscriptSink};
pub use transport::{HttpTransport, Transport};
