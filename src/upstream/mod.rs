//! Upstream transcription API client
//!
//! Typed wire shapes for the generateContent exchange plus the
//! `TranscriptionBackend` trait the relay handler forwards through.
//! Tests substitute the trait with canned implementations.

mod client;
mod types;

pub use client::{generate_url, GeminiClient, TranscriptionBackend};
pub use types::{
    GenerateContentRequest, GenerateContentResponse, InlineData, Part, TRANSCRIBE_INSTRUCTION,
};
