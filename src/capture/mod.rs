//! Audio capture
//!
//! This module provides the client-side capture pipeline:
//! - `CaptureBackend` - pluggable source of encoded audio fragments
//! - `CaptureSession` - append-only fragment buffer, finalized exactly once
//! - `Recorder` - start/stop driver enforcing the single-session rule
//! - `WavFileBackend` - file-based backend for the CLI path and tests

mod backend;
mod file;
mod recorder;
mod session;
mod wav;

pub use backend::CaptureBackend;
pub use file::WavFileBackend;
pub use recorder::Recorder;
pub use session::{AudioBlob, CaptureSession, SessionId};
pub use wav::encode_wav;
