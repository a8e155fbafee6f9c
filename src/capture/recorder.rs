use tokio::sync::mpsc;
use tracing::{info, warn};

use super::backend::CaptureBackend;
use super::session::{AudioBlob, CaptureSession, SessionId};
use crate::error::ClientError;

/// Drives one capture backend and enforces the single-active-session rule.
///
/// At most one `CaptureSession` is active at a time. Starting while active
/// is not a defined transition: callers must disable their start control
/// during recording, and `start` errors if reached anyway.
pub struct Recorder {
    backend: Box<dyn CaptureBackend>,
    active: Option<(CaptureSession, mpsc::Receiver<Vec<u8>>)>,
}

impl Recorder {
    pub fn new(backend: Box<dyn CaptureBackend>) -> Self {
        Self {
            backend,
            active: None,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the active session, if any
    pub fn current_session(&self) -> Option<SessionId> {
        self.active.as_ref().map(|(session, _)| session.id())
    }

    /// Begin a new capture session
    pub async fn start(&mut self) -> Result<SessionId, ClientError> {
        if self.active.is_some() {
            return Err(ClientError::AlreadyRecording);
        }

        let rx = self.backend.start().await?;
        let session = CaptureSession::new(self.backend.mime_type());
        let id = session.id();

        info!("Capture session {} started ({})", id, self.backend.name());

        self.active = Some((session, rx));
        Ok(id)
    }

    /// Stop the active session and finalize its fragments into one blob.
    ///
    /// No-op (`Ok(None)`) when nothing is recording.
    pub async fn stop(&mut self) -> Result<Option<(SessionId, AudioBlob)>, ClientError> {
        let Some((mut session, mut rx)) = self.active.take() else {
            warn!("stop() called with no active capture session");
            return Ok(None);
        };

        // Release the device first so the fragment channel closes.
        self.backend.stop().await?;

        while let Some(chunk) = rx.recv().await {
            session.push_chunk(chunk);
        }

        let (id, blob) = session.finalize();
        info!(
            "Capture session {} finalized: {} bytes ({})",
            id,
            blob.data.len(),
            blob.mime_type
        );

        Ok(Some((id, blob)))
    }
}
