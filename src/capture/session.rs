use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Identifier correlating a dispatch with the capture session it answers.
///
/// UI cleanup after a network round trip only applies when the id still
/// matches the current session, so a recording started in the meantime is
/// never clobbered by a stale response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Finalized capture output: one encoded blob plus its MIME type
#[derive(Debug, Clone)]
pub struct AudioBlob {
    pub data: Vec<u8>,
    pub mime_type: String,
}

/// A single audio capture in progress
///
/// Append-only fragment buffer. `finalize` consumes the session, so
/// finalization happens at most once and a finalized session cannot be
/// appended to.
#[derive(Debug)]
pub struct CaptureSession {
    id: SessionId,
    mime_type: String,
    started_at: DateTime<Utc>,
    chunks: Vec<Vec<u8>>,
}

impl CaptureSession {
    pub fn new(mime_type: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            mime_type: mime_type.into(),
            started_at: Utc::now(),
            chunks: Vec::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Total bytes accumulated so far
    pub fn byte_len(&self) -> usize {
        self.chunks.iter().map(Vec::len).sum()
    }

    /// Append one fragment. Empty fragments are dropped.
    pub fn push_chunk(&mut self, chunk: Vec<u8>) {
        if !chunk.is_empty() {
            self.chunks.push(chunk);
        }
    }

    /// Concatenate all fragments, in arrival order, into the final blob.
    pub fn finalize(self) -> (SessionId, AudioBlob) {
        let mut data = Vec::with_capacity(self.byte_len());
        for chunk in &self.chunks {
            data.extend_from_slice(chunk);
        }

        (
            self.id,
            AudioBlob {
                data,
                mime_type: self.mime_type,
            },
        )
    }
}
