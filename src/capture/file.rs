use std::io::Cursor;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::info;

use super::backend::CaptureBackend;
use crate::error::ClientError;

/// Fragment size for file playback
const FRAGMENT_BYTES: usize = 32 * 1024;

/// File-based capture backend
///
/// Plays a WAV file's bytes back as capture fragments, standing in for a
/// microphone. Used by the CLI transcribe path and in tests.
pub struct WavFileBackend {
    path: PathBuf,
    capturing: bool,
}

impl WavFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            capturing: false,
        }
    }
}

#[async_trait::async_trait]
impl CaptureBackend for WavFileBackend {
    async fn start(&mut self) -> Result<mpsc::Receiver<Vec<u8>>, ClientError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| ClientError::DeviceUnavailable(format!("{}: {}", self.path.display(), e)))?;

        // Validate the container before handing fragments out.
        hound::WavReader::new(Cursor::new(&bytes[..])).map_err(|e| {
            ClientError::DeviceUnavailable(format!("{}: not a WAV file: {}", self.path.display(), e))
        })?;

        info!(
            "Reading capture input from {} ({} bytes)",
            self.path.display(),
            bytes.len()
        );

        let fragments: Vec<Vec<u8>> = bytes
            .chunks(FRAGMENT_BYTES)
            .map(|chunk| chunk.to_vec())
            .collect();
        let (tx, rx) = mpsc::channel(16);

        tokio::spawn(async move {
            for fragment in fragments {
                if tx.send(fragment).await.is_err() {
                    break;
                }
            }
        });

        self.capturing = true;
        Ok(rx)
    }

    async fn stop(&mut self) -> Result<(), ClientError> {
        self.capturing = false;
        Ok(())
    }

    fn is_capturing(&self) -> bool {
        self.capturing
    }

    fn mime_type(&self) -> &str {
        "audio/wav"
    }

    fn name(&self) -> &str {
        "wav-file"
    }
}
