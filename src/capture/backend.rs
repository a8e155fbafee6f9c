use tokio::sync::mpsc;

use crate::error::ClientError;

/// Audio capture backend trait
///
/// Implementations deliver already-encoded audio fragments (container bytes,
/// not raw samples); the recorder only accumulates and finalizes them.
/// Capture hardware, codec, and container choice all live behind this seam.
#[async_trait::async_trait]
pub trait CaptureBackend: Send + Sync {
    /// Start capturing audio
    ///
    /// Returns a channel receiver that will receive encoded fragments.
    /// Fails with `PermissionDenied` or `DeviceUnavailable` when the
    /// platform refuses or lacks a device.
    async fn start(&mut self) -> Result<mpsc::Receiver<Vec<u8>>, ClientError>;

    /// Stop capturing and release the device
    ///
    /// The fragment channel closes once the last fragment is delivered.
    async fn stop(&mut self) -> Result<(), ClientError>;

    /// Check if backend is currently capturing
    fn is_capturing(&self) -> bool;

    /// MIME type of the fragments this backend produces
    fn mime_type(&self) -> &str;

    /// Get backend name for logging
    fn name(&self) -> &str;
}
