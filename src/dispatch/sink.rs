use tracing::info;

use crate::capture::SessionId;

/// Presentation seam for the dispatch pipeline.
///
/// The dispatcher never touches a UI directly; it reports through this
/// trait and the implementation decides how to render. Processing state is
/// keyed by session id: `end_processing` must only clear the indicator when
/// the id matches the session currently shown as processing, so a response
/// arriving after a newer recording started cannot disturb it.
pub trait TranscriptSink: Send {
    /// Show the processing indicator for one dispatched session.
    fn begin_processing(&mut self, id: SessionId);

    /// Clear the processing indicator, only if `id` still matches.
    fn end_processing(&mut self, id: SessionId);

    /// Render a successful transcription.
    fn show_transcript(&mut self, text: &str);

    /// Render a request or transcript failure inline.
    fn show_error(&mut self, message: &str);

    /// Modal notification for permission and configuration failures.
    fn alert(&mut self, message: &str);
}

/// Console-backed sink for the CLI path
#[derive(Debug, Default)]
pub struct ConsoleSink {
    processing: Option<SessionId>,
}

impl ConsoleSink {
    pub fn is_processing(&self) -> bool {
        self.processing.is_some()
    }
}

impl TranscriptSink for ConsoleSink {
    fn begin_processing(&mut self, id: SessionId) {
        self.processing = Some(id);
        info!("Processing session {}", id);
    }

    fn end_processing(&mut self, id: SessionId) {
        // A newer session may already be in flight; only clear our own.
        if self.processing == Some(id) {
            self.processing = None;
        }
    }

    fn show_transcript(&mut self, text: &str) {
        println!("{}", text);
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_processing_ignores_stale_session_ids() {
        let mut sink = ConsoleSink::default();
        let first = SessionId::new();
        let second = SessionId::new();

        sink.begin_processing(first);
        // A new recording starts while the first response is outstanding.
        sink.begin_processing(second);

        sink.end_processing(first);
        assert!(sink.is_processing(), "stale response must not clear state");

        sink.end_processing(second);
        assert!(!sink.is_processing());
    }
}
