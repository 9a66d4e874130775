//! User notification sink.
//!
//! Fire-and-forget toast-style notifications. The submission flow emits at
//! most one pending notice and exactly one terminal notice per attempt, and
//! dismisses the pending notice before the terminal one so it never outlives
//! the outcome. Rendering is the embedding UI's concern.

/// Fire-and-forget notification surface.
pub trait NotificationSink: Send + Sync {
    fn info(&self, message: &str);
    fn success(&self, message: &str);
    fn error(&self, message: &str);

    /// Clear any outstanding pending notice.
    fn dismiss(&self);
}

/// Sink that forwards notifications to the tracing subscriber.
///
/// Useful default for headless embedding and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn info(&self, message: &str) {
        tracing::info!(notice = "info", "{}", message);
    }

    fn success(&self, message: &str) {
        tracing::info!(notice = "success", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::warn!(notice = "error", "{}", message);
    }

    fn dismiss(&self) {}
}
