//! The notification sink contract.

use serde::{Deserialize, Serialize};

/// The visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

/// Destination for user-facing notifications.
///
/// Fire-and-forget: implementations must not block and cannot report
/// delivery failure. `detail` is optional secondary text (e.g. a raw
/// diagnostic message below the primary line).
pub trait NotificationSink: Send + Sync {
    fn notify(&self, severity: Severity, title: &str, detail: Option<&str>);

    fn success(&self, title: &str) {
        self.notify(Severity::Success, title, None);
    }

    fn error(&self, title: &str) {
        self.notify(Severity::Error, title, None);
    }

    fn error_with(&self, title: &str, detail: &str) {
        self.notify(Severity::Error, title, Some(detail));
    }

    fn warning(&self, title: &str) {
        self.notify(Severity::Warning, title, None);
    }

    fn info(&self, title: &str) {
        self.notify(Severity::Info, title, None);
    }
}
