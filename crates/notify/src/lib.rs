//! User-facing notifications.
//!
//! The workflow reports outcomes through a fire-and-forget
//! [`NotificationSink`]; [`NotificationQueue`] is the in-process
//! implementation the UI layer drains. Timer-based auto-dismissal is a UI
//! concern — the queue just holds entries and exposes add/remove.

mod queue;
mod sink;

pub use queue::{Notification, NotificationQueue};
pub use sink::{NotificationSink, Severity};
