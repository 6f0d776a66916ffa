//! In-memory notification queue.

use std::sync::Mutex;

use serde::Serialize;

use crate::sink::{NotificationSink, Severity};

/// Default display duration in milliseconds.
const DEFAULT_DURATION_MS: u64 = 4000;

/// Error display duration in milliseconds (longer for visibility).
const ERROR_DURATION_MS: u64 = 6000;

/// One queued notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u64,
    pub severity: Severity,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub duration_ms: u64,
}

/// Notification queue with monotonic ID assignment.
///
/// Interior mutability so it can be shared as `Arc<dyn NotificationSink>`
/// between the workflow and the UI layer.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    inner: Mutex<QueueInner>,
}

#[derive(Debug, Default)]
struct QueueInner {
    notifications: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a notification and returns its assigned ID.
    ///
    /// Errors get an extended duration so remediation text stays readable.
    pub fn push(&self, severity: Severity, title: &str, detail: Option<&str>) -> u64 {
        let duration_ms = match severity {
            Severity::Error => ERROR_DURATION_MS,
            _ => DEFAULT_DURATION_MS,
        };
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.notifications.push(Notification {
            id,
            severity,
            title: title.to_string(),
            detail: detail.map(str::to_string),
            duration_ms,
        });
        id
    }

    /// Removes a notification by ID. Returns `true` if found and removed.
    pub fn remove(&self, id: u64) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let len_before = inner.notifications.len();
        inner.notifications.retain(|n| n.id != id);
        inner.notifications.len() != len_before
    }

    /// Looks up a notification by ID.
    pub fn get(&self, id: u64) -> Option<Notification> {
        let inner = self.inner.lock().unwrap();
        inner.notifications.iter().find(|n| n.id == id).cloned()
    }

    /// Returns all queued notifications in insertion order (oldest first).
    pub fn snapshot(&self) -> Vec<Notification> {
        self.inner.lock().unwrap().notifications.clone()
    }

    /// Number of queued notifications.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().notifications.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().notifications.is_empty()
    }

    /// Removes all notifications.
    pub fn clear(&self) {
        self.inner.lock().unwrap().notifications.clear();
    }
}

impl NotificationSink for NotificationQueue {
    fn notify(&self, severity: Severity, title: &str, detail: Option<&str>) {
        self.push(severity, title, detail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_retrieve() {
        let q = NotificationQueue::new();
        let id = q.push(Severity::Info, "Test", None);

        let n = q.get(id).unwrap();
        assert_eq!(n.title, "Test");
        assert_eq!(n.severity, Severity::Info);
        assert!(n.detail.is_none());
    }

    #[test]
    fn ids_are_monotonic_and_order_kept() {
        let q = NotificationQueue::new();
        let id0 = q.push(Severity::Success, "first", None);
        let id1 = q.push(Severity::Error, "second", None);
        let id2 = q.push(Severity::Info, "third", None);

        assert_eq!((id0, id1, id2), (0, 1, 2));
        let titles: Vec<String> = q.snapshot().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn error_duration_is_extended() {
        let q = NotificationQueue::new();
        let ok = q.push(Severity::Success, "ok", None);
        let err = q.push(Severity::Error, "fail", None);

        assert_eq!(q.get(ok).unwrap().duration_ms, 4000);
        assert_eq!(q.get(err).unwrap().duration_ms, 6000);
    }

    #[test]
    fn remove_notification() {
        let q = NotificationQueue::new();
        let keep = q.push(Severity::Success, "keep", None);
        let drop = q.push(Severity::Warning, "drop", None);

        assert!(q.remove(drop));
        assert!(q.get(drop).is_none());
        assert!(q.get(keep).is_some());
        assert!(!q.remove(999));
    }

    #[test]
    fn sink_trait_delivers_into_queue() {
        let q = NotificationQueue::new();
        {
            let sink: &dyn NotificationSink = &q;
            sink.error_with("Bypass failed", "raw executor output");
            sink.info("Starting");
        }

        assert_eq!(q.len(), 2);
        let all = q.snapshot();
        assert_eq!(all[0].severity, Severity::Error);
        assert_eq!(all[0].detail.as_deref(), Some("raw executor output"));
        assert_eq!(all[1].severity, Severity::Info);
    }

    #[test]
    fn clear_removes_all() {
        let q = NotificationQueue::new();
        q.push(Severity::Info, "a", None);
        q.push(Severity::Info, "b", None);
        q.clear();
        assert!(q.is_empty());
    }

    #[test]
    fn shared_across_threads() {
        use std::sync::Arc;
        use std::thread;

        let q = Arc::new(NotificationQueue::new());
        let mut handles = vec![];
        for _ in 0..8 {
            let q = Arc::clone(&q);
            handles.push(thread::spawn(move || {
                for _ in 0..50 {
                    q.push(Severity::Info, "tick", None);
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(q.len(), 400);
        // IDs stayed unique.
        let mut ids: Vec<u64> = q.snapshot().into_iter().map(|n| n.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 400);
    }
}
