//! The external executor seam.

use std::future::Future;
use std::pin::Pin;

use tokio::sync::mpsc;

use bypasshub_progress::ProgressEvent;

use crate::types::{BypassOutcome, BypassTarget};

/// Raw failure reported by the external executor.
///
/// Kept as the raw string: the workflow classifies it into a
/// [`FailureKind`](bypasshub_classify::FailureKind) and preserves the raw
/// text for diagnostics.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ExecutorError(pub String);

/// Abstract handle to the process that performs the actual download,
/// extraction, and file placement.
///
/// The embedding app implements this on top of its IPC to the executor.
/// Using a trait keeps the orchestrator decoupled and testable with
/// mocks.
pub trait BypassExecutor: Send + Sync {
    /// Runs the full multi-stage bypass for `target`. Long-running; the
    /// orchestrator keeps exactly one call outstanding at a time.
    fn apply(
        &self,
        target: &BypassTarget,
    ) -> Pin<Box<dyn Future<Output = Result<BypassOutcome, ExecutorError>> + Send + '_>>;

    /// Returns the progress event stream scoped to the next [`apply`]
    /// call. The stream is not target-addressed; the orchestrator tears
    /// it down on every terminal transition.
    ///
    /// [`apply`]: BypassExecutor::apply
    fn progress_events(&self) -> mpsc::Receiver<ProgressEvent>;
}
