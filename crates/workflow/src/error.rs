//! Workflow error types.

/// Errors produced by workflow state transitions and runs.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// The selected target has no bypass resource URL. Rejected before
    /// any state change.
    #[error("target has no bypass resource URL")]
    InvalidTarget,

    /// Another workflow is awaiting confirmation or running. Progress
    /// events are not target-addressed, so two live workflows would
    /// corrupt each other's view.
    #[error("another bypass workflow is already active")]
    Busy,

    /// The requested transition is not valid from the current state.
    #[error("workflow is not awaiting confirmation")]
    InvalidTransition,

    /// The run was cancelled by the user. Not a failure — handled
    /// locally, no error notification.
    #[error("cancelled")]
    Cancelled,

    /// The executor reported a failure; the payload is its raw message.
    #[error("executor failure: {0}")]
    Executor(String),
}
