//! Launch error types.

/// Errors produced when launching an executable or opening a directory.
///
/// These are surfaced as notifications only — a failed launch never
/// invalidates the workflow's Succeeded state, so the user can retry or
/// pick another candidate.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("launch failed: {0}")]
    Launch(String),

    #[error("could not open directory: {0}")]
    OpenDirectory(String),

    #[error("no executable selected")]
    NoSelection,
}
