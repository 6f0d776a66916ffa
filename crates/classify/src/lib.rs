//! Provider and failure classification for the bypass workflow.
//!
//! Two pure classifiers: one maps a resource URL onto its hosting
//! provider, the other maps a raw executor failure string onto a
//! user-facing category with remediation text. No I/O, no state — both
//! are total functions over arbitrary input strings.

mod failure;
mod provider;

pub use failure::FailureKind;
pub use provider::{Provider, gdrive_file_id};
