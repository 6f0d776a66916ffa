//! Progress model for the six-stage bypass pipeline.
//!
//! The executor runs out-of-process and reports progress as a stream of
//! `(stage, percent, telemetry)` events that may arrive duplicated or out
//! of order. [`ProgressReducer`] folds that stream into per-stage statuses
//! and one overall percentage that never regresses.

mod reducer;
mod stage;
mod telemetry;

pub use reducer::{ProgressEvent, ProgressReducer, ProgressSnapshot};
pub use stage::{Stage, StageStatus};
pub use telemetry::{DownloadTelemetry, TelemetryDisplay};
