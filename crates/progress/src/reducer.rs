//! Pure fold of executor progress events into a single coherent view.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::stage::{Stage, StageStatus};
use crate::telemetry::DownloadTelemetry;

/// One progress event from the executor's stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent {
    pub stage: Stage,
    /// Percent complete within the stage; clamped to [0, 100] on fold.
    pub percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<DownloadTelemetry>,
}

/// Serializable view-state for the progress display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub stage: Stage,
    pub stage_percent: f64,
    pub overall_percent: f64,
    /// Status per stage, in pipeline order.
    pub statuses: [StageStatus; Stage::COUNT],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<DownloadTelemetry>,
}

/// Folds the executor's progress event stream into per-stage statuses and
/// one overall percentage.
///
/// The transport may duplicate or reorder events. Any event whose stage
/// index is below the current one is discarded, so overall progress never
/// regresses as long as `(stage, percent)` pairs are non-decreasing in
/// the natural stage order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReducer {
    stage: Stage,
    stage_percent: f64,
    telemetry: Option<DownloadTelemetry>,
}

impl ProgressReducer {
    /// A reducer positioned at the start of the pipeline.
    pub fn new() -> Self {
        Self {
            stage: Stage::Download,
            stage_percent: 0.0,
            telemetry: None,
        }
    }

    /// Applies one event. Returns `false`, leaving all state untouched,
    /// for stale events from an earlier stage.
    pub fn apply(&mut self, event: &ProgressEvent) -> bool {
        if event.stage.index() < self.stage.index() {
            return false;
        }
        self.stage = event.stage;
        self.stage_percent = event.percent.clamp(0.0, 100.0);
        // Telemetry is only meaningful while downloading.
        self.telemetry = if event.stage == Stage::Download {
            event.telemetry
        } else {
            None
        };
        true
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn stage_percent(&self) -> f64 {
        self.stage_percent
    }

    pub fn telemetry(&self) -> Option<DownloadTelemetry> {
        self.telemetry
    }

    /// Overall progress across the pipeline, each stage weighted 1/6,
    /// capped at 100.
    pub fn overall_percent(&self) -> f64 {
        let count = Stage::COUNT as f64;
        let base = self.stage.index() as f64 / count * 100.0;
        let within = self.stage_percent / 100.0 * (100.0 / count);
        (base + within).min(100.0)
    }

    /// Status of `stage` relative to the current pipeline position.
    pub fn status_of(&self, stage: Stage) -> StageStatus {
        match stage.index().cmp(&self.stage.index()) {
            Ordering::Less => StageStatus::Completed,
            Ordering::Equal => StageStatus::Active,
            Ordering::Greater => StageStatus::Pending,
        }
    }

    /// Current view-state for the UI layer.
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            stage: self.stage,
            stage_percent: self.stage_percent,
            overall_percent: self.overall_percent(),
            statuses: Stage::ALL.map(|s| self.status_of(s)),
            telemetry: self.telemetry,
        }
    }
}

impl Default for ProgressReducer {
    fn default() -> Self {
        Self::new()
    }
}
