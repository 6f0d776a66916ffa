//! The workflow state machine's state.

use serde::Serialize;

use bypasshub_classify::FailureKind;
use bypasshub_progress::ProgressSnapshot;

use crate::types::{BypassOutcome, BypassTarget};

/// Authoritative workflow state. Exactly one variant is active at a time
/// — one enum instead of a set of independent boolean flags that could
/// disagree with each other.
///
/// Owned exclusively by [`BypassWorkflow`](crate::BypassWorkflow); the UI
/// layer reads snapshots and never mutates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum WorkflowState {
    /// No workflow in flight.
    Idle,
    /// A target is selected and waiting for the user to confirm.
    AwaitingConfirmation { target: BypassTarget },
    /// The executor call is outstanding; `progress` is the folded view of
    /// its event stream.
    Running {
        target: BypassTarget,
        progress: ProgressSnapshot,
    },
    /// The run completed; `outcome` carries the launch candidates.
    Succeeded {
        target: BypassTarget,
        outcome: BypassOutcome,
    },
    /// The run failed. `message` is the raw executor diagnostic, kept for
    /// detail display; `kind` selects the remediation text.
    Failed {
        target: BypassTarget,
        kind: FailureKind,
        message: String,
    },
}

impl WorkflowState {
    /// Whether a workflow currently occupies the machine (awaiting
    /// confirmation or running). New targets are rejected while `true`.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            WorkflowState::AwaitingConfirmation { .. } | WorkflowState::Running { .. }
        )
    }

    /// Whether the machine sits in a terminal result state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            WorkflowState::Succeeded { .. } | WorkflowState::Failed { .. }
        )
    }
}
