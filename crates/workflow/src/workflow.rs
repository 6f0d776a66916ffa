//! The bypass workflow orchestrator.

use std::sync::{Arc, Mutex, RwLock};

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use bypasshub_classify::FailureKind;
use bypasshub_notify::NotificationSink;
use bypasshub_progress::{ProgressEvent, ProgressReducer};

use crate::error::WorkflowError;
use crate::executor::BypassExecutor;
use crate::messages;
use crate::state::WorkflowState;
use crate::types::{BypassOutcome, BypassTarget, WorkflowEvent};

/// Capacity of the UI event channel.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Orchestrates one bypass application at a time.
///
/// Owns [`WorkflowState`] exclusively; the UI reads snapshots via
/// [`state`](Self::state) and reacts to [`WorkflowEvent`]s. At most one
/// target can be awaiting confirmation or running — progress events are
/// not target-addressed, so a second live workflow would corrupt both
/// progress views.
pub struct BypassWorkflow {
    state: Arc<RwLock<WorkflowState>>,
    notifier: Arc<dyn NotificationSink>,
    events_tx: mpsc::Sender<WorkflowEvent>,
    events_rx: Mutex<Option<mpsc::Receiver<WorkflowEvent>>>,
    /// Cancel token for the active run; replaced on every `begin`.
    cancel: Mutex<CancellationToken>,
}

impl BypassWorkflow {
    /// Creates an idle workflow reporting through `notifier`.
    pub fn new(notifier: Arc<dyn NotificationSink>) -> Self {
        let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: Arc::new(RwLock::new(WorkflowState::Idle)),
            notifier,
            events_tx,
            events_rx: Mutex::new(Some(events_rx)),
            cancel: Mutex::new(CancellationToken::new()),
        }
    }

    /// Takes the event receiver. Can only be called once.
    pub fn take_events(&self) -> Option<mpsc::Receiver<WorkflowEvent>> {
        self.events_rx.lock().unwrap().take()
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> WorkflowState {
        self.state.read().unwrap().clone()
    }

    /// Returns a cancellation token for the active run.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.lock().unwrap().clone()
    }

    /// Requests cancellation of the active run.
    ///
    /// The external process is not guaranteed to stop; the workflow stops
    /// observing it, tears down the progress subscription, and resets.
    pub fn cancel_run(&self) {
        self.cancel.lock().unwrap().cancel();
    }

    /// Moves a target into confirmation.
    ///
    /// Rejected without any state change when the target has no resource
    /// URL (one warning notification) or when another workflow is already
    /// awaiting confirmation or running.
    pub fn begin(&self, target: BypassTarget) -> Result<(), WorkflowError> {
        if target.resource_url.is_empty() {
            warn!(app_id = %target.app_id, "target has no bypass URL");
            self.notifier
                .warning("Bypass URL not available for this game");
            return Err(WorkflowError::InvalidTarget);
        }

        {
            let mut state = self.state.write().unwrap();
            if state.is_active() {
                return Err(WorkflowError::Busy);
            }
            *state = WorkflowState::AwaitingConfirmation {
                target: target.clone(),
            };
        }

        // A cancel of a previous run must not leak into this one.
        *self.cancel.lock().unwrap() = CancellationToken::new();

        let provider = target.provider();
        debug!(app_id = %target.app_id, provider = ?provider, "awaiting confirmation");
        self.emit(WorkflowEvent::ConfirmationRequested { target, provider });
        Ok(())
    }

    /// Cancels a pending confirmation. No side effects beyond returning
    /// to idle.
    pub fn cancel_confirmation(&self) -> Result<(), WorkflowError> {
        let mut state = self.state.write().unwrap();
        match &*state {
            WorkflowState::AwaitingConfirmation { .. } => {
                *state = WorkflowState::Idle;
                drop(state);
                self.emit(WorkflowEvent::Reset);
                Ok(())
            }
            _ => Err(WorkflowError::InvalidTransition),
        }
    }

    /// Dismisses a terminal result, resetting all workflow-local state.
    pub fn dismiss(&self) -> Result<(), WorkflowError> {
        let mut state = self.state.write().unwrap();
        if !state.is_terminal() {
            return Err(WorkflowError::InvalidTransition);
        }
        *state = WorkflowState::Idle;
        drop(state);
        self.emit(WorkflowEvent::Reset);
        Ok(())
    }

    /// Runs the confirmed workflow to completion.
    ///
    /// Transitions to Running, emits the provider-specific starting
    /// notifications, subscribes to the executor's progress stream, and
    /// awaits the single outstanding executor call. The subscription is
    /// torn down on every exit path before the terminal state lands, so
    /// late events can never mutate a finished workflow.
    pub async fn run(&self, executor: &dyn BypassExecutor) -> Result<BypassOutcome, WorkflowError> {
        let target = {
            let mut state = self.state.write().unwrap();
            let WorkflowState::AwaitingConfirmation { target } = &*state else {
                return Err(WorkflowError::InvalidTransition);
            };
            let target = target.clone();
            *state = WorkflowState::Running {
                target: target.clone(),
                progress: ProgressReducer::new().snapshot(),
            };
            target
        };

        let provider = target.provider();
        info!(app_id = %target.app_id, provider = ?provider, "starting bypass");
        self.notifier.info(&messages::starting(provider, &target.name));
        if provider.needs_extended_wait_warning() {
            self.notifier.warning(messages::EXTENDED_WAIT_WARNING);
        }
        self.emit(WorkflowEvent::Started { provider });

        // Subscribe before the call starts so no early event is missed.
        let events = executor.progress_events();
        let pump_cancel = CancellationToken::new();
        let pump = self.spawn_progress_pump(events, pump_cancel.clone());

        let run_cancel = self.cancel_token();
        let result = tokio::select! {
            _ = run_cancel.cancelled() => {
                pump_cancel.cancel();
                let _ = pump.await;
                *self.state.write().unwrap() = WorkflowState::Idle;
                self.emit(WorkflowEvent::Reset);
                info!(app_id = %target.app_id, "bypass cancelled");
                return Err(WorkflowError::Cancelled);
            }
            result = executor.apply(&target) => result,
        };

        // Tear down the subscription before the terminal state lands.
        pump_cancel.cancel();
        let _ = pump.await;

        match result {
            Ok(outcome) => {
                if outcome.executables.is_empty() {
                    self.notifier.warning(messages::NO_EXECUTABLES_WARNING);
                } else {
                    self.notifier.success(&messages::applied(&target.name));
                }
                info!(
                    app_id = %target.app_id,
                    executables = outcome.executables.len(),
                    dir = %outcome.install_dir,
                    "bypass applied"
                );
                *self.state.write().unwrap() = WorkflowState::Succeeded {
                    target,
                    outcome: outcome.clone(),
                };
                self.emit(WorkflowEvent::Succeeded {
                    outcome: outcome.clone(),
                });
                Ok(outcome)
            }
            Err(e) => {
                let raw = e.0;
                let kind = FailureKind::classify(&raw);
                match kind {
                    // Unknown has no canned text; the raw message is all there is.
                    FailureKind::Unknown => self.notifier.error(&raw),
                    _ => self.notifier.error_with(&kind.remediation(&raw), &raw),
                }
                error!(app_id = %target.app_id, kind = ?kind, error = %raw, "bypass failed");
                *self.state.write().unwrap() = WorkflowState::Failed {
                    target,
                    kind,
                    message: raw.clone(),
                };
                self.emit(WorkflowEvent::Failed {
                    kind,
                    message: raw.clone(),
                });
                Err(WorkflowError::Executor(raw))
            }
        }
    }

    /// Spawns the task that folds executor progress events into the
    /// Running payload and forwards snapshots to the UI.
    fn spawn_progress_pump(
        &self,
        mut events: mpsc::Receiver<ProgressEvent>,
        cancel: CancellationToken,
    ) -> tokio::task::JoinHandle<()> {
        let state = Arc::clone(&self.state);
        let events_tx = self.events_tx.clone();

        tokio::spawn(async move {
            let mut reducer = ProgressReducer::new();
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    event = events.recv() => {
                        let Some(event) = event else { break };
                        if !reducer.apply(&event) {
                            debug!(stage = event.stage.id(), "discarding stale progress event");
                            continue;
                        }
                        let snapshot = reducer.snapshot();
                        {
                            let mut state = state.write().unwrap();
                            if let WorkflowState::Running { progress, .. } = &mut *state {
                                *progress = snapshot.clone();
                            }
                        }
                        let _ = events_tx.try_send(WorkflowEvent::Progress(snapshot));
                    }
                }
            }
        })
    }

    fn emit(&self, event: WorkflowEvent) {
        // Fire-and-forget: a lagging or absent UI consumer must never
        // stall the workflow.
        let _ = self.events_tx.try_send(event);
    }
}
