//! WizardController — drives the phase sequence: gating, hooks,
//! selection capture, and persistence.
//!
//! Everything a user can fix from the screen comes back as a
//! `StepOutcome`, never an `Err`. Store and sync failures degrade to
//! warnings; the flow keeps moving on in-memory state.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::languages;
use crate::catalog::voices::{VoiceInfo, VoiceProvider};
use crate::phase::{EnterAction, ExitAction, PhaseDescriptor, PhaseId, PhaseRegistry};
use crate::store::{SelectionStore, selection_keys};
use crate::sync::{GoalSync, GoalUpdate, spawn_push};

use super::state::WizardState;

/// Result of a navigation attempt.
///
/// User-correctable conditions are outcomes, not errors: the caller
/// renders them and the user fixes them on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The wizard moved to a new phase.
    Moved { from: PhaseId, to: PhaseId },
    /// The current phase's gate wants this selection first.
    Blocked {
        phase: PhaseId,
        missing: &'static str,
    },
    /// Already on the terminal phase; nothing to advance into.
    AtTerminal,
    /// Already on the first phase; nothing to retreat into.
    AtStart,
    /// `skip()` on a phase that is not skippable.
    NotSkippable { phase: PhaseId },
}

/// Setup status returned by the REST endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct WizardStatus {
    pub completed: bool,
    pub phase: PhaseId,
    pub phase_title: &'static str,
    pub phase_index: usize,
    pub phase_count: usize,
    pub selections: BTreeMap<String, String>,
}

/// Coordinates the setup flow over its collaborators: the phase
/// registry, the selection store, the voice source, and the optional
/// goal sync.
pub struct WizardController {
    registry: Arc<PhaseRegistry>,
    store: Arc<dyn SelectionStore>,
    voices: Arc<dyn VoiceProvider>,
    goal_sync: Option<Arc<dyn GoalSync>>,
    state: WizardState,
    /// Filled by the voice phase's enter action.
    available_voices: Vec<VoiceInfo>,
}

impl WizardController {
    /// Start a fresh session at the first phase.
    pub async fn new(
        registry: Arc<PhaseRegistry>,
        store: Arc<dyn SelectionStore>,
        voices: Arc<dyn VoiceProvider>,
        goal_sync: Option<Arc<dyn GoalSync>>,
    ) -> Self {
        let mut controller = Self {
            registry,
            store,
            voices,
            goal_sync,
            state: WizardState::new(),
            available_voices: Vec::new(),
        };
        info!(session = %controller.state.session_id, "Wizard started");
        controller.enter_current_phase().await;
        controller.persist_state().await;
        controller
    }

    /// Resume from persisted state, or start fresh when there is none.
    ///
    /// A stored index beyond the registry (the sequence shrank between
    /// runs) clamps to the terminal phase. Unreadable state falls back
    /// to a fresh session.
    pub async fn resume(
        registry: Arc<PhaseRegistry>,
        store: Arc<dyn SelectionStore>,
        voices: Arc<dyn VoiceProvider>,
        goal_sync: Option<Arc<dyn GoalSync>>,
    ) -> Self {
        let stored = match store.get(selection_keys::WIZARD_STATE).await {
            Ok(Some(json)) => match serde_json::from_str::<WizardState>(&json) {
                Ok(state) => Some(state),
                Err(e) => {
                    warn!(error = %e, "Stored wizard state unreadable; starting fresh");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read stored wizard state; starting fresh");
                None
            }
        };

        let Some(mut state) = stored else {
            return Self::new(registry, store, voices, goal_sync).await;
        };

        let last = registry.last_index();
        if state.current_index > last {
            warn!(
                index = state.current_index,
                last, "Stored phase index beyond registry; clamping to terminal"
            );
            state.current_index = last;
        }

        let mut controller = Self {
            registry,
            store,
            voices,
            goal_sync,
            state,
            available_voices: Vec::new(),
        };
        info!(
            session = %controller.state.session_id,
            phase = %controller.current_phase().id,
            "Wizard resumed"
        );
        // Repopulate phase-scoped caches (the voice list).
        controller.enter_current_phase().await;
        controller
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Move forward one phase if the current gate allows it.
    pub async fn advance(&mut self) -> StepOutcome {
        if self.at_terminal() {
            debug!(phase = %self.current_phase().id, "Advance ignored at terminal phase");
            return StepOutcome::AtTerminal;
        }

        let current = *self.phase_at(self.state.current_index);
        if let Some(missing) = current.gate.missing(&self.state.selections) {
            info!(phase = %current.id, missing, "Advance blocked; selection required");
            return StepOutcome::Blocked {
                phase: current.id,
                missing,
            };
        }

        self.step_forward(current).await
    }

    /// Move forward one phase without the gate check. Allowed only on
    /// phases marked skippable; hooks still run.
    pub async fn skip(&mut self) -> StepOutcome {
        if self.at_terminal() {
            debug!(phase = %self.current_phase().id, "Skip ignored at terminal phase");
            return StepOutcome::AtTerminal;
        }

        let current = *self.phase_at(self.state.current_index);
        if !current.skippable {
            info!(phase = %current.id, "Skip refused; phase is not skippable");
            return StepOutcome::NotSkippable { phase: current.id };
        }

        self.step_forward(current).await
    }

    /// Move back one phase. No gating, no hooks; selections stay put.
    pub async fn retreat(&mut self) -> StepOutcome {
        if self.state.current_index == 0 {
            debug!("Retreat ignored at first phase");
            return StepOutcome::AtStart;
        }

        let from = self.phase_at(self.state.current_index).id;
        self.state.current_index -= 1;
        let to = self.phase_at(self.state.current_index).id;

        info!(from = %from, to = %to, "Phase retreated");
        self.persist_state().await;
        StepOutcome::Moved { from, to }
    }

    /// Shared forward movement: exit hook, move, enter hook, persist.
    async fn step_forward(&mut self, from: PhaseDescriptor) -> StepOutcome {
        if let Some(action) = from.on_exit {
            self.run_exit_action(from.id, action).await;
        }

        self.state.current_index += 1;
        let to = *self.phase_at(self.state.current_index);

        info!(from = %from.id, to = %to.id, "Phase advanced");

        if let Some(action) = to.on_enter {
            self.run_enter_action(to.id, action).await;
        }

        self.persist_state().await;
        StepOutcome::Moved {
            from: from.id,
            to: to.id,
        }
    }

    // ── Selections ──────────────────────────────────────────────────

    /// Record a selection. Does not move the wizard.
    ///
    /// The in-session map is authoritative; the store write is
    /// best-effort, so a broken disk never blocks the flow.
    pub async fn select(&mut self, key: &str, value: &str) {
        self.state.record(key, value);
        if let Err(e) = self.store.set(key, value).await {
            warn!(key, error = %e, "Failed to persist selection; keeping it in memory");
        }
        debug!(key, "Selection recorded");
        self.persist_state().await;
    }

    /// Record a voice pick: identifier, display name, and language tag
    /// in one step.
    pub async fn select_voice(&mut self, voice: &VoiceInfo) {
        self.select(selection_keys::VOICE, &voice.id).await;
        self.select(selection_keys::VOICE_NAME, &voice.name).await;
        self.select(selection_keys::VOICE_LANG, &voice.language_tag)
            .await;
    }

    // ── Inspection ──────────────────────────────────────────────────

    /// Whether the current gate would let `advance()` move.
    pub fn can_advance(&self) -> bool {
        if self.at_terminal() {
            return false;
        }
        let current = self.phase_at(self.state.current_index);
        current.gate.missing(&self.state.selections).is_none()
    }

    /// Descriptor of the phase the wizard is on.
    pub fn current_phase(&self) -> &PhaseDescriptor {
        self.phase_at(self.state.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn phase_count(&self) -> usize {
        self.registry.count()
    }

    pub fn at_terminal(&self) -> bool {
        self.state.current_index == self.registry.last_index()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn selection(&self, key: &str) -> Option<&str> {
        self.state.selection(key)
    }

    pub fn selections(&self) -> &BTreeMap<String, String> {
        &self.state.selections
    }

    /// Voices loaded when the voice phase was entered. Empty before
    /// that, and after a restart.
    pub fn available_voices(&self) -> &[VoiceInfo] {
        &self.available_voices
    }

    pub fn registry(&self) -> &PhaseRegistry {
        &self.registry
    }

    /// Snapshot for the REST status endpoint.
    pub fn status(&self) -> WizardStatus {
        let current = self.phase_at(self.state.current_index);
        WizardStatus {
            completed: self.state.is_complete(),
            phase: current.id,
            phase_title: current.title,
            phase_index: self.state.current_index,
            phase_count: self.registry.count(),
            selections: self.state.selections.clone(),
        }
    }

    // ── Lifecycle ───────────────────────────────────────────────────

    /// Wipe the store and start over with a fresh session.
    pub async fn restart(&mut self) {
        if let Err(e) = self.store.clear().await {
            warn!(error = %e, "Failed to clear selection store on restart");
        }
        self.state = WizardState::new();
        self.available_voices.clear();
        info!(session = %self.state.session_id, "Wizard restarted");
        self.enter_current_phase().await;
        self.persist_state().await;
    }

    // ── Hooks ───────────────────────────────────────────────────────

    /// Run the current phase's enter action, if it has one.
    async fn enter_current_phase(&mut self) {
        let current = *self.phase_at(self.state.current_index);
        if let Some(action) = current.on_enter {
            self.run_enter_action(current.id, action).await;
        }
    }

    async fn run_enter_action(&mut self, phase: PhaseId, action: EnterAction) {
        match action {
            EnterAction::LoadVoices => {
                let tag = languages::voice_tag_for(
                    self.state
                        .selection(selection_keys::LANGUAGE)
                        .unwrap_or("en"),
                );
                match self.voices.voices_for(tag).await {
                    Ok(voices) => {
                        info!(phase = %phase, tag, count = voices.len(), "Voices loaded");
                        self.available_voices = voices;
                        self.autoselect_voice().await;
                    }
                    Err(e) => {
                        warn!(phase = %phase, tag, error = %e, "Voice provider failed; list left empty");
                        self.available_voices.clear();
                    }
                }
            }
            EnterAction::MarkComplete => {
                if self.state.completed_at.is_none() {
                    self.state.completed_at = Some(Utc::now());
                    info!(phase = %phase, "Setup complete");
                }
            }
        }
    }

    /// Pick the first loaded voice when the current pick is missing or
    /// belongs to a language that is no longer selected. Keeps the
    /// voice phase passable whenever any voice exists.
    async fn autoselect_voice(&mut self) {
        let stale = match self.state.selection(selection_keys::VOICE) {
            Some(id) => !self.available_voices.iter().any(|v| v.id == id),
            None => true,
        };
        if !stale {
            return;
        }
        if let Some(first) = self.available_voices.first().cloned() {
            debug!(voice = %first.id, "Auto-selected first voice for language");
            self.select_voice(&first).await;
        }
    }

    async fn run_exit_action(&mut self, phase: PhaseId, action: ExitAction) {
        match action {
            ExitAction::PushGoals => {
                let Some(sync) = self.goal_sync.clone() else {
                    debug!(phase = %phase, "Goal sync disabled; skipping push");
                    return;
                };

                let goals = self
                    .state
                    .selection(selection_keys::GOALS_TEXT)
                    .unwrap_or("")
                    .trim()
                    .to_string();
                if goals.is_empty() {
                    debug!(phase = %phase, "No goals captured; nothing to push");
                    return;
                }

                let language = self
                    .state
                    .selection(selection_keys::LANGUAGE)
                    .map(str::to_string);

                // Detached: the step path never waits on the network.
                let _ = spawn_push(sync, GoalUpdate::new(goals, language));
            }
        }
    }

    // ── Persistence ─────────────────────────────────────────────────

    /// Persist the whole state blob, best-effort.
    async fn persist_state(&self) {
        let json = match serde_json::to_string(&self.state) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "Failed to serialize wizard state");
                return;
            }
        };
        if let Err(e) = self.store.set(selection_keys::WIZARD_STATE, &json).await {
            warn!(error = %e, "Failed to persist wizard state");
        }
    }

    /// Descriptor lookup for an index the controller itself maintains.
    fn phase_at(&self, index: usize) -> &PhaseDescriptor {
        self.registry
            .get(index)
            .expect("wizard index outside phase registry")
    }
}
