//! Phase registry — the ordered phase sequence, single source of truth
//! for wizard order.
//!
//! Everything that renders or walks the flow (controller, stepper,
//! status routes) reads this registry; no phase list is duplicated
//! anywhere else. A phase's index is its position in the registry.

use std::collections::HashSet;

use crate::error::RegistryError;
use crate::store::selection_keys;

use super::descriptor::{EnterAction, ExitAction, Gate, PhaseDescriptor, PhaseId};

/// Ordered, validated sequence of phase descriptors.
///
/// Never empty: both constructors guarantee at least one phase. The
/// last phase is the terminal one.
#[derive(Debug, Clone)]
pub struct PhaseRegistry {
    phases: Vec<PhaseDescriptor>,
}

impl PhaseRegistry {
    /// The standard nine-phase first-run sequence.
    pub fn standard() -> Self {
        use PhaseId::*;
        Self {
            phases: vec![
                PhaseDescriptor::new(Init, "Welcome", Gate::Always),
                PhaseDescriptor::new(
                    Language,
                    "Choose your language",
                    Gate::Requires(selection_keys::LANGUAGE),
                ),
                PhaseDescriptor::new(Voice, "Choose a voice", Gate::Requires(selection_keys::VOICE))
                    .entering(EnterAction::LoadVoices),
                PhaseDescriptor::new(
                    Personality,
                    "Pick a personality",
                    Gate::Requires(selection_keys::PERSONALITY),
                ),
                PhaseDescriptor::new(
                    Account,
                    "Create your account",
                    Gate::Requires(selection_keys::ACCOUNT_EMAIL),
                ),
                PhaseDescriptor::new(
                    Verify,
                    "Verify it's you",
                    Gate::Requires(selection_keys::VERIFY_METHOD),
                )
                .skippable(),
                PhaseDescriptor::new(Sync, "Connect your life", Gate::Always).skippable(),
                PhaseDescriptor::new(Goals, "Your goals", Gate::Always)
                    .skippable()
                    .leaving(ExitAction::PushGoals),
                PhaseDescriptor::new(Launch, "Ready to launch", Gate::Always)
                    .entering(EnterAction::MarkComplete),
            ],
        }
    }

    /// Build a custom sequence (tests, product forks).
    ///
    /// Fails on an empty sequence or a repeated phase id. These are
    /// the only errors that propagate at startup; once constructed,
    /// the registry cannot fail the wizard.
    pub fn new(phases: Vec<PhaseDescriptor>) -> Result<Self, RegistryError> {
        if phases.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut seen = HashSet::new();
        for phase in &phases {
            if !seen.insert(phase.id) {
                return Err(RegistryError::DuplicatePhase {
                    id: phase.id.to_string(),
                });
            }
        }
        Ok(Self { phases })
    }

    /// Descriptor at `index`.
    ///
    /// `OutOfRange` here means the caller's index and this registry
    /// disagree; with indices obtained from the wizard itself that
    /// never happens.
    pub fn get(&self, index: usize) -> Result<&PhaseDescriptor, RegistryError> {
        self.phases.get(index).ok_or(RegistryError::OutOfRange {
            index,
            count: self.phases.len(),
        })
    }

    /// Number of phases. Always at least 1.
    pub fn count(&self) -> usize {
        self.phases.len()
    }

    /// Index of the terminal phase.
    pub fn last_index(&self) -> usize {
        self.phases.len() - 1
    }

    /// Position of a phase id in the sequence, if present.
    pub fn index_of(&self, id: PhaseId) -> Option<usize> {
        self.phases.iter().position(|p| p.id == id)
    }

    /// Iterate the sequence in order.
    pub fn iter(&self) -> impl Iterator<Item = &PhaseDescriptor> {
        self.phases.iter()
    }
}

impl Default for PhaseRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
