//! Phase descriptors — the data that defines one step of the wizard.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The phases of the first-run setup flow.
///
/// Steady-state order: Init → Language → Voice → Personality → Account →
/// Verify → Sync → Goals → Launch. The order itself lives in the
/// registry; this enum only names the steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseId {
    Init,
    Language,
    Voice,
    Personality,
    Account,
    Verify,
    Sync,
    Goals,
    Launch,
}

impl PhaseId {
    /// Stable string form, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Language => "language",
            Self::Voice => "voice",
            Self::Personality => "personality",
            Self::Account => "account",
            Self::Verify => "verify",
            Self::Sync => "sync",
            Self::Goals => "goals",
            Self::Launch => "launch",
        }
    }
}

impl std::fmt::Display for PhaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validity rule for leaving a phase forward.
///
/// Gates are data, not closures, so a phase sequence can be inspected
/// and rendered without running anything. The controller evaluates
/// them against the in-session selection map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Forward movement is always allowed.
    Always,
    /// Forward movement requires a non-empty selection under this key.
    Requires(&'static str),
}

impl Gate {
    /// The selection key still missing, if the gate refuses to open.
    ///
    /// A present-but-blank value does not satisfy the gate; the phase
    /// is only complete once a real choice was made.
    pub fn missing(&self, selections: &BTreeMap<String, String>) -> Option<&'static str> {
        match self {
            Gate::Always => None,
            Gate::Requires(key) => match selections.get(*key) {
                Some(value) if !value.trim().is_empty() => None,
                _ => Some(key),
            },
        }
    }
}

/// Side effect to run when the wizard lands on a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterAction {
    /// Fetch the voice list for the selected language and cache it.
    LoadVoices,
    /// Record setup completion on the terminal phase.
    MarkComplete,
}

/// Side effect to run when the wizard leaves a phase forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitAction {
    /// Push the captured goals to the backend, fire-and-forget.
    PushGoals,
}

/// One step of the wizard: identity, validity rule, and hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseDescriptor {
    pub id: PhaseId,
    /// Short human title for stepper and status surfaces.
    pub title: &'static str,
    pub gate: Gate,
    /// Whether `skip()` may bypass the gate on this phase.
    pub skippable: bool,
    pub on_enter: Option<EnterAction>,
    pub on_exit: Option<ExitAction>,
}

impl PhaseDescriptor {
    /// A plain phase: gated as given, not skippable, no hooks.
    pub const fn new(id: PhaseId, title: &'static str, gate: Gate) -> Self {
        Self {
            id,
            title,
            gate,
            skippable: false,
            on_enter: None,
            on_exit: None,
        }
    }

    pub const fn skippable(mut self) -> Self {
        self.skippable = true;
        self
    }

    pub const fn entering(mut self, action: EnterAction) -> Self {
        self.on_enter = Some(action);
        self
    }

    pub const fn leaving(mut self, action: ExitAction) -> Self {
        self.on_exit = Some(action);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde() {
        use PhaseId::*;
        let phases = [
            Init,
            Language,
            Voice,
            Personality,
            Account,
            Verify,
            Sync,
            Goals,
            Launch,
        ];
        for phase in phases {
            let display = format!("{phase}");
            let json = serde_json::to_string(&phase).unwrap();
            // JSON wraps in quotes
            assert_eq!(
                format!("\"{display}\""),
                json,
                "Display and serde should match for {phase:?}"
            );
        }
    }

    #[test]
    fn always_gate_never_blocks() {
        let selections = BTreeMap::new();
        assert_eq!(Gate::Always.missing(&selections), None);
    }

    #[test]
    fn requires_gate_blocks_until_selected() {
        let gate = Gate::Requires("language");
        let mut selections = BTreeMap::new();

        assert_eq!(gate.missing(&selections), Some("language"));

        selections.insert("language".to_string(), "fr".to_string());
        assert_eq!(gate.missing(&selections), None);
    }

    #[test]
    fn blank_selection_does_not_satisfy_gate() {
        let gate = Gate::Requires("voice");
        let mut selections = BTreeMap::new();
        selections.insert("voice".to_string(), "   ".to_string());
        assert_eq!(gate.missing(&selections), Some("voice"));
    }

    #[test]
    fn descriptor_builders_compose() {
        let phase = PhaseDescriptor::new(PhaseId::Goals, "Your goals", Gate::Always)
            .skippable()
            .leaving(ExitAction::PushGoals);

        assert_eq!(phase.id, PhaseId::Goals);
        assert!(phase.skippable);
        assert_eq!(phase.on_exit, Some(ExitAction::PushGoals));
        assert_eq!(phase.on_enter, None);
    }
}
