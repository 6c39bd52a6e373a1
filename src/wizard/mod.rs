//! Wizard system — first-launch setup flow.
//!
//! The wizard walks a new user through an ordered sequence of phases,
//! collecting selections (language, voice, personality, account) along
//! the way. Each phase can gate forward movement on a required
//! selection and can run side effects when entered or left. Selections
//! persist across restarts, so a half-finished setup resumes where it
//! stopped.

pub mod controller;
pub mod routes;
pub mod state;

pub use controller::{StepOutcome, WizardController, WizardStatus};
pub use routes::{SetupRouteState, setup_routes};
pub use state::WizardState;
