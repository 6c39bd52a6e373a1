//! Phase model — descriptors and the ordered registry.
//!
//! A phase is pure data: id, title, a validity gate, a skippable flag,
//! and optional enter/exit actions. The registry fixes the order. The
//! wizard controller interprets all of it; nothing here runs effects.

pub mod descriptor;
pub mod registry;

pub use descriptor::{EnterAction, ExitAction, Gate, PhaseDescriptor, PhaseId};
pub use registry::PhaseRegistry;
