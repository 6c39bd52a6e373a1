//! Companion Setup — first-launch wizard for the voice companion.

pub mod catalog;
pub mod config;
pub mod error;
pub mod phase;
pub mod store;
pub mod sync;
pub mod wizard;
