//! External sync — best-effort goal push to the companion backend.

pub mod adapter;
pub mod http;

pub use adapter::{GoalSync, GoalUpdate, spawn_push};
pub use http::{HttpGoalSync, SyncConfig};
