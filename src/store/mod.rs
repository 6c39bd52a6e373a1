//! Persistence layer — durable key-value storage for wizard selections.

pub mod libsql_backend;
pub mod memory;
pub mod migrations;
pub mod traits;

pub use libsql_backend::LibSqlSelectionStore;
pub use memory::MemorySelectionStore;
pub use traits::{SelectionStore, selection_keys};
