//! Error types for the setup wizard.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),

    #[error("Voice error: {0}")]
    Voice(#[from] VoiceError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Phase registry errors.
///
/// Construction variants surface when a custom phase sequence is
/// malformed and are fatal at startup. `OutOfRange` at runtime means
/// the wizard index and the registry disagree, which a correctly
/// constructed registry never produces.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Phase index {index} out of range (registry has {count} phases)")]
    OutOfRange { index: usize, count: usize },

    #[error("Phase registry must contain at least one phase")]
    Empty,

    #[error("Duplicate phase {id} in registry")]
    DuplicatePhase { id: String },
}

/// Selection store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to open store: {0}")]
    Open(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Goal sync errors. Confined to the detached push task; the wizard
/// flow logs these and keeps moving.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Goal push request failed: {reason}")]
    Request { reason: String },

    #[error("Goal push rejected with status {status}")]
    Status { status: u16 },
}

/// Voice provider errors.
#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    #[error("Voice provider failed: {0}")]
    Provider(String),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
