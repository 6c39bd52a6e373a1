//! `SelectionStore` trait — durable key-value persistence for wizard
//! selections.
//!
//! Every selection the user makes is written through here so a killed
//! or restarted app resumes where it left off. Keys are flat strings,
//! values are flat strings; structured data (the wizard state blob)
//! is stored as JSON under a reserved key.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::StoreError;

/// Well-known selection keys.
pub mod selection_keys {
    /// Selected language code (e.g. `"fr"`, `"pt-BR"`).
    pub const LANGUAGE: &str = "language";
    /// Stable identifier of the chosen voice.
    pub const VOICE: &str = "voice";
    /// Human-readable name of the chosen voice.
    pub const VOICE_NAME: &str = "voice_name";
    /// BCP-47 tag of the chosen voice.
    pub const VOICE_LANG: &str = "voice_lang";
    /// Selected persona id.
    pub const PERSONALITY: &str = "personality";
    /// Email entered on the account phase.
    pub const ACCOUNT_EMAIL: &str = "account_email";
    /// Verification method chosen on the verify phase.
    pub const VERIFY_METHOD: &str = "verify_method";
    /// Free-text goals captured on the goals phase.
    pub const GOALS_TEXT: &str = "goals_text";
    /// Reserved: serialized `WizardState` JSON for resume. Not a user
    /// selection; cleared along with everything else on restart.
    pub const WIZARD_STATE: &str = "wizard_state";
}

/// Backend-agnostic store for wizard selections.
#[async_trait]
pub trait SelectionStore: Send + Sync {
    /// Upsert a value. Last write wins.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Read a value. An absent key is `None`, never an error.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Delete a single key. Deleting an absent key is a no-op.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Wipe all entries. Only called on explicit wizard restart.
    async fn clear(&self) -> Result<(), StoreError>;

    /// Read-only dump of all entries, for status surfaces and resume.
    async fn snapshot(&self) -> Result<BTreeMap<String, String>, StoreError>;
}
