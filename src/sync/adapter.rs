//! Goal sync — best-effort push of the user's goals to the backend.
//!
//! The push is fire-and-forget: it runs on a detached task, failures
//! are logged, and the wizard never waits for or reacts to the result.
//! Losing a push costs nothing locally; the goals text stays in the
//! selection store either way.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::SyncError;

/// Wire body of a goal push.
///
/// Serializes as `{"goalsText": ..., "language": ...}`, the shape the
/// backend's `PUT /users/goals` expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub goals_text: String,
    pub language: String,
}

impl GoalUpdate {
    /// Build an update; the language defaults to `"en"` when the user
    /// never picked one.
    pub fn new(goals_text: impl Into<String>, language: Option<String>) -> Self {
        Self {
            goals_text: goals_text.into(),
            language: language.unwrap_or_else(|| "en".to_string()),
        }
    }
}

/// Destination for goal pushes.
#[async_trait]
pub trait GoalSync: Send + Sync {
    async fn push(&self, update: &GoalUpdate) -> Result<(), SyncError>;
}

/// Push `update` on a detached task.
///
/// Returns the join handle so tests can await completion; production
/// callers drop it.
pub fn spawn_push(sync: Arc<dyn GoalSync>, update: GoalUpdate) -> JoinHandle<()> {
    tokio::spawn(async move {
        match sync.push(&update).await {
            Ok(()) => {
                debug!(chars = update.goals_text.len(), "Goals pushed to backend");
            }
            Err(e) => {
                warn!(error = %e, "Goal push failed; continuing without sync");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn wire_format_is_camel_case() {
        let update = GoalUpdate::new("learn rust, run a 10k", Some("en".to_string()));
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "goalsText": "learn rust, run a 10k",
                "language": "en"
            })
        );
    }

    #[test]
    fn language_defaults_to_english() {
        let update = GoalUpdate::new("ship the app", None);
        assert_eq!(update.language, "en");

        let update = GoalUpdate::new("ship the app", Some("de".to_string()));
        assert_eq!(update.language, "de");
    }

    struct RecordingSync {
        pushes: Mutex<Vec<GoalUpdate>>,
    }

    #[async_trait]
    impl GoalSync for RecordingSync {
        async fn push(&self, update: &GoalUpdate) -> Result<(), SyncError> {
            self.pushes.lock().unwrap().push(update.clone());
            Ok(())
        }
    }

    struct FailingSync;

    #[async_trait]
    impl GoalSync for FailingSync {
        async fn push(&self, _update: &GoalUpdate) -> Result<(), SyncError> {
            Err(SyncError::Status { status: 503 })
        }
    }

    #[tokio::test]
    async fn spawn_push_delivers() {
        let sync = Arc::new(RecordingSync {
            pushes: Mutex::new(vec![]),
        });
        let update = GoalUpdate::new("meditate daily", None);

        spawn_push(sync.clone(), update.clone()).await.unwrap();

        let pushes = sync.pushes.lock().unwrap();
        assert_eq!(pushes.as_slice(), &[update]);
    }

    #[tokio::test]
    async fn spawn_push_swallows_failure() {
        let sync: Arc<dyn GoalSync> = Arc::new(FailingSync);
        // The task must complete normally even though the push failed
        spawn_push(sync, GoalUpdate::new("anything", None))
            .await
            .unwrap();
    }
}
