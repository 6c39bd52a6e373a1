//! HTTP goal sync — pushes goals to the companion backend over REST.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::error::SyncError;

use super::adapter::{GoalSync, GoalUpdate};

/// Backend sync settings.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Base URL of the companion API.
    pub base_url: String,
    /// Bearer token minted at account creation, once there is one.
    pub auth_token: Option<SecretString>,
}

impl SyncConfig {
    /// Load from environment. Returns `None` when `COMPANION_SYNC_URL`
    /// is unset, which disables sync entirely.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("COMPANION_SYNC_URL").ok()?;

        let auth_token = std::env::var("COMPANION_SYNC_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .map(SecretString::from);

        Some(Self {
            base_url,
            auth_token,
        })
    }
}

/// `GoalSync` over the companion REST API.
///
/// `PUT {base_url}/users/goals` with a JSON `GoalUpdate` body and, when
/// configured, a bearer token.
pub struct HttpGoalSync {
    config: SyncConfig,
    client: reqwest::Client,
}

impl HttpGoalSync {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn goals_url(&self) -> String {
        format!("{}/users/goals", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl GoalSync for HttpGoalSync {
    async fn push(&self, update: &GoalUpdate) -> Result<(), SyncError> {
        let mut request = self.client.put(self.goals_url()).json(update);

        if let Some(token) = &self.config.auth_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(|e| SyncError::Request {
            reason: e.to_string(),
        })?;

        if !response.status().is_success() {
            return Err(SyncError::Status {
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}
