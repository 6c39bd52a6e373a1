//! Configuration types.

use std::env;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Setup service configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct SetupConfig {
    /// Where the selection store database lives.
    pub db_path: PathBuf,
    /// Port for the status API.
    pub listen_port: u16,
}

impl SetupConfig {
    /// Read configuration from `COMPANION_DB_PATH` and `COMPANION_PORT`.
    /// Both have defaults, so a bare environment works.
    pub fn from_env() -> Result<Self> {
        let db_path = env::var("COMPANION_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data/companion-setup.db"));

        let listen_port = match env::var("COMPANION_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "COMPANION_PORT".to_string(),
                message: format!("'{raw}' is not a valid port"),
            })?,
            Err(_) => 8080,
        };

        Ok(Self {
            db_path,
            listen_port,
        })
    }
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("./data/companion-setup.db"),
            listen_port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test so the env mutations stay on a single thread.
    #[test]
    fn env_parsing() {
        unsafe {
            env::remove_var("COMPANION_DB_PATH");
            env::remove_var("COMPANION_PORT");
        }
        let config = SetupConfig::from_env().unwrap();
        assert_eq!(config.db_path, PathBuf::from("./data/companion-setup.db"));
        assert_eq!(config.listen_port, 8080);

        unsafe {
            env::set_var("COMPANION_PORT", "not-a-port");
        }
        assert!(SetupConfig::from_env().is_err());

        unsafe {
            env::set_var("COMPANION_PORT", "9191");
            env::set_var("COMPANION_DB_PATH", "/tmp/setup.db");
        }
        let config = SetupConfig::from_env().unwrap();
        assert_eq!(config.listen_port, 9191);
        assert_eq!(config.db_path, PathBuf::from("/tmp/setup.db"));

        unsafe {
            env::remove_var("COMPANION_DB_PATH");
            env::remove_var("COMPANION_PORT");
        }
    }
}
