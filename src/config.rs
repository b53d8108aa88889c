//! Application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config
//! directory (or wherever `KANBAN_SYNC_CONFIG` points) and includes:
//! - Simulated sync delays and failure policy
//! - The local identity used to sign in
//! - Log file location and filter

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::board::FailurePolicy;
use crate::error::{KanbanError, Result};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "KANBAN_SYNC_CONFIG";

const APP_NAME: &str = "kanban-sync";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Simulated GitHub sync
    #[serde(default)]
    pub sync: SyncConfig,

    /// Local sign-in identity
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging
    #[serde(default)]
    pub log: LogConfig,
}

/// Simulated sync configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Delay for a status change, in milliseconds (default: 1500)
    #[serde(default = "default_move_delay_ms")]
    pub move_delay_ms: u64,

    /// Delay for issue creation, in milliseconds (default: 1000)
    #[serde(default = "default_create_delay_ms")]
    pub create_delay_ms: u64,

    /// Delay for a board refresh, in milliseconds (default: 1000)
    #[serde(default = "default_refresh_delay_ms")]
    pub refresh_delay_ms: u64,

    /// When simulated calls fail (default: never)
    #[serde(default)]
    pub failure: FailurePolicy,
}

fn default_move_delay_ms() -> u64 {
    1500
}

fn default_create_delay_ms() -> u64 {
    1000
}

fn default_refresh_delay_ms() -> u64 {
    1000
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            move_delay_ms: default_move_delay_ms(),
            create_delay_ms: default_create_delay_ms(),
            refresh_delay_ms: default_refresh_delay_ms(),
            failure: FailurePolicy::default(),
        }
    }
}

/// Identity the local auth provider signs in as
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_email")]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,

    /// Simulated sign-in delay, in milliseconds (default: 500)
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,

    /// Sign in as soon as the app starts instead of showing the sign-in screen
    #[serde(default)]
    pub auto_login: bool,
}

fn default_email() -> String {
    "developer@example.com".to_string()
}

fn default_login_delay_ms() -> u64 {
    500
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            email: default_email(),
            display_name: None,
            profile_picture: None,
            login_delay_ms: default_login_delay_ms(),
            auto_login: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file path. Defaults to `kanban-sync.log` in the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// `tracing` filter directive, overridden by `KANBAN_SYNC_LOG`
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: default_log_filter(),
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
        .ok_or_else(|| KanbanError::Config("could not determine home directory".to_string()))
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }
        Ok(project_dirs()?.config_dir().join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            KanbanError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but make no sense
    pub fn validate(&self) -> Result<()> {
        if self.sync.failure == FailurePolicy::EveryNth(0) {
            return Err(KanbanError::Config(
                "sync.failure 'every N' needs N of at least 1".to_string(),
            ));
        }
        if self.auth.email.trim().is_empty() {
            return Err(KanbanError::Config("auth.email cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Where log output goes
    pub fn log_file(&self) -> Result<PathBuf> {
        match &self.log.file {
            Some(path) => Ok(path.clone()),
            None => Ok(project_dirs()?
                .data_local_dir()
                .join(format!("{APP_NAME}.log"))),
        }
    }

    /// Render as YAML for `config show`
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.sync.move_delay_ms, 1500);
        assert_eq!(config.sync.create_delay_ms, 1000);
        assert_eq!(config.sync.refresh_delay_ms, 1000);
        assert_eq!(config.sync.failure, FailurePolicy::Never);
        assert_eq!(config.log.filter, "info");
        assert!(!config.auth.auto_login);
    }

    #[test]
    fn test_config_partial_yaml_uses_defaults() {
        let yaml = r#"
sync:
  move_delay_ms: 10
  failure: always
auth:
  display_name: Dev
"#;
        let config: Config = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.sync.move_delay_ms, 10);
        assert_eq!(config.sync.create_delay_ms, 1000);
        assert_eq!(config.sync.failure, FailurePolicy::Always);
        assert_eq!(config.auth.email, "developer@example.com");
        assert_eq!(config.auth.display_name.as_deref(), Some("Dev"));
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.sync.failure = FailurePolicy::EveryNth(3);
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("failure: every 3"));
        let parsed: Config = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validate_rejects_every_zeroth() {
        let mut config = Config::default();
        config.sync.failure = FailurePolicy::EveryNth(0);
        assert!(matches!(config.validate(), Err(KanbanError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_blank_email() {
        let mut config = Config::default();
        config.auth.email = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
