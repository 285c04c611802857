//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub credentials: CredentialsConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Reddit script-app credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// OAuth client ID of the script app.
    #[serde(default)]
    pub client_id: String,

    /// OAuth client secret of the script app.
    #[serde(default)]
    pub client_secret: String,

    /// Reddit account username.
    #[serde(default)]
    pub username: String,

    /// Reddit account password.
    #[serde(default)]
    pub password: String,

    /// Application identifier sent as the user agent.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Search options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Directory that receives one log folder per run.
    #[serde(default = "default_log_directory")]
    pub log_directory: PathBuf,

    /// Base delay between listing page fetches, in milliseconds.
    #[serde(default = "default_page_delay_ms")]
    pub page_delay_ms: u64,

    /// Whether to print a line for every media post found.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            log_directory: default_log_directory(),
            page_delay_ms: default_page_delay_ms(),
            show_progress: true,
        }
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            username: String::new(),
            password: String::new(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    "newApp".to_string()
}

fn default_log_directory() -> PathBuf {
    PathBuf::from("LOG_FILES")
}

fn default_page_delay_ms() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_minimal_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[credentials]
client_id = "id"
client_secret = "secret"
username = "someone"
password = "hunter2"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.credentials.client_id, "id");
        assert_eq!(config.credentials.user_agent, "newApp");
        assert_eq!(config.options.log_directory, PathBuf::from("LOG_FILES"));
        assert_eq!(config.options.page_delay_ms, 1000);
        assert!(config.options.show_progress);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
