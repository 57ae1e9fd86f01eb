//! Builder configuration.
//!
//! TOML on disk, `#[serde(default)]` on every section so old config files
//! keep working as fields are added.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main builder configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project defaults
    pub project: ProjectConfig,

    /// Preview behavior
    pub preview: PreviewConfig,

    /// AI generation settings
    pub generation: GenerationConfig,

    /// Backup retention
    pub backup: BackupConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from_default_path().unwrap_or_default()
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("webforge").join("config.toml"))
    }

    /// Saves the config to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

/// Project defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Name given to newly created projects
    pub default_name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            default_name: "my-site".to_string(),
        }
    }
}

/// Preview behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Recompose the preview on every content change
    pub auto_refresh: bool,

    /// Debounce between recompositions (ms)
    pub debounce_ms: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            auto_refresh: true,
            debounce_ms: 300,
        }
    }
}

/// AI generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Model identifier passed to the provider
    pub model: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Backup retention.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupConfig {
    /// Take snapshots automatically on save
    pub enabled: bool,

    /// Maximum snapshots kept before pruning the oldest
    pub max_snapshots: usize,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_snapshots: 20,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.project.default_name, "my-site");
        assert!(config.preview.auto_refresh);
        assert_eq!(config.backup.max_snapshots, 20);
    }

    #[test]
    fn test_config_round_trip() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.generation.model, config.generation.model);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("[preview]\nauto_refresh = false\n").unwrap();
        assert!(!parsed.preview.auto_refresh);
        assert_eq!(parsed.preview.debounce_ms, 300);
        assert_eq!(parsed.project.default_name, "my-site");
    }
}
