//! Configuration handling for the TUI

use crate::state::forms::ValidationMode;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default tracing filter when neither RUST_LOG nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "formbind_tui=info";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// File to append logs to; falls back to the data dir when unset
    pub log_file: Option<PathBuf>,
    /// tracing-subscriber filter directive
    pub log_filter: Option<String>,
    /// When rules run before the first submit
    pub validation_mode: Option<ValidationMode>,
    /// When rules run after the first submit
    pub revalidate_mode: Option<ValidationMode>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "formbind", "formbind-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Default log file under the platform's local data dir
    fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "formbind", "formbind-tui")
            .map(|dirs| dirs.data_local_dir().join("formbind-tui.log"))
    }

    /// Where logs go; `None` only when the platform has no home dir
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(Self::default_log_path)
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn validation_mode(&self) -> ValidationMode {
        self.validation_mode.unwrap_or_default()
    }

    pub fn revalidate_mode(&self) -> ValidationMode {
        self.revalidate_mode.unwrap_or_default()
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.log_file.is_none());
        assert!(config.log_filter.is_none());
        assert_eq!(config.validation_mode(), ValidationMode::OnChange);
        assert_eq!(config.revalidate_mode(), ValidationMode::OnChange);
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_log_path_prefers_configured_file() {
        let config = TuiConfig {
            log_file: Some(PathBuf::from("/tmp/formbind.log")),
            ..Default::default()
        };
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/formbind.log")));
    }

    #[test]
    fn test_log_path_defaults_to_data_dir() {
        let config = TuiConfig::default();
        assert_eq!(config.log_path(), TuiConfig::default_log_path());
        if let Some(path) = config.log_path() {
            assert!(path.ends_with("formbind-tui.log"));
        }
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            log_file: Some(PathBuf::from("/tmp/formbind.log")),
            log_filter: Some("formbind_tui=debug".to_string()),
            validation_mode: Some(ValidationMode::OnBlur),
            revalidate_mode: Some(ValidationMode::All),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.log_file, Some(PathBuf::from("/tmp/formbind.log")));
        assert_eq!(parsed.log_filter(), "formbind_tui=debug");
        assert_eq!(parsed.validation_mode(), ValidationMode::OnBlur);
        assert_eq!(parsed.revalidate_mode(), ValidationMode::All);
    }

    #[test]
    fn test_modes_use_camel_case() {
        let json = r#"{"validation_mode": "onTouched", "revalidate_mode": "onSubmit"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.validation_mode(), ValidationMode::OnTouched);
        assert_eq!(parsed.revalidate_mode(), ValidationMode::OnSubmit);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let json = r#"{"validation_mode": "sometimes"}"#;
        assert!(serde_json::from_str::<TuiConfig>(json).is_err());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.validation_mode.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"log_filter": "warn", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.log_filter(), "warn");
    }
}
