//! Configuration service for loading config files.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;

use super::Config;

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Load and validate configuration from `path`.
    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(config)
    }

    /// Check that the log file can be opened for appending, creating it if needed.
    pub fn check_log_writable(log: &Path) -> Result<()> {
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(log)
            .with_context(|| format!("Log file is not writable: {}", log.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_valid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("conf.json");
        fs::write(
            &path,
            r#"{"Log": "wal.log", "Addr": ":8080", "Hooks": [{"Webhook_url": "/deploy", "Events": ["push"], "Command": "echo hi"}]}"#,
        )
        .unwrap();

        let config = ConfigService::load(&path).unwrap();
        assert_eq!(config.hooks.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = ConfigService::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("conf.json");
        fs::write(&path, "{not json").unwrap();

        let err = ConfigService::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("conf.json");
        fs::write(&path, r#"{"Log": "", "Addr": ":8080"}"#).unwrap();

        let err = ConfigService::load(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_check_log_writable() {
        let dir = tempdir().unwrap();
        let log = dir.path().join("wal.log");

        ConfigService::check_log_writable(&log).unwrap();
        assert!(log.exists());

        let unwritable = dir.path().join("missing-dir").join("wal.log");
        assert!(ConfigService::check_log_writable(&unwritable).is_err());
    }
}
