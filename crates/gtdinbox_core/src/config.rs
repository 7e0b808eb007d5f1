//! Startup configuration resolved from the environment.
//!
//! # Responsibility
//! - Resolve the store file path and logging settings once at startup.
//!
//! # Invariants
//! - Unset or blank variables fall back to defaults; resolution never fails.
//! - Values are not validated here; `init_logging` rejects bad log settings.

use crate::logging::default_log_level;
use crate::store::persist::DEFAULT_STORE_FILE;
use std::path::PathBuf;

/// Overrides the store file path.
pub const STORE_FILE_ENV: &str = "GTDINBOX_FILE";
/// Overrides the rolling log directory (absolute path).
pub const LOG_DIR_ENV: &str = "GTDINBOX_LOG_DIR";
/// Overrides the log level (`trace|debug|info|warn|error`).
pub const LOG_LEVEL_ENV: &str = "GTDINBOX_LOG_LEVEL";

const DEFAULT_LOG_DIR_NAME: &str = "gtdinbox-logs";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub store_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    /// Reads settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            store_path: read(STORE_FILE_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE)),
            log_dir: read(LOG_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME)),
            log_level: read(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, LOG_DIR_ENV, LOG_LEVEL_ENV, STORE_FILE_ENV};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::default();
        assert_eq!(config.store_path, PathBuf::from("inbox.json"));
        assert!(config.log_dir.is_absolute());
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn overrides_are_trimmed_and_blank_values_ignored() {
        let vars = HashMap::from([
            (STORE_FILE_ENV, " /tmp/gtd/tasks.json ".to_string()),
            (LOG_DIR_ENV, "   ".to_string()),
            (LOG_LEVEL_ENV, "warn".to_string()),
        ]);
        let config = AppConfig::from_lookup(|key| vars.get(key).cloned());

        assert_eq!(config.store_path, PathBuf::from("/tmp/gtd/tasks.json"));
        assert_eq!(config.log_dir, AppConfig::default().log_dir);
        assert_eq!(config.log_level, "warn");
    }
}
