//! Logging configuration from environment variables

use std::path::PathBuf;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "trade_widget=info,warn";

/// File name prefix of the rolling log
pub const LOG_FILE_NAME: &str = "buy-widget.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Directory holding the rotated log files
    pub log_dir: PathBuf,
    /// Filter directive, e.g. `trade_widget=debug,info`
    pub log_level: String,
    /// Mirror log lines to stderr
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            stderr: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_dir: lookup("WIDGET_LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_level),
            stderr: lookup("WIDGET_LOG_STDERR").map(|v| v == "1").unwrap_or(false),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LogConfig::from_lookup(lookup(&[]));
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.log_file(), PathBuf::from("logs").join("buy-widget.log"));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_overrides() {
        let config = LogConfig::from_lookup(lookup(&[
            ("WIDGET_LOG_DIR", "/tmp/widget"),
            ("RUST_LOG", "trade_widget=debug"),
            ("WIDGET_LOG_STDERR", "1"),
        ]));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/widget"));
        assert_eq!(config.log_level, "trade_widget=debug");
        assert!(config.stderr);
    }
}
