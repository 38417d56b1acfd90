//! Log configuration from environment variables

use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory for rotated log files
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "navigability=debug,info")
    pub log_level: String,
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let log_dir = std::env::var("NAVIGABILITY_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("logs"));

        Self {
            log_dir,
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "navigability=info,warn".to_string()),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_scopes_to_crate() {
        // RUST_LOG may be set by the environment running the tests; only
        // check the fallback shape when it is not.
        if std::env::var("RUST_LOG").is_err() {
            let config = LogConfig::from_env();
            assert!(config.log_level.starts_with("navigability="));
        }
    }
}
