//! Typed errors for configuration loading and lookup.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`ConfigStore`](crate::ConfigStore) operations.
///
/// Every variant is terminal for the call that raised it: nothing is
/// retried and no fallback value is substituted.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A supplied path is missing or unreadable. Raised at load time,
    /// before parsing.
    #[error("config file {} could not be found", .path.display())]
    FileNotFound {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The file's content failed to parse as YAML with a mapping at its
    /// root. Carries the parser-reported line number (0 when the parser
    /// gave no location).
    #[error("config file {} does not have a valid format (line {line})", .path.display())]
    InvalidConfigFile {
        /// The file that failed to parse.
        path: PathBuf,
        /// 1-based source line of the parse failure.
        line: usize,
    },

    /// A key-chain lookup walked off the merged mapping because some key
    /// in the chain does not exist at that depth.
    #[error("key {key} not found")]
    KeyNotFound {
        /// The first missing key in the chain.
        key: String,
    },

    /// A fetched value did not deserialize into the requested type.
    #[error("config value did not match the requested type: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_message_names_path() {
        let err = ConfigError::FileNotFound {
            path: PathBuf::from("/etc/app/missing.yaml"),
        };
        assert_eq!(
            err.to_string(),
            "config file /etc/app/missing.yaml could not be found"
        );
    }

    #[test]
    fn test_invalid_config_file_message_carries_line() {
        let err = ConfigError::InvalidConfigFile {
            path: PathBuf::from("bad.yaml"),
            line: 7,
        };
        assert_eq!(
            err.to_string(),
            "config file bad.yaml does not have a valid format (line 7)"
        );
    }

    #[test]
    fn test_key_not_found_message_names_key() {
        let err = ConfigError::KeyNotFound {
            key: "database".to_string(),
        };
        assert_eq!(err.to_string(), "key database not found");
    }
}
