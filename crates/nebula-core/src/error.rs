//! Error types for nebula-core
//!
//! The page itself never surfaces errors to visitors. These only cover the
//! ambient layer: loading and validating site configuration, and parsing
//! anchor names coming from the CLI or the URL fragment.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for nebula operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Config Errors
    // ===================
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML in {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        message: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    // ===================
    // Navigation Errors
    // ===================
    #[error("Unknown anchor: {name}")]
    UnknownAnchor { name: String },
}

impl CoreError {
    /// Actionable hint for the CLI, if one applies
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CoreError::ConfigRead { path, .. } => {
                Some(format!("Check the file exists and is readable: ls -l {}", path.display()))
            }
            CoreError::ConfigParse { .. } => {
                Some("Run `nebula config --defaults` to print a valid file".to_string())
            }
            CoreError::InvalidConfig { .. } => None,
            CoreError::UnknownAnchor { .. } => Some(format!(
                "Known anchors: {}",
                crate::anchor::Anchor::ALL
                    .iter()
                    .map(|a| a.id())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_anchor_suggestion_lists_ids() {
        let err = CoreError::UnknownAnchor {
            name: "pricing".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown anchor: pricing");
        let hint = err.suggestion().unwrap();
        assert!(hint.contains("models"));
        assert!(hint.contains("contact"));
    }

    #[test]
    fn test_invalid_config_has_no_suggestion() {
        let err = CoreError::InvalidConfig {
            message: "breakpoint_px must be > 0".to_string(),
        };
        assert!(err.suggestion().is_none());
        assert!(err.to_string().contains("breakpoint_px"));
    }
}
