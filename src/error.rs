//! Configuration error taxonomy.
//!
//! Every error here is raised synchronously while building a rotator.
//! Nothing in this module is produced at request time.

use thiserror::Error;

/// Errors that prevent a rotator from being constructed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No host entries were supplied.
    #[error("empty host list: at least one host is required")]
    EmptyHostList,

    /// A host entry could not be turned into a scheme and host.
    #[error("invalid host entry '{entry}': {reason}")]
    InvalidHost { entry: String, reason: String },

    /// The configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for the schema.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    pub(crate) fn invalid_host(entry: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidHost {
            entry: entry.to_string(),
            reason: reason.into(),
        }
    }
}
