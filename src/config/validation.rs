//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject an empty host list
//! - Check that every host entry parses into a scheme and host
//!
//! # Design Decisions
//! - Validation is a pure function: RotatorConfig → Result<(), ConfigError>
//! - Reports the first offending entry, in configuration order
//! - Runs before config is accepted into the system

use crate::config::schema::RotatorConfig;
use crate::error::ConfigError;
use crate::pool::HostEntry;

/// Validate a parsed configuration.
pub fn validate_config(config: &RotatorConfig) -> Result<(), ConfigError> {
    if config.hosts.is_empty() {
        return Err(ConfigError::EmptyHostList);
    }

    for entry in config.hosts.as_slice() {
        HostEntry::parse(entry)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hosts_rejected() {
        let err = validate_config(&RotatorConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyHostList));
    }

    #[test]
    fn test_bad_entry_is_named() {
        let config = RotatorConfig::with_hosts(["http://good.example", ":8080"]);
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("':8080'"), "got: {}", err);
    }

    #[test]
    fn test_valid_config() {
        let config = RotatorConfig::with_hosts(["http://a.example", "https://b.example:800"]);
        assert!(validate_config(&config).is_ok());
    }
}
