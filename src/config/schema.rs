//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Root configuration for the host rotator.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RotatorConfig {
    /// Candidate upstream hosts (`scheme://host[:port]`).
    pub hosts: HostList,

    /// Transport timeouts used by the command line client.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl RotatorConfig {
    /// Build a configuration around an explicit host list, other sections defaulted.
    pub fn with_hosts<I, T>(hosts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self {
            hosts: HostList::from_entries(hosts),
            ..Self::default()
        }
    }
}

/// Ordered list of host strings.
///
/// Accepts either a TOML array (`hosts = ["http://a", "https://b"]`) or a
/// single comma separated string (`hosts = "http://a,https://b"`). Every
/// element is split on `,` as well, so the two forms can be mixed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostList(Vec<String>);

impl HostList {
    /// Split, trim and collect entries, dropping blank pieces.
    pub fn from_entries<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let hosts = entries
            .into_iter()
            .flat_map(|entry| {
                entry
                    .as_ref()
                    .split(',')
                    .map(str::trim)
                    .filter(|piece| !piece.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self(hosts)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawHostList {
    Joined(String),
    List(Vec<String>),
}

impl<'de> Deserialize<'de> for HostList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawHostList::deserialize(deserializer)? {
            RawHostList::Joined(joined) => HostList::from_entries([joined]),
            RawHostList::List(list) => HostList::from_entries(list),
        })
    }
}

impl Serialize for HostList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Timeout configuration for the transport.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosts_as_array() {
        let config: RotatorConfig =
            toml::from_str(r#"hosts = ["http://a.example", "https://b.example:8443"]"#).unwrap();
        assert_eq!(
            config.hosts.as_slice(),
            &["http://a.example".to_string(), "https://b.example:8443".to_string()]
        );
    }

    #[test]
    fn test_hosts_as_comma_separated_string() {
        let config: RotatorConfig =
            toml::from_str(r#"hosts = "http://a.example, https://b.example,""#).unwrap();
        assert_eq!(config.hosts.len(), 2);
        assert_eq!(config.hosts.as_slice()[1], "https://b.example");
    }

    #[test]
    fn test_array_elements_are_split_too() {
        let hosts = HostList::from_entries(["http://f.com", "https://b.com,https://c.com"]);
        assert_eq!(hosts.len(), 3);
    }

    #[test]
    fn test_defaults() {
        let config: RotatorConfig = toml::from_str("").unwrap();
        assert!(config.hosts.is_empty());
        assert_eq!(config.timeouts.connect_secs, 5);
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.observability.log_level, "info");
    }
}
