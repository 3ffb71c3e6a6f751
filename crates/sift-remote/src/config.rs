use serde::{Deserialize, Serialize};
use std::time::Duration;

///
/// RemoteConfig
///
/// Tunables for the rate service and the status poller. All fields carry
/// serde defaults so partial config files round-trip.
///

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Per-provider fetch budget in seconds.
    pub provider_timeout_secs: u64,

    /// How long a stored rate table stays servable.
    pub cache_ttl_secs: u64,

    /// Gap between withdrawal status polls.
    pub poll_interval_secs: u64,

    /// Optional cap on status polls; `None` polls until terminal.
    pub max_poll_attempts: Option<u32>,
}

impl RemoteConfig {
    #[must_use]
    pub const fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }

    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            provider_timeout_secs: 5,
            cache_ttl_secs: 600,
            poll_interval_secs: 15,
            max_poll_attempts: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_deserializes_over_defaults() {
        let config: RemoteConfig =
            serde_json::from_str(r#"{ "poll_interval_secs": 5 }"#).expect("config should parse");

        assert_eq!(config.poll_interval(), Duration::from_secs(5));
        assert_eq!(config.provider_timeout(), Duration::from_secs(5));
        assert_eq!(config.cache_ttl(), Duration::from_secs(600));
        assert_eq!(config.max_poll_attempts, None);
    }
}
