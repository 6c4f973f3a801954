//! Client options: where the management API lives and how to authenticate.

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{ManagementError, Result};

/// Production management API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://mgmt.aglty.io";

/// Environment variable prefix for [`ClientOptions::from_env`]:
/// `AGILITY_MGMT_TOKEN`, `AGILITY_MGMT_BASE_URL`.
pub const ENV_PREFIX: &str = "AGILITY_MGMT_";

/// Connection options for the management API client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOptions {
    pub base_url: String,
    /// Bearer token obtained from the OAuth flow (owned by the caller).
    pub token: String,
}

impl ClientOptions {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
        }
    }

    /// Point the client at a different API host, e.g. a regional endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Assemble options from the environment. The base URL falls back to
    /// the production endpoint; a missing token is a configuration error.
    pub fn from_env() -> Result<Self> {
        Figment::from(Serialized::default("base_url", DEFAULT_BASE_URL))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|err| ManagementError::Config(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_production_endpoint() {
        let options = ClientOptions::new("tok");
        assert_eq!(options.base_url, DEFAULT_BASE_URL);
        assert_eq!(options.token, "tok");
    }

    #[test]
    fn base_url_override() {
        let options = ClientOptions::new("tok").with_base_url("https://mgmt-ca.aglty.io");
        assert_eq!(options.base_url, "https://mgmt-ca.aglty.io");
    }

    #[test]
    fn from_env_reads_prefixed_variables() {
        // Single test touches the process environment so parallel test
        // threads never observe each other's values.
        std::env::set_var("AGILITY_MGMT_TOKEN", "env-token");
        std::env::set_var("AGILITY_MGMT_BASE_URL", "https://mgmt-eu.aglty.io");
        let options = ClientOptions::from_env().unwrap();
        assert_eq!(options.token, "env-token");
        assert_eq!(options.base_url, "https://mgmt-eu.aglty.io");

        std::env::remove_var("AGILITY_MGMT_BASE_URL");
        let options = ClientOptions::from_env().unwrap();
        assert_eq!(options.base_url, DEFAULT_BASE_URL);

        std::env::remove_var("AGILITY_MGMT_TOKEN");
        assert!(ClientOptions::from_env().is_err());
    }
}
