use std::collections::HashMap;

use crate::error::Error;

pub const DEFAULT_PATH: &str = "/etc/mailjet/mailjet.toml";
const ENV_PREFIX: &str = "MAILJET";

/// Adapter configuration: the two Mailjet credentials plus an optional
/// base-URI override (used mainly to point tests at a local server).
///
/// An empty string counts as a missing credential.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub api_private_key: String,
    pub base_uri: Option<String>,
}

impl Config {
    pub fn new(api_key: impl Into<String>, api_private_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_private_key: api_private_key.into(),
            base_uri: None,
        }
    }

    /// Extract known keys from a flat settings map. Unknown keys are
    /// ignored; absent keys leave the field empty.
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        Self {
            api_key: map.get("api_key").cloned().unwrap_or_default(),
            api_private_key: map.get("api_private_key").cloned().unwrap_or_default(),
            base_uri: map.get("base_uri").cloned(),
        }
    }

    /// Check that both credentials are present. Runs before every request
    /// is built, so a misconfigured caller fails fast with no network I/O.
    pub fn validate(&self) -> Result<(), Error> {
        if self.api_key.is_empty() {
            return Err(Error::Config("api_key is missing or empty".to_string()));
        }
        if self.api_private_key.is_empty() {
            return Err(Error::Config(
                "api_private_key is missing or empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loads adapter config from the filesystem and merges it with any
/// environment variables prefixed with MAILJET_.
///
/// A missing file is tolerated (env-only setups); malformed input panics.
pub fn load_config(path: Option<&str>) -> Config {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path.unwrap_or(DEFAULT_PATH)).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()
        .unwrap();

    let map = settings.try_deserialize::<HashMap<String, String>>().unwrap();
    Config::from_map(&map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_map_picks_known_keys() {
        let mut map = HashMap::new();
        map.insert("api_key".to_string(), "key".to_string());
        map.insert("api_private_key".to_string(), "secret".to_string());
        map.insert("base_uri".to_string(), "http://localhost:8080".to_string());
        map.insert("unrelated".to_string(), "x".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.api_key, "key");
        assert_eq!(config.api_private_key, "secret");
        assert_eq!(config.base_uri.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn validate_names_missing_api_key() {
        let config = Config::default();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn validate_names_missing_private_key() {
        let config = Config::new("key", "");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api_private_key"));
    }

    #[test]
    fn validate_accepts_full_config() {
        let config = Config::new("key", "secret");
        assert!(config.validate().is_ok());
    }
}
