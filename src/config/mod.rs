use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_PINNING_ENDPOINT: &str = "https://api.pinata.cloud/pinning/pinFileToIPFS";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pinning: PinningConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PinningConfig {
    #[serde(default = "default_pinning_endpoint")]
    pub endpoint: String,
    /// Bearer token for the pinning API. Required to serve uploads.
    #[serde(default)]
    pub jwt: Option<String>,
    /// Upper bound on one forwarded upload. Unset means the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for PinningConfig {
    fn default() -> Self {
        Self {
            endpoint: default_pinning_endpoint(),
            jwt: None,
            timeout_secs: None,
        }
    }
}

impl PinningConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn require_jwt(&self) -> Result<&str> {
        match self.jwt.as_deref() {
            Some(jwt) if !jwt.trim().is_empty() => Ok(jwt),
            _ => anyhow::bail!(
                "pinning.jwt is not set. Export PINATA_JWT or add it to the config file"
            ),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(default = "default_relay_url")]
    pub relay_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            relay_url: default_relay_url(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_pinning_endpoint() -> String {
    DEFAULT_PINNING_ENDPOINT.to_string()
}

fn default_relay_url() -> String {
    "http://localhost:5000/upload".to_string()
}

impl Config {
    /// Load the configuration: the TOML file when one is given, built-in
    /// defaults otherwise, then environment overrides on top.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Could not read config file '{}': {}", path.display(), e)
        })?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file '{}'", path.display()))?;
        Ok(config)
    }

    /// Apply environment overrides. `lookup` is `std::env::var` in production
    /// and a map in tests.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("PIN_RELAY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.trim().parse().context("Invalid PORT")?;
        }
        if let Some(endpoint) = lookup("PINATA_API_URL") {
            self.pinning.endpoint = endpoint;
        }
        if let Some(jwt) = lookup("PINATA_JWT") {
            self.pinning.jwt = Some(jwt);
        }
        if let Some(timeout) = lookup("PINATA_TIMEOUT_SECS") {
            self.pinning.timeout_secs =
                Some(timeout.trim().parse().context("Invalid PINATA_TIMEOUT_SECS")?);
        }
        if let Some(relay_url) = lookup("RELAY_URL") {
            self.client.relay_url = relay_url;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("server.port must be greater than 0");
        }
        validate_http_url("pinning.endpoint", &self.pinning.endpoint)?;
        validate_http_url("client.relay_url", &self.client.relay_url)?;
        if self.pinning.timeout_secs == Some(0) {
            anyhow::bail!("pinning.timeout_secs must be greater than 0 when set");
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn validate_http_url(key: &str, value: &str) -> Result<()> {
    let parsed = url::Url::parse(value).with_context(|| format!("{} is not a valid URL", key))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => anyhow::bail!("{} must use http or https, got '{}'", key, scheme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_original_relay() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.pinning.endpoint, DEFAULT_PINNING_ENDPOINT);
        assert!(config.pinning.jwt.is_none());
        assert!(config.pinning.timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(lookup_from(&[
                ("PORT", "8081"),
                ("PINATA_JWT", "secret"),
                ("PINATA_TIMEOUT_SECS", "30"),
            ]))
            .unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.pinning.require_jwt().unwrap(), "secret");
        assert_eq!(config.pinning.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_host_override_uses_relay_specific_name() {
        let mut config = Config::default();
        config
            .apply_env(lookup_from(&[("HOST", "build-runner-17")]))
            .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");

        config
            .apply_env(lookup_from(&[("PIN_RELAY_HOST", "127.0.0.1")]))
            .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let mut config = Config::default();
        let err = config
            .apply_env(lookup_from(&[("PORT", "not-a-port")]))
            .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_blank_jwt_is_missing() {
        let mut config = Config::default();
        config.pinning.jwt = Some("   ".to_string());
        assert!(config.pinning.require_jwt().is_err());
    }

    #[test]
    fn test_endpoint_must_be_http() {
        let mut config = Config::default();
        config.pinning.endpoint = "ftp://example.com/pin".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 7000

            [pinning]
            jwt = "abc"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.pinning.endpoint, DEFAULT_PINNING_ENDPOINT);
        assert_eq!(config.client.relay_url, "http://localhost:5000/upload");
    }
}
