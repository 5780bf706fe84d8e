//! HTTP server settings loaded from environment variables.
//!
//! - `API_HOST`          bind host (default `0.0.0.0`)
//! - `API_PORT`          bind port (default `5000`)
//! - `API_DEBUG`         verbose request logging (default `true`)
//! - `API_SECRET_KEY`    generic signing secret (unused by any endpoint)
//! - `CHAT_STRICT_INPUT` reject malformed chat bodies with 400 (default `false`)

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key-change-in-production";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: `{value}` ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub secret_key: String,
    pub strict_input: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            debug: true,
            secret_key: DEFAULT_SECRET_KEY.into(),
            strict_input: false,
        }
    }
}

impl ServerConfig {
    /// Load from environment, keeping defaults for unset variables.
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`] for a non-numeric port or a boolean flag
    /// that is not one of `true/false/1/0/yes/no`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());
        let dflt = Self::default();

        let port = match get("API_PORT") {
            Some(v) => v.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: "API_PORT",
                value: v.clone(),
                reason: "expected a port number",
            })?,
            None => dflt.port,
        };

        Ok(Self {
            host: get("API_HOST").unwrap_or(dflt.host),
            port,
            debug: parse_flag("API_DEBUG", get("API_DEBUG"), dflt.debug)?,
            secret_key: get("API_SECRET_KEY").unwrap_or(dflt.secret_key),
            strict_input: parse_flag("CHAT_STRICT_INPUT", get("CHAT_STRICT_INPUT"), dflt.strict_input)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// True when the signing secret was overridden from its development default.
    pub fn has_custom_secret(&self) -> bool {
        self.secret_key != DEFAULT_SECRET_KEY
    }
}

fn parse_flag(var: &'static str, raw: Option<String>, dflt: bool) -> Result<bool, ConfigError> {
    let Some(v) = raw else {
        return Ok(dflt);
    };
    match v.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: v,
            reason: "expected true/false",
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let c = load(&[]).unwrap();
        assert_eq!(c.bind_addr(), "0.0.0.0:5000");
        assert!(c.debug);
        assert!(!c.strict_input);
        assert!(!c.has_custom_secret());
    }

    #[test]
    fn overrides_apply() {
        let c = load(&[
            ("API_HOST", "127.0.0.1"),
            ("API_PORT", "8080"),
            ("API_DEBUG", "False"),
            ("CHAT_STRICT_INPUT", "yes"),
            ("API_SECRET_KEY", "s3cret"),
        ])
        .unwrap();
        assert_eq!(c.bind_addr(), "127.0.0.1:8080");
        assert!(!c.debug);
        assert!(c.strict_input);
        assert!(c.has_custom_secret());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(load(&[("API_PORT", "http")]).is_err());
        assert!(load(&[("API_PORT", "70000")]).is_err());
        assert!(load(&[("API_DEBUG", "maybe")]).is_err());
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let c = load(&[("API_PORT", "  "), ("API_HOST", "")]).unwrap();
        assert_eq!(c.bind_addr(), "0.0.0.0:5000");
    }
}
