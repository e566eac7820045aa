// src/config.rs
use std::{fmt, net::SocketAddr};

use axum::http::HeaderValue;

use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub bind_addr: SocketAddr,
    pub allowed_origin: HeaderValue,
}

// Keep the key out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("bind_addr", &self.bind_addr)
            .field("allowed_origin", &self.allowed_origin)
            .finish()
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a local `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Only `GEMINI_API_KEY` is required;
    /// it must be present and non-blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar(API_KEY_VAR))?;

        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_addr = get("BIND_ADDR", DEFAULT_BIND_ADDR)
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let allowed_origin = HeaderValue::from_str(&get("ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGIN))
            .map_err(|e| ConfigError::Invalid {
                key: "ALLOWED_ORIGIN",
                reason: e.to_string(),
            })?;

        Ok(Self {
            api_key,
            model: get("GEMINI_MODEL", DEFAULT_MODEL),
            api_base: get("GEMINI_API_BASE", DEFAULT_API_BASE)
                .trim_end_matches('/')
                .to_string(),
            bind_addr,
            allowed_origin,
        })
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
    fn missing_key_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar("GEMINI_API_KEY"));
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn blank_key_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "   ")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar("GEMINI_API_KEY"));
    }

    #[test]
    fn defaults_apply() {
        let cfg = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "k-123")])).unwrap();
        assert_eq!(cfg.api_key, "k-123");
        assert_eq!(cfg.model, "gemini-1.5-flash");
        assert_eq!(cfg.bind_addr.port(), 8000);
        assert_eq!(cfg.allowed_origin, "http://localhost:5173");
        assert!(!format!("{cfg:?}").contains("k-123"));
    }

    #[test]
    fn overrides_and_bad_values() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("GEMINI_API_BASE", "http://127.0.0.1:9999/"),
        ]))
        .unwrap();
        assert_eq!(cfg.model, "gemini-1.5-pro");
        assert_eq!(cfg.api_base, "http://127.0.0.1:9999");

        let err = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("BIND_ADDR", "not-an-addr"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));
    }
}
