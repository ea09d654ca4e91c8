//! Process configuration, read once at startup

use crate::llm::LlmConfig;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_HISTORY_MESSAGES: usize = 40;
const DEFAULT_SESSION_IDLE_SECS: u64 = 3600;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Full service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub llm: LlmConfig,
    /// Most recent prior transcript messages forwarded to the model
    pub history_messages: usize,
    /// Sessions untouched for this long are discarded
    pub session_idle_ttl: Duration,
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenv::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let llm = LlmConfig::from_lookup(&lookup)?;
        let port = parse_var(&lookup, "FOODBRIDGE_PORT")?.unwrap_or(DEFAULT_PORT);
        let history_messages =
            parse_var(&lookup, "FOODBRIDGE_HISTORY_MESSAGES")?.unwrap_or(DEFAULT_HISTORY_MESSAGES);
        let idle_secs: u64 =
            parse_var(&lookup, "FOODBRIDGE_SESSION_IDLE_SECS")?.unwrap_or(DEFAULT_SESSION_IDLE_SECS);
        if idle_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "FOODBRIDGE_SESSION_IDLE_SECS",
                value: idle_secs.to_string(),
            });
        }

        Ok(Self {
            port,
            llm,
            history_messages,
            session_idle_ttl: Duration::from_secs(idle_secs),
        })
    }
}

/// Parse an optional variable; present-but-unparsable is an error.
pub(crate) fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::from_lookup(|key| {
            (key == "GROQ_API_KEY").then(|| "gsk_123".to_string())
        })
        .unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.history_messages, 40);
        assert_eq!(config.session_idle_ttl, Duration::from_secs(3600));
        assert_eq!(config.llm.api_key, "gsk_123");
    }

    #[test]
    fn missing_credential_fails_at_startup() {
        let err = Config::from_lookup(|_| None).unwrap_err();
        assert_eq!(err.to_string(), "GROQ_API_KEY is not set");
    }

    #[test]
    fn invalid_port() {
        let err = Config::from_lookup(|key| match key {
            "GROQ_API_KEY" => Some("k".to_string()),
            "FOODBRIDGE_PORT" => Some("eighty".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "FOODBRIDGE_PORT",
                ..
            }
        ));
    }

    #[test]
    fn history_override() {
        let config = Config::from_lookup(|key| match key {
            "GROQ_API_KEY" => Some("k".to_string()),
            "FOODBRIDGE_HISTORY_MESSAGES" => Some(" 6 ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.history_messages, 6);
    }

    #[test]
    fn session_idle_override_and_zero() {
        let config = Config::from_lookup(|key| match key {
            "GROQ_API_KEY" => Some("k".to_string()),
            "FOODBRIDGE_SESSION_IDLE_SECS" => Some("90".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.session_idle_ttl, Duration::from_secs(90));

        let err = Config::from_lookup(|key| match key {
            "GROQ_API_KEY" => Some("k".to_string()),
            "FOODBRIDGE_SESSION_IDLE_SECS" => Some("0".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "FOODBRIDGE_SESSION_IDLE_SECS",
                ..
            }
        ));
    }
}
