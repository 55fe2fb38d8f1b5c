//! Process-wide settings loaded once from the environment.

use crate::{Error, Result};
use std::time::Duration;

const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub model_name: String,
    pub port: u16,
    pub api_key: String,
    /// Origins allowed by CORS. `*` allows any origin.
    pub allowed_origins: Vec<String>,
    /// Timeout for a single provider call. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Settings {
    /// Load settings from the process environment, reading `.env` first when present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| Error::Config(format!("{} not set", key)))
        };

        let model_name = required("MODEL_NAME")?;
        let port_raw = required("PORT")?;
        let port = port_raw.trim().parse::<u16>().map_err(|e| {
            Error::Config(format!("PORT must be a valid port number, got '{}': {}", port_raw, e))
        })?;
        let api_key = required("GOOGLE_API_KEY")?;

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    Error::Config(format!(
                        "REQUEST_TIMEOUT_SECS must be a whole number of seconds, got '{}': {}",
                        raw, e
                    ))
                })?;
                if secs == 0 {
                    return Err(Error::Config(
                        "REQUEST_TIMEOUT_SECS must be greater than zero".to_string(),
                    ));
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            model_name,
            port,
            api_key,
            allowed_origins,
            request_timeout,
        })
    }
}
