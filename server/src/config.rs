//! Server configuration parsed from environment variables.

use analysis::DEFAULT_ANALYZE_URL;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_KEY_ENV: &str = "SAFETEXT_API_KEY";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A value is present but cannot be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// The variable expected to hold the analysis API key is unset or blank.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Optional: `PORT` (default 3000).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { port })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub url: String,
    pub api_key: String,
    pub timeouts: AnalysisTimeouts,
}

impl std::fmt::Debug for AnalysisConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisConfig")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

impl AnalysisConfig {
    /// Build typed analysis config from environment variables.
    ///
    /// Optional:
    /// - `ANALYSIS_URL`: collaborator endpoint
    /// - `ANALYSIS_API_KEY_ENV`: names the env var holding the key
    ///   (default `SAFETEXT_API_KEY`); that variable itself is required
    /// - `ANALYSIS_REQUEST_TIMEOUT_SECS`: default 30
    /// - `ANALYSIS_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let key_var = lookup("ANALYSIS_API_KEY_ENV").unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_owned());
        let api_key = lookup(&key_var)
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey { var: key_var })?;

        let url = lookup("ANALYSIS_URL")
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_ANALYZE_URL.to_owned());
        let timeouts = AnalysisTimeouts {
            request_secs: parse_u64(&lookup, "ANALYSIS_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(&lookup, "ANALYSIS_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { url, api_key, timeouts })
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    lookup(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
