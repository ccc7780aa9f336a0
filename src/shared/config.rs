use crate::shared::domain::value_objects::Locale;
use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SEARCHES_PER_MINUTE: u32 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("onion-client/", env!("CARGO_PKG_VERSION"));

/// Runtime configuration for the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the onion backend, without a trailing slash
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub locale: Locale,
    /// Client-side search quota
    pub searches_per_minute: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            locale: Locale::default(),
            searches_per_minute: DEFAULT_SEARCHES_PER_MINUTE,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment (and `.env`, if present)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("ONION_BASE_URL") {
            config.base_url = url;
        }
        if let Some(timeout) = lookup("ONION_TIMEOUT_SECS") {
            config.timeout_secs = parse_positive("ONION_TIMEOUT_SECS", &timeout)?;
        }
        if let Some(agent) = lookup("ONION_USER_AGENT") {
            if !agent.trim().is_empty() {
                config.user_agent = agent.trim().to_string();
            }
        }
        if let Some(locale) = lookup("ONION_LOCALE") {
            config.locale = locale.parse()?;
        }
        if let Some(quota) = lookup("ONION_SEARCHES_PER_MINUTE") {
            config.searches_per_minute = parse_positive("ONION_SEARCHES_PER_MINUTE", &quota)?;
        }

        let base_url = config.base_url.clone();
        config.with_base_url(base_url)
    }

    /// Replace the base URL, validating and normalising it
    pub fn with_base_url(mut self, url: impl Into<String>) -> AppResult<Self> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let parsed = reqwest::Url::parse(trimmed)
            .map_err(|e| AppError::ConfigError(format!("Invalid base URL '{}': {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::ConfigError(format!(
                "Base URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        self.base_url = trimmed.to_string();
        Ok(self)
    }
}

fn parse_positive<T>(key: &str, value: &str) -> AppResult<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match value.trim().parse::<T>() {
        Ok(parsed) if parsed > T::default() => Ok(parsed),
        _ => Err(AppError::ConfigError(format!(
            "{} must be a positive integer, got '{}'",
            key, value
        ))),
    }
}
