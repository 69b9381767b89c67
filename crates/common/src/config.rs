use std::time::Duration;

use crate::error::AppError;

/// Default status endpoint for homework review statuses.
pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default Telegram Bot API base URL.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Global application configuration loaded from environment variables.
#[derive(Clone)]
pub struct AppConfig {
    /// OAuth token for the status API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Recipient chat identifier
    pub telegram_chat_id: String,

    /// Status API endpoint (default: Practicum homework statuses)
    pub practicum_endpoint: String,

    /// Telegram Bot API base URL (default: https://api.telegram.org)
    pub telegram_api_url: String,

    /// Delay between polls in seconds (default: 600)
    pub retry_interval_secs: u64,

    /// Per-request HTTP timeout in seconds (default: 30). Must be shorter than the retry interval.
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::ConfigMissing(key.to_string()))
        };
        let number = |key: &str, default: u64| match lookup(key) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| AppError::Config(format!("{key} must be a valid u64, got {raw:?}"))),
            None => Ok(default),
        };

        let config = Self {
            practicum_token: required("PRACTICUM_TOKEN")?,
            telegram_token: required("TELEGRAM_TOKEN")?,
            telegram_chat_id: required("TELEGRAM_CHAT_ID")?,
            practicum_endpoint: lookup("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_PRACTICUM_ENDPOINT.to_string()),
            telegram_api_url: lookup("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_interval_secs: number("RETRY_INTERVAL_SECS", 600)?,
            request_timeout_secs: number("REQUEST_TIMEOUT_SECS", 30)?,
        };

        if config.retry_interval_secs == 0 {
            return Err(AppError::Config(
                "RETRY_INTERVAL_SECS must be greater than zero".to_string(),
            ));
        }
        if config.request_timeout_secs == 0
            || config.request_timeout_secs >= config.retry_interval_secs
        {
            return Err(AppError::Config(format!(
                "REQUEST_TIMEOUT_SECS ({}) must be between 1 and RETRY_INTERVAL_SECS ({})",
                config.request_timeout_secs, config.retry_interval_secs
            )));
        }

        Ok(config)
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.retry_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_interval_secs", &self.retry_interval_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
