use anyhow::{Context, Result};

const DEFAULT_CHAT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_CHAT_MODEL: &str = "llama-3.3-70b-versatile";

/// Application configuration loaded from environment variables.
/// Only malformed numeric values are errors; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when `GROQ_API_KEY` is unset or blank; the advisor then answers
    /// with the deterministic fallback.
    pub chat_api_key: Option<String>,
    pub chat_api_url: String,
    pub chat_model: String,
    /// `None` selects the in-process session store.
    pub redis_url: Option<String>,
    pub session_ttl_secs: u64,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            chat_api_key: optional_env("GROQ_API_KEY"),
            chat_api_url: optional_env("CHAT_API_URL")
                .unwrap_or_else(|| DEFAULT_CHAT_API_URL.to_string()),
            chat_model: optional_env("GROQ_MODEL")
                .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            redis_url: optional_env("REDIS_URL"),
            session_ttl_secs: parse_env("SESSION_TTL_SECS", 24 * 60 * 60)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chat_api_key: None,
            chat_api_url: DEFAULT_CHAT_API_URL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            redis_url: None,
            session_ttl_secs: 24 * 60 * 60,
            max_upload_bytes: 10 * 1024 * 1024,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

/// Reads `key`, treating unset and whitespace-only values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_default_when_unset() {
        let value: u16 = parse_env("SKILLMAP_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(value, 8080);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("SKILLMAP_TEST_BAD_PORT", "eighty");
        let result: Result<u16> = parse_env("SKILLMAP_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_optional_env_is_none() {
        std::env::set_var("SKILLMAP_TEST_BLANK_KEY", "   ");
        assert_eq!(optional_env("SKILLMAP_TEST_BLANK_KEY"), None);
        std::env::set_var("SKILLMAP_TEST_SET_KEY", " gsk_123 ");
        assert_eq!(optional_env("SKILLMAP_TEST_SET_KEY").as_deref(), Some("gsk_123"));
    }
}
