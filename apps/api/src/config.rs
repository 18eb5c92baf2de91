use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let groq_api_key = require_env("GROQ_API_KEY").context(
            "Get a free API key at https://console.groq.com/keys and set GROQ_API_KEY",
        )?;
        validate_api_key(&groq_api_key)?;

        Ok(Config {
            groq_api_key,
            groq_model: std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Groq keys always start with `gsk_`. Rejecting anything else at startup beats
/// a confusing 401 on the first analysis request.
fn validate_api_key(key: &str) -> Result<()> {
    if !key.starts_with("gsk_") {
        bail!(
            "GROQ_API_KEY has an invalid format (expected a key starting with 'gsk_'). \
             Get a valid key at https://console.groq.com/keys"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_key_format_accepted() {
        assert!(validate_api_key("gsk_abc123").is_ok());
    }

    #[test]
    fn test_invalid_key_format_rejected() {
        assert!(validate_api_key("sk-proj-abc123").is_err());
        assert!(validate_api_key("").is_err());
    }
}
