use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;
use url::Url;

const DEFAULT_PLUNK_API_URL: &str = "https://api.useplunk.com/v1/send";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub plunk_api_key: String,
    pub plunk_api_url: String,
    /// Public base URL the tracking pixel links point at
    pub tracking_base_url: String,
    pub provider_timeout: Duration,
    pub scheduler_tick: Duration,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let tracking_base_url = env::var("TRACKING_BASE_URL")
            .context("TRACKING_BASE_URL must be set")?;
        validate_base_url(&tracking_base_url)?;

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            plunk_api_key: env::var("PLUNK_API_KEY")
                .context("PLUNK_API_KEY must be set")?,
            plunk_api_url: env::var("PLUNK_API_URL")
                .unwrap_or_else(|_| DEFAULT_PLUNK_API_URL.to_string()),
            tracking_base_url,
            provider_timeout: Duration::from_secs(
                env::var("PROVIDER_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .context("PROVIDER_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            scheduler_tick: Duration::from_millis(
                env::var("SCHEDULER_TICK_MS")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse()
                    .context("SCHEDULER_TICK_MS must be a whole number of milliseconds")?,
            ),
            allowed_origins: parse_origins(
                &env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
        })
    }
}

fn validate_base_url(raw: &str) -> Result<()> {
    let url = Url::parse(raw).with_context(|| format!("TRACKING_BASE_URL is not a URL: {}", raw))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => bail!("TRACKING_BASE_URL must be http or https, got {}", other),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_split_and_trimmed() {
        assert_eq!(
            parse_origins("http://a.test, https://b.test ,,"),
            vec!["http://a.test", "https://b.test"]
        );
    }

    #[test]
    fn base_url_must_be_http() {
        assert!(validate_base_url("https://track.example.com").is_ok());
        assert!(validate_base_url("http://localhost:8000/").is_ok());
        assert!(validate_base_url("ftp://track.example.com").is_err());
        assert!(validate_base_url("track.example.com").is_err());
    }
}
