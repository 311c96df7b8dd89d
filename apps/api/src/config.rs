use anyhow::{Context, Result};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Enables `POST /api/extract-filters` when set.
    pub anthropic_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            anthropic_api_key: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: match optional_env("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
        })
    }
}

/// Reads an environment variable, treating an empty value as unset.
pub(crate) fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
