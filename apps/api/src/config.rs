use anyhow::{Context, Result};
use chrono::Local;

use crate::llm_client::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::llm_client::GatewaySettings;

/// Application configuration loaded from environment variables.
///
/// The Google API key is optional here: it can also be supplied when a
/// session is started.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub port: u16,
    pub rust_log: String,
    /// `v<crate version>.<MMDD>.<HHMM>` of process start.
    pub version_tag: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: std::env::var("GOOGLE_API_KEY").unwrap_or_default(),
            gemini_model: env_or("GEMINI_MODEL", DEFAULT_MODEL),
            gemini_api_base: env_or("GEMINI_API_BASE", DEFAULT_API_BASE),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            version_tag: version_tag(),
        })
    }

    /// Gateway settings for a new session, with optional per-session overrides.
    pub fn gateway_settings(&self, api_key: Option<&str>, model: Option<&str>) -> GatewaySettings {
        GatewaySettings {
            api_key: api_key
                .filter(|k| !k.trim().is_empty())
                .unwrap_or(&self.google_api_key)
                .trim()
                .to_string(),
            model: model
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(&self.gemini_model)
                .to_string(),
            api_base: self.gemini_api_base.clone(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn version_tag() -> String {
    format!(
        "v{}.{}",
        env!("CARGO_PKG_VERSION"),
        Local::now().format("%m%d.%H%M")
    )
}
