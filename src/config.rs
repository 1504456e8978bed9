//! Runtime configuration
//!
//! Everything the service needs from its environment is collected once into
//! [`AppConfig`] at startup and handed to each component when it is built.
//! Values come from process environment variables, optionally seeded from a
//! `.env` file by `dotenvy` in `main`.

use crate::error::{AppError, Result};
use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Settings for the transcription provider
#[derive(Debug, Clone)]
pub struct AsrSettings {
    /// Provider name, currently only "openai"
    pub provider: String,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Language hint sent with every request
    pub language: String,
    pub timeout: Duration,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub upload_dir: PathBuf,
    pub minutes_path: PathBuf,
    pub admin_username: String,
    pub admin_password: String,
    pub token_secret: String,
    pub token_ttl: chrono::Duration,
    pub asr: AsrSettings,
    pub max_upload_bytes: usize,
    /// Map transcription and append failures to error statuses instead of 200 bodies
    pub strict_errors: bool,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ttl_minutes: i64 = try_load(&lookup, "MINUTES_TOKEN_TTL_MINUTES", "60")?;
        if ttl_minutes <= 0 {
            return Err(AppError::Config(
                "MINUTES_TOKEN_TTL_MINUTES must be positive".to_string(),
            ));
        }

        let timeout_secs: u64 = try_load(&lookup, "MINUTES_ASR_TIMEOUT_SECS", "300")?;

        Ok(Self {
            bind_addr: try_load(&lookup, "MINUTES_BIND_ADDR", "0.0.0.0:8000")?,
            upload_dir: try_load(&lookup, "MINUTES_UPLOAD_DIR", "uploads")?,
            minutes_path: try_load(&lookup, "MINUTES_STORE_PATH", "minutes.json")?,
            admin_username: try_load(&lookup, "MINUTES_ADMIN_USERNAME", "admin")?,
            admin_password: require(&lookup, "MINUTES_ADMIN_PASSWORD")?,
            token_secret: require(&lookup, "MINUTES_TOKEN_SECRET")?,
            token_ttl: chrono::Duration::minutes(ttl_minutes),
            asr: AsrSettings {
                provider: try_load(&lookup, "MINUTES_ASR_PROVIDER", "openai")?,
                api_key: lookup("OPENAI_API_KEY").unwrap_or_default(),
                base_url: try_load(
                    &lookup,
                    "MINUTES_ASR_BASE_URL",
                    "https://api.openai.com/v1",
                )?,
                model: try_load(&lookup, "MINUTES_ASR_MODEL", "whisper-1")?,
                language: try_load(&lookup, "MINUTES_ASR_LANGUAGE", "ko")?,
                timeout: Duration::from_secs(timeout_secs),
            },
            max_upload_bytes: try_load(&lookup, "MINUTES_MAX_UPLOAD_BYTES", "26214400")?,
            strict_errors: try_load(&lookup, "MINUTES_STRICT_ERRORS", "false")?,
        })
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: &str) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        log::info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid {key} value: {e}")))
}

fn require<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::Config(format!("{key} must be set"))),
    }
}
