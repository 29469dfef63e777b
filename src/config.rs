//! Configuration management for spocli.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. The configuration system follows a hierarchical
//! approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! All values are parsed once into [`Settings`]; a missing or malformed value is
//! reported as [`Error::Configuration`] before any request is attempted.

use std::{env, path::PathBuf, time::Duration};

use crate::{Error, Res, management::CredentialStore};

pub const CREDENTIALS_VAR: &str = "SPOTIFY_CREDS";
pub const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";
pub const API_URL_VAR: &str = "SPOTIFY_API_URL";
pub const TOKEN_TTL_VAR: &str = "SPOCLI_TOKEN_TTL";
pub const HTTP_TIMEOUT_VAR: &str = "SPOCLI_HTTP_TIMEOUT";
pub const COUNTRY_VAR: &str = "SPOCLI_COUNTRY";
pub const LOCALE_VAR: &str = "SPOCLI_LOCALE";
pub const LOG_VAR: &str = "SPOCLI_LOG";

pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Client-side token lifetime in seconds.
///
/// Tokens are treated as valid for this long after the client received them.
/// The `expires_in` value sent by the token endpoint is deliberately ignored;
/// override with `SPOCLI_TOKEN_TTL` if the service ever shortens its grants.
pub const DEFAULT_TOKEN_TTL: u64 = 3600;

pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_COUNTRY: &str = "US";
pub const DEFAULT_LOCALE: &str = "en_US";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory if it doesn't exist and loads variables from
/// `spocli/.env` inside the platform-specific local data directory:
/// - Linux: `~/.local/share/spocli/.env`
/// - macOS: `~/Library/Application Support/spocli/.env`
/// - Windows: `%LOCALAPPDATA%/spocli/.env`
///
/// A missing file is fine; variables already present in the process
/// environment are never overwritten.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file exists but
/// cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spocli/.env");
    path
}

/// Runtime settings resolved from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: CredentialStore,
    pub token_url: String,
    pub api_url: String,
    pub token_ttl: u64,
    pub http_timeout: Duration,
    pub country: String,
    pub locale: String,
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, which returns the raw value of a
    /// variable or `None` when it is unset.
    pub fn from_lookup<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = match lookup(CREDENTIALS_VAR) {
            Some(raw) => CredentialStore::parse(&raw)?,
            None => {
                return Err(Error::Configuration(format!(
                    "{CREDENTIALS_VAR} must be set to \"<client_id>:<client_secret>\""
                )));
            }
        };

        let token_url = lookup(TOKEN_URL_VAR).unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string());
        let api_url = lookup(API_URL_VAR)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let token_ttl = match lookup(TOKEN_TTL_VAR) {
            Some(raw) => parse_seconds(TOKEN_TTL_VAR, &raw)?,
            None => DEFAULT_TOKEN_TTL,
        };
        let http_timeout = match lookup(HTTP_TIMEOUT_VAR) {
            Some(raw) => Duration::from_secs(parse_seconds(HTTP_TIMEOUT_VAR, &raw)?),
            None => DEFAULT_HTTP_TIMEOUT,
        };

        Ok(Self {
            credentials,
            token_url,
            api_url,
            token_ttl,
            http_timeout,
            country: lookup(COUNTRY_VAR).unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            locale: lookup(LOCALE_VAR).unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
        })
    }
}

fn parse_seconds(var: &str, raw: &str) -> Res<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(Error::Configuration(format!("{var} must be greater than zero"))),
        Ok(secs) => Ok(secs),
        Err(_) => Err(Error::Configuration(format!(
            "{var} must be a whole number of seconds, got {raw:?}"
        ))),
    }
}
