//! # Spotify Integration Module
//!
//! This module is the integration layer between spocli and the Spotify Web API.
//! It owns the HTTP client, attaches a fresh authorization header to every
//! request and decodes the JSON responses into [`crate::types`].
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (cli::*)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials exchange)
//!     ├── Search (albums, artists, tracks)
//!     ├── Browse (featured playlists, new releases, categories)
//!     └── Artists (albums, related artists)
//!          ↓
//! Token session (management::TokenSession)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Request lifecycle
//!
//! Every GET asks the shared [`TokenSession`] for a valid header immediately
//! before sending, merges the base parameters (`country`, `locale`,
//! `timestamp`) with the endpoint's own, and fails fast: there is no
//! pagination and no retry.
//!
//! ## Error Types
//!
//! - [`crate::Error::Network`] / [`crate::Error::Auth`] - token endpoint problems
//! - [`crate::Error::Api`] - resource endpoint answered with a non-success status
//! - [`crate::Error::Http`] - transport or decoding failures on resource requests

pub mod artists;
pub mod auth;
pub mod browse;
pub mod search;

use std::sync::Arc;

use reqwest::{Client, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    Error, Res,
    config::{DEFAULT_API_URL, DEFAULT_COUNTRY, DEFAULT_LOCALE, Settings},
    management::TokenSession,
    utils,
};

/// HTTP client for the read-only catalogue endpoints.
pub struct SpotifyClient {
    http: Client,
    session: Arc<TokenSession>,
    base_url: String,
    country: String,
    locale: String,
}

impl SpotifyClient {
    pub fn new(http: Client, session: Arc<TokenSession>) -> Self {
        Self {
            http,
            session,
            base_url: DEFAULT_API_URL.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// Builds the HTTP client and the one token session for this process.
    pub fn from_settings(settings: &Settings) -> Res<Self> {
        let http = Client::builder()
            .timeout(settings.http_timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("cannot build HTTP client: {e}")))?;

        let session = TokenSession::new(settings.credentials.clone(), http.clone())
            .with_token_url(&settings.token_url)
            .with_ttl(settings.token_ttl);

        Ok(Self::new(http, Arc::new(session))
            .with_base_url(&settings.api_url)
            .with_market(&settings.country, &settings.locale))
    }

    /// Override the base URL (for testing with wiremock).
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_market(mut self, country: &str, locale: &str) -> Self {
        self.country = country.to_string();
        self.locale = locale.to_string();
        self
    }

    pub fn session(&self) -> &Arc<TokenSession> {
        &self.session
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    fn base_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("country", self.country.clone()),
            ("locale", self.locale.clone()),
            ("timestamp", utils::local_timestamp()),
        ]
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Res<T> {
        let header = self.session.ensure_valid().await?;

        let url = format!("{}{}", self.base_url, path);
        let mut query = self.base_params();
        query.extend_from_slice(params);

        debug!(message = "GET", url = %url);
        let res = self
            .http
            .get(&url)
            .header(AUTHORIZATION, header.as_str())
            .query(&query)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(Error::from_api_response(status, &body));
        }

        Ok(res.json::<T>().await?)
    }
}
