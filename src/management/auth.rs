use std::sync::Arc;

use reqwest::Client;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{
    Res,
    config::{DEFAULT_TOKEN_TTL, DEFAULT_TOKEN_URL},
    management::{Clock, CredentialStore, SystemClock},
    spotify,
    types::{AuthorizationHeader, Token},
};

/// Seconds added to "now" when checking expiry, to cover the gap between the
/// check and the request that follows it.
pub const EXPIRY_MARGIN: u64 = 1;

/// Owns the current bearer token and replaces it before it expires.
///
/// Build one per process and share it (behind an `Arc`) with every caller that
/// needs to authorize requests. The held token sits behind an async mutex that
/// stays locked for the whole issuance round trip, so concurrent callers that
/// find the token expired wait for a single exchange instead of each starting
/// their own.
///
/// A failed refresh leaves the previous token stored but it is never handed
/// out again; the next [`TokenSession::ensure_valid`] call retries the exchange.
pub struct TokenSession {
    credentials: CredentialStore,
    http: Client,
    token_url: String,
    ttl_seconds: u64,
    clock: Arc<dyn Clock>,
    token: Mutex<Option<Token>>,
}

impl TokenSession {
    pub fn new(credentials: CredentialStore, http: Client) -> Self {
        Self {
            credentials,
            http,
            token_url: DEFAULT_TOKEN_URL.to_string(),
            ttl_seconds: DEFAULT_TOKEN_TTL,
            clock: Arc::new(SystemClock),
            token: Mutex::new(None),
        }
    }

    /// Override the token endpoint (for testing with wiremock).
    pub fn with_token_url(mut self, url: &str) -> Self {
        self.token_url = url.to_string();
        self
    }

    /// Override how long a token is trusted after it was received.
    pub fn with_ttl(mut self, ttl_seconds: u64) -> Self {
        self.ttl_seconds = ttl_seconds;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Performs one client-credentials exchange and returns the new token.
    ///
    /// The session state is left untouched; `issued_at` is stamped with the
    /// client clock after the response arrived.
    pub async fn issue_token(&self) -> Res<Token> {
        let response = spotify::auth::request_client_credentials(
            &self.http,
            &self.token_url,
            &self.credentials.encoded_basic_auth(),
        )
        .await?;

        Ok(Token {
            access_token: response.access_token,
            token_type: response.token_type,
            issued_at: self.clock.now(),
            ttl_seconds: self.ttl_seconds,
        })
    }

    /// Returns an authorization header backed by a token that is valid right
    /// now, issuing or refreshing the token first when needed.
    ///
    /// Call this immediately before every request instead of holding on to
    /// the returned header.
    pub async fn ensure_valid(&self) -> Res<AuthorizationHeader> {
        let mut held = self.token.lock().await;

        if let Some(token) = held.as_ref() {
            let now = self.clock.now();
            if !token.is_expired(now, EXPIRY_MARGIN) {
                debug!(
                    message = "Using preexisting token",
                    expires_at = token.expires_at(),
                    now
                );
                return Ok(token.authorization_header());
            }
            debug!(
                message = "Existing token expired, refreshing",
                expires_at = token.expires_at(),
                now
            );
        } else {
            info!(message = "No token issued yet, requesting one");
        }

        let token = match self.issue_token().await {
            Ok(token) => token,
            Err(e) => {
                info!(
                    message = "Token issuance failed",
                    token_is_stale = held.is_some(),
                    error = %e
                );
                return Err(e);
            }
        };

        debug!(message = "Got new token", expires_at = token.expires_at());
        let header = token.authorization_header();
        *held = Some(token);

        Ok(header)
    }

    /// Snapshot of the currently held token, expired or not.
    pub async fn current_token(&self) -> Option<Token> {
        self.token.lock().await.clone()
    }
}
