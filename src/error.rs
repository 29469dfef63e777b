//! Error taxonomy shared by the library and the binary.
//!
//! Credential problems, token endpoint rejections and transport failures while
//! talking to the token endpoint are kept apart so the user can tell a bad
//! secret from an unreachable server. Resource requests get their own variants.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Maximum length for response bodies quoted in error messages.
const MAX_ERROR_BODY_LENGTH: usize = 300;

#[derive(Error, Debug)]
pub enum Error {
    /// Credentials or settings are missing or malformed. No request was made.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The token endpoint answered but refused the exchange or sent garbage.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The token endpoint could not be reached at all.
    #[error("could not reach auth server: {0}")]
    Network(#[source] reqwest::Error),

    /// A resource endpoint answered with a non-success status.
    #[error("Spotify API returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    /// Transport or decoding failure on a resource request.
    #[error("request to Spotify API failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// `{"error": "invalid_client", "error_description": "Invalid client"}`
#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    error: String,
    error_description: Option<String>,
}

/// `{"error": {"status": 404, "message": "Not found."}}`
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl Error {
    fn truncate_body(body: &str) -> String {
        let body = body.trim();
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }

        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
    }

    /// Builds an [`Error::Auth`] from a rejected token exchange, preferring the
    /// server's own description of what went wrong.
    pub fn from_auth_response(status: StatusCode, body: &str) -> Self {
        let detail = match serde_json::from_str::<AuthErrorBody>(body) {
            Ok(AuthErrorBody {
                error,
                error_description: Some(description),
            }) => format!("{error}: {description}"),
            Ok(AuthErrorBody { error, .. }) => error,
            Err(_) if body.trim().is_empty() => "no details given".to_string(),
            Err(_) => Self::truncate_body(body),
        };

        Error::Auth(format!("token endpoint returned {status} ({detail})"))
    }

    /// Builds an [`Error::Api`] from a failed resource request.
    pub fn from_api_response(status: StatusCode, body: &str) -> Self {
        let message = match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => parsed.error.message,
            Err(_) => Self::truncate_body(body),
        };

        Error::Api { status, message }
    }
}
