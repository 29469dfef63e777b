use reqwest::{Client, header::AUTHORIZATION};

use crate::{Error, Res, types::TokenResponse};

/// Exchanges application credentials for an access token.
///
/// Sends `grant_type=client_credentials` to the token endpoint with the
/// pre-encoded Basic credentials. Transport failures come back as
/// [`Error::Network`]; a non-success status or a body without a usable
/// `access_token`/`token_type` comes back as [`Error::Auth`].
///
/// # Arguments
///
/// * `client` - Shared HTTP client, already configured with a timeout
/// * `token_url` - Token endpoint, normally `https://accounts.spotify.com/api/token`
/// * `basic` - Base64 of `"<client_id>:<client_secret>"`
pub async fn request_client_credentials(
    client: &Client,
    token_url: &str,
    basic: &str,
) -> Res<TokenResponse> {
    let res = client
        .post(token_url)
        .header(AUTHORIZATION, format!("Basic {basic}"))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(Error::Network)?;

    let status = res.status();
    let body = res.text().await.map_err(Error::Network)?;

    if !status.is_success() {
        return Err(Error::from_auth_response(status, &body));
    }

    let token: TokenResponse = serde_json::from_str(&body)
        .map_err(|e| Error::Auth(format!("malformed token response: {e}")))?;

    if token.access_token.is_empty() {
        return Err(Error::Auth("token response has an empty access_token".to_string()));
    }
    if token.token_type.is_empty() {
        return Err(Error::Auth("token response has an empty token_type".to_string()));
    }

    Ok(token)
}
