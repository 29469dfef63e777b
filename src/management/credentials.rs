use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::{Error, Res};

/// Application credentials for the client-credentials grant.
///
/// Parsed once at startup and never mutated, so a shared reference can be
/// handed to any number of callers.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialStore {
    client_id: String,
    client_secret: String,
}

impl CredentialStore {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Res<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();

        if client_id.trim().is_empty() {
            return Err(Error::Configuration("client id is empty".to_string()));
        }
        if client_secret.trim().is_empty() {
            return Err(Error::Configuration("client secret is empty".to_string()));
        }

        Ok(Self {
            client_id,
            client_secret,
        })
    }

    /// Parses `"<client_id>:<client_secret>"`. The secret may itself contain
    /// colons; only the first one separates the two halves.
    pub fn parse(raw: &str) -> Res<Self> {
        let Some((client_id, client_secret)) = raw.trim().split_once(':') else {
            return Err(Error::Configuration(
                "credentials must look like \"<client_id>:<client_secret>\"".to_string(),
            ));
        };

        Self::new(client_id, client_secret)
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Base64 of `"<client_id>:<client_secret>"`, ready for
    /// `Authorization: Basic <value>`.
    pub fn encoded_basic_auth(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret))
    }
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}
