use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{API_KEY_GRANT_TYPE, TOKEN_TIMEOUT};

use super::LLMError;

/// Exchanges the long-lived API key for a short-lived bearer token.
///
/// Tokens are not cached: every upstream call fetches a fresh one.
#[derive(Clone)]
pub struct TokenProvider {
    api_key: String,
    identity_url: String,
    client: Client,
}

impl TokenProvider {
    pub fn new(client: Client, identity_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            identity_url: identity_url.into(),
            client,
        }
    }

    /// Requests a bearer token from the identity endpoint.
    pub async fn get_token(&self) -> Result<String, LLMError> {
        if self.api_key.trim().is_empty() {
            return Err(LLMError::MissingApiKey);
        }

        debug!(url = %self.identity_url, "requesting bearer token");

        let response = self
            .client
            .post(&self.identity_url)
            .timeout(TOKEN_TIMEOUT)
            .form(&[
                ("grant_type", API_KEY_GRANT_TYPE),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "token request rejected");
            return Err(LLMError::Auth {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| LLMError::InvalidResponse(e.to_string()))?;

        Ok(token.access_token)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}
