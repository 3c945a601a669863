use thiserror::Error;

/// Errors that can occur while talking to the identity or model endpoints.
#[derive(Debug, Error)]
pub enum LLMError {
    #[error("Missing API key. Set the API_KEY environment variable.")]
    MissingApiKey,

    #[error("Token request failed: {status} - {body}")]
    Auth { status: u16, body: String },

    #[error("Upstream model API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("Could not reach upstream: {0}")]
    Transport(String),

    #[error("Failed to parse upstream response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for LLMError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LLMError::InvalidResponse(err.to_string())
        } else {
            LLMError::Transport(err.to_string())
        }
    }
}
