use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::UpstreamConfig;

use super::{ChatMessage, LLMError, ModelGateway, ModelReply, ModelRequest, TokenProvider};

/// watsonx.ai chat API client.
///
/// Every call fetches a bearer token through [`TokenProvider`] and then
/// posts one chat request. No retries.
pub struct WatsonxClient {
    chat_url: String,
    tokens: TokenProvider,
    client: Client,
}

impl WatsonxClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `chat_url` - Full chat endpoint URL including the `version` query
    /// * `tokens` - Token provider used before each call
    pub fn new(chat_url: impl Into<String>, tokens: TokenProvider) -> Self {
        Self {
            chat_url: chat_url.into(),
            tokens,
            client: Client::new(),
        }
    }

    /// Creates a client from upstream configuration, sharing one HTTP client
    /// between the token provider and the chat calls.
    pub fn from_config(config: &UpstreamConfig) -> Self {
        let client = Client::new();
        let tokens = TokenProvider::new(
            client.clone(),
            &config.identity_url,
            config.api_key.clone().unwrap_or_default(),
        );

        Self {
            chat_url: config.chat_url(),
            tokens,
            client,
        }
    }

    async fn send_request(&self, request: ModelRequest) -> Result<ModelReply, LLMError> {
        let token = self.tokens.get_token().await?;

        let body = ChatRequest {
            project_id: &request.project_id,
            model_id: &request.model_id,
            messages: &request.messages,
            frequency_penalty: request.params.frequency_penalty,
            presence_penalty: request.params.presence_penalty,
            max_tokens: request.params.max_tokens,
            temperature: request.params.temperature,
            top_p: request.params.top_p,
        };

        debug!(
            model = %request.model_id,
            messages = request.messages.len(),
            "sending chat request"
        );

        let response = self
            .client
            .post(&self.chat_url)
            .timeout(request.timeout)
            .header("accept", "application/json")
            .header("authorization", format!("Bearer {}", token))
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "chat request failed");
            return Err(LLMError::Upstream {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let raw: Value = response
            .json()
            .await
            .map_err(|e| LLMError::InvalidResponse(e.to_string()))?;

        Ok(ModelReply::from_raw(raw))
    }
}

#[async_trait]
impl ModelGateway for WatsonxClient {
    async fn send(&self, request: ModelRequest) -> Result<ModelReply, LLMError> {
        self.send_request(request).await
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    project_id: &'a str,
    model_id: &'a str,
    messages: &'a [ChatMessage],
    frequency_penalty: f32,
    presence_penalty: f32,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}
