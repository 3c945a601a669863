mod error;
mod token;
mod watsonx;

pub use error::LLMError;
pub use token::TokenProvider;
pub use watsonx::WatsonxClient;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{FeatureProfile, UpstreamConfig};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message in a model request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub top_p: f32,
}

impl GenerationParams {
    pub fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            top_p: 1.0,
        }
    }
}

/// A fully built chat completion request.
///
/// Built once per call and consumed by [`ModelGateway::send`].
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub project_id: String,
    pub model_id: String,
    pub messages: Vec<ChatMessage>,
    pub params: GenerationParams,
    pub timeout: Duration,
}

impl ModelRequest {
    /// Builds a request for a feature profile against the given upstream.
    pub fn for_profile(
        upstream: &UpstreamConfig,
        profile: &FeatureProfile,
        messages: Vec<ChatMessage>,
    ) -> Self {
        Self {
            project_id: upstream.project_id.clone(),
            model_id: upstream.model_for(profile).to_string(),
            messages,
            params: GenerationParams::new(profile.temperature, profile.max_tokens),
            timeout: profile.timeout,
        }
    }
}

/// The upstream reply: the raw JSON body plus the extracted message text.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReply {
    pub raw: Value,
    pub content: String,
}

impl ModelReply {
    /// Wraps a raw chat completion body, pulling out
    /// `choices[0].message.content` (empty when missing).
    pub fn from_raw(raw: Value) -> Self {
        let content = raw
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self { raw, content }
    }
}

/// Trait for hosted chat completion backends.
///
/// The feature runner and HTTP layer only see this trait, so tests can
/// swap in a canned gateway.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Sends one request and returns the reply.
    async fn send(&self, request: ModelRequest) -> Result<ModelReply, LLMError>;
}

/// Blanket implementation for boxed trait objects.
#[async_trait]
impl ModelGateway for Box<dyn ModelGateway> {
    async fn send(&self, request: ModelRequest) -> Result<ModelReply, LLMError> {
        (**self).send(request).await
    }
}
