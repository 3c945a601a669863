use std::time::Instant;

use thiserror::Error;
use tracing::debug;

use crate::classify::parse_classification;
use crate::config::{
    FeatureProfile, UpstreamConfig, BUG_FIX_PROFILE, CHAT_PROFILE, CLASSIFY_PROFILE,
    CODE_GEN_PROFILE, TEST_GEN_PROFILE, TEST_REVIEW_PROFILE,
};
use crate::features::outcome::{
    BugFixOutcome, ClassificationOutcome, CodeGenOutcome, TestGenOutcome, TestReviewOutcome,
};
use crate::features::prompts::{
    bug_fix_messages, chat_messages, classification_messages, code_gen_messages,
    test_gen_messages, test_review_messages,
};
use crate::features::{BugFixInput, TestGenInput, TestReviewInput};
use crate::llm::{ChatMessage, LLMError, ModelGateway, ModelReply, ModelRequest};
use crate::pdf::{extract_text, DocumentError};
use crate::segment::{parse_bug_fix, parse_test_review};

/// Runs the assistant features against a model gateway.
///
/// Each call is one independent round trip: validate input, build the
/// prompt, send it, and post-process the reply.
pub struct FeatureRunner<G: ModelGateway> {
    gateway: G,
    upstream: UpstreamConfig,
}

impl<G: ModelGateway> FeatureRunner<G> {
    /// Creates a new feature runner.
    pub fn new(gateway: G, upstream: UpstreamConfig) -> Self {
        Self { gateway, upstream }
    }

    /// The gateway this runner sends requests through.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Proposes a fix for buggy code.
    pub async fn fix_bug(&self, input: &BugFixInput) -> Result<BugFixOutcome, FeatureError> {
        require("Code input", &input.code)?;

        let started = Instant::now();
        let reply = self.call(&BUG_FIX_PROFILE, bug_fix_messages(input)).await?;
        let fix = parse_bug_fix(&reply.content, &input.code);

        Ok(BugFixOutcome {
            fix,
            reply,
            processing_time: started.elapsed(),
        })
    }

    /// Generates implementation code from a description.
    pub async fn generate_code(&self, prompt: &str) -> Result<CodeGenOutcome, FeatureError> {
        require("Prompt", prompt)?;

        let reply = self.call(&CODE_GEN_PROFILE, code_gen_messages(prompt)).await?;

        Ok(CodeGenOutcome {
            generated_code: reply.content.clone(),
            reply,
        })
    }

    /// Generates test cases for code.
    pub async fn generate_tests(&self, input: &TestGenInput) -> Result<TestGenOutcome, FeatureError> {
        require("Code input", &input.code)?;

        let reply = self.call(&TEST_GEN_PROFILE, test_gen_messages(input)).await?;

        Ok(TestGenOutcome {
            generated_tests: reply.content.trim().to_string(),
            reply,
        })
    }

    /// Reviews existing tests and suggests improvements.
    pub async fn review_tests(&self, input: &TestReviewInput) -> Result<TestReviewOutcome, FeatureError> {
        require("Code input", &input.code)?;
        require("Test cases", &input.test_cases)?;

        let reply = self.call(&TEST_REVIEW_PROFILE, test_review_messages(input)).await?;
        let review = parse_test_review(&reply.content);

        Ok(TestReviewOutcome { review, reply })
    }

    /// Sends a single chat message and returns the reply untouched.
    pub async fn chat(&self, message: &str) -> Result<ModelReply, FeatureError> {
        require("Message", message)?;

        self.call(&CHAT_PROFILE, chat_messages(message)).await
    }

    /// Extracts text from a PDF and classifies its sentences by SDLC phase.
    pub async fn classify_document(&self, pdf_bytes: Vec<u8>) -> Result<ClassificationOutcome, FeatureError> {
        let extracted_text = tokio::task::spawn_blocking(move || extract_text(&pdf_bytes))
            .await
            .map_err(|e| DocumentError::InvalidDocument(e.to_string()))??;

        let reply = self
            .call(&CLASSIFY_PROFILE, classification_messages(&extracted_text))
            .await?;
        let parsed = parse_classification(&reply.content);

        debug!(
            sentences = parsed.classification.len(),
            warnings = parsed.warnings.len(),
            "classified document"
        );

        Ok(ClassificationOutcome {
            extracted_text,
            parsed,
            reply,
        })
    }

    async fn call(
        &self,
        profile: &FeatureProfile,
        messages: Vec<ChatMessage>,
    ) -> Result<ModelReply, FeatureError> {
        let request = ModelRequest::for_profile(&self.upstream, profile, messages);
        Ok(self.gateway.send(request).await?)
    }
}

fn require(field: &str, value: &str) -> Result<(), FeatureError> {
    if value.trim().is_empty() {
        return Err(FeatureError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Errors that can occur while running a feature.
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("{0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    LLM(#[from] LLMError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}
