//! API request/response types for the HTTP server.
//!
//! Feature inputs (`BugFixInput`, `TestGenInput`, `TestReviewInput`) and
//! `FeedbackRequest` are deserialized directly from the core types; the
//! structs here cover the remaining request bodies and every response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use smartsdlc_core::{ParseWarning, SdlcClassification};

// =============================================================================
// Requests
// =============================================================================

/// Body of `POST /generate-code/`.
#[derive(Debug, Deserialize)]
pub struct CodeGenRequest {
    pub prompt: String,
}

/// Body of `POST /chat/`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

// =============================================================================
// Responses
// =============================================================================

#[derive(Debug, Serialize)]
pub struct BugFixResponse {
    pub original_code: String,
    pub fixed_code: String,
    pub explanation: String,
    pub programming_language: String,
    /// Seconds spent on the upstream call and parsing.
    pub processing_time: f64,
    pub raw_response: Value,
}

#[derive(Debug, Serialize)]
pub struct CodeGenResponse {
    pub generated_code: String,
}

#[derive(Debug, Serialize)]
pub struct TestGenResponse {
    pub original_code: String,
    pub generated_tests: String,
    pub programming_language: String,
    pub test_framework: String,
    pub message: String,
    pub raw_response: Value,
}

#[derive(Debug, Serialize)]
pub struct TestReviewResponse {
    pub original_code: String,
    pub original_tests: String,
    pub test_analysis: String,
    pub improved_tests: String,
    pub coverage_suggestions: String,
    pub programming_language: String,
    pub test_framework: String,
    pub raw_response: Value,
}

/// Response of `POST /classify-pdf-sdlc/`.
#[derive(Debug, Serialize)]
pub struct ClassificationResponse {
    pub extracted_text: String,
    /// The classifier reply as returned by the model.
    pub classified_sentences: String,
    /// Sentences grouped under all seven phase keys.
    pub phases: SdlcClassification,
    pub warnings: Vec<ParseWarning>,
    pub raw_response: Value,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub message: String,
    pub feedback_id: String,
    /// RFC 3339 submission time.
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}
