//! HTTP route handlers.
//!
//! Handlers are kept thin: they unpack the request, call the feature runner
//! or feedback store, and shape the JSON response.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use serde_json::Value;
use tracing::debug;

use smartsdlc_core::config::SERVICE_NAME;
use smartsdlc_core::pdf::is_pdf_filename;
use smartsdlc_core::{
    submit_feedback, BugFixInput, FeedbackRecord, FeedbackRequest, TestGenInput, TestReviewInput,
};

use super::error::ApiError;
use super::models::{
    BugFixResponse, ChatRequest, ClassificationResponse, CodeGenRequest, CodeGenResponse,
    FeedbackResponse, HealthResponse, TestGenResponse, TestReviewResponse,
};
use super::AppState;

/// Echoed back when the caller did not name a test framework.
const DEFAULT_TEST_FRAMEWORK: &str = "standard";

/// Multipart field carrying the uploaded document.
const UPLOAD_FIELD: &str = "file";

// =============================================================================
// Assistant features
// =============================================================================

/// POST `/fix-bug/`
pub async fn fix_bug(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BugFixInput>, JsonRejection>,
) -> Result<Json<BugFixResponse>, ApiError> {
    let Json(input) = payload?;
    let outcome = state.runner.fix_bug(&input).await?;

    Ok(Json(BugFixResponse {
        original_code: input.code,
        fixed_code: outcome.fix.fixed_code,
        explanation: outcome.fix.explanation,
        programming_language: input.programming_language,
        processing_time: outcome.processing_time.as_secs_f64(),
        raw_response: outcome.reply.raw,
    }))
}

/// POST `/generate-code/`
///
/// Errors use the `{"error": msg}` body.
pub async fn generate_code(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CodeGenRequest>, JsonRejection>,
) -> Result<Json<CodeGenResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::from(e).as_error_body())?;
    let outcome = state
        .runner
        .generate_code(&req.prompt)
        .await
        .map_err(|e| ApiError::from(e).as_error_body())?;

    Ok(Json(CodeGenResponse {
        generated_code: outcome.generated_code,
    }))
}

/// POST `/generate-test-cases/`
pub async fn generate_test_cases(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TestGenInput>, JsonRejection>,
) -> Result<Json<TestGenResponse>, ApiError> {
    let Json(input) = payload?;
    let outcome = state.runner.generate_tests(&input).await?;

    Ok(Json(TestGenResponse {
        original_code: input.code,
        generated_tests: outcome.generated_tests,
        programming_language: input.programming_language,
        test_framework: framework_or_default(input.test_framework),
        message: "Test cases generated successfully".to_string(),
        raw_response: outcome.reply.raw,
    }))
}

/// POST `/check-test-cases/`
pub async fn check_test_cases(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TestReviewInput>, JsonRejection>,
) -> Result<Json<TestReviewResponse>, ApiError> {
    let Json(input) = payload?;
    let outcome = state.runner.review_tests(&input).await?;
    let review = outcome.review;

    Ok(Json(TestReviewResponse {
        original_code: input.code,
        original_tests: input.test_cases,
        test_analysis: review.test_analysis,
        improved_tests: review.improved_tests,
        coverage_suggestions: review.coverage_suggestions,
        programming_language: input.programming_language,
        test_framework: framework_or_default(input.test_framework),
        raw_response: outcome.reply.raw,
    }))
}

/// POST `/chat/` - returns the upstream completion body unchanged.
///
/// Errors use the `{"error": msg}` body.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::from(e).as_error_body())?;
    let reply = state
        .runner
        .chat(&req.message)
        .await
        .map_err(|e| ApiError::from(e).as_error_body())?;

    Ok(Json(reply.raw))
}

/// POST `/classify-pdf-sdlc/` - multipart upload with a `file` field.
pub async fn classify_pdf(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ClassificationResponse>, ApiError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if !is_pdf_filename(&file_name) {
            return Err(ApiError::bad_request("Only PDF files are allowed"));
        }

        let bytes = field.bytes().await?;
        debug!(file = %file_name, size = bytes.len(), "received upload");
        upload = Some(bytes.to_vec());
        break;
    }

    let bytes = upload.ok_or_else(|| ApiError::bad_request("No file uploaded"))?;
    let outcome = state.runner.classify_document(bytes).await?;

    Ok(Json(ClassificationResponse {
        extracted_text: outcome.extracted_text,
        classified_sentences: outcome.reply.content,
        phases: outcome.parsed.classification,
        warnings: outcome.parsed.warnings,
        raw_response: outcome.reply.raw,
    }))
}

// =============================================================================
// Feedback
// =============================================================================

/// POST `/api/feedback`
pub async fn submit(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let Json(request) = payload?;
    let store = Arc::clone(&state.feedback);

    // File I/O stays off the async workers
    let record = tokio::task::spawn_blocking(move || submit_feedback(store.as_ref(), request))
        .await
        .map_err(|e| ApiError::internal(format!("Error submitting feedback: {}", e)))??;

    Ok(Json(FeedbackResponse {
        message: "Feedback submitted successfully".to_string(),
        feedback_id: record.id.clone(),
        timestamp: record.timestamp_string(),
    }))
}

/// GET `/api/feedback`
pub async fn list_feedback(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FeedbackRecord>>, ApiError> {
    let store = Arc::clone(&state.feedback);

    let records = tokio::task::spawn_blocking(move || store.load_all())
        .await
        .map_err(|e| ApiError::internal(format!("Error loading feedback: {}", e)))?
        .map_err(|e| ApiError::internal(format!("Error loading feedback: {}", e)))?;

    Ok(Json(records))
}

// =============================================================================
// Health
// =============================================================================

/// GET `/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

fn framework_or_default(framework: Option<String>) -> String {
    framework
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TEST_FRAMEWORK.to_string())
}
