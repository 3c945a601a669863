use std::time::Duration;

use crate::classify::ParsedClassification;
use crate::llm::ModelReply;
use crate::segment::{ParsedBugFix, ParsedTestReview};

/// Result of the bug-fix feature.
#[derive(Debug, Clone)]
pub struct BugFixOutcome {
    pub fix: ParsedBugFix,
    pub reply: ModelReply,
    /// Wall-clock time spent on the upstream round trip and parsing.
    pub processing_time: Duration,
}

/// Result of the code-generation feature.
#[derive(Debug, Clone)]
pub struct CodeGenOutcome {
    pub generated_code: String,
    pub reply: ModelReply,
}

/// Result of the test-generation feature.
#[derive(Debug, Clone)]
pub struct TestGenOutcome {
    /// Trimmed reply text.
    pub generated_tests: String,
    pub reply: ModelReply,
}

/// Result of the test-review feature.
#[derive(Debug, Clone)]
pub struct TestReviewOutcome {
    pub review: ParsedTestReview,
    pub reply: ModelReply,
}

/// Result of classifying a PDF document.
#[derive(Debug, Clone)]
pub struct ClassificationOutcome {
    pub extracted_text: String,
    pub parsed: ParsedClassification,
    pub reply: ModelReply,
}
