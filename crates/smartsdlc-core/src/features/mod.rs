mod outcome;
pub mod prompts;
mod runner;

pub use outcome::{
    BugFixOutcome, ClassificationOutcome, CodeGenOutcome, TestGenOutcome, TestReviewOutcome,
};
pub use runner::{FeatureError, FeatureRunner};

use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "python".to_string()
}

/// Input for the bug-fix feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BugFixInput {
    pub code: String,
    #[serde(default = "default_language")]
    pub programming_language: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Input for the test-generation feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestGenInput {
    pub code: String,
    #[serde(default = "default_language")]
    pub programming_language: String,
    /// e.g. "pytest", "unittest"
    #[serde(default)]
    pub test_framework: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Input for the test-review feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestReviewInput {
    pub code: String,
    pub test_cases: String,
    #[serde(default = "default_language")]
    pub programming_language: String,
    #[serde(default)]
    pub test_framework: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
