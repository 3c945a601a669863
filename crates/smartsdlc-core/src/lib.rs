pub mod classify;
pub mod config;
pub mod features;
pub mod feedback;
pub mod llm;
pub mod pdf;
pub mod phase;
pub mod segment;
pub mod storage;

pub use classify::{parse_classification, ParseWarning, ParsedClassification, SdlcClassification};
pub use config::{Config, ServerConfig, StorageConfig, UpstreamConfig};
pub use features::{BugFixInput, FeatureError, FeatureRunner, TestGenInput, TestReviewInput};
pub use feedback::{submit_feedback, FeedbackError, FeedbackRecord, FeedbackRequest, ValidationError};
pub use llm::{ChatMessage, LLMError, ModelGateway, ModelReply, ModelRequest, WatsonxClient};
pub use pdf::DocumentError;
pub use phase::SdlcPhase;
pub use segment::{parse_bug_fix, parse_test_review, ParsedBugFix, ParsedTestReview};
pub use storage::{FeedbackStore, FileFeedbackStore, StorageError};
