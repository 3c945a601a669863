//! Default values for SmartSDLC configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

use std::time::Duration;

// ============================================================================
// Upstream Defaults
// ============================================================================

/// Default model API base URL (watsonx.ai, us-south region).
pub const DEFAULT_BASE_URL: &str = "https://us-south.ml.cloud.ibm.com";

/// Default identity endpoint used to exchange the API key for a bearer token.
pub const DEFAULT_IDENTITY_URL: &str = "https://iam.cloud.ibm.com/identity/token";

/// Grant type sent to the identity endpoint.
pub const API_KEY_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// Default chat API version query parameter.
pub const DEFAULT_API_VERSION: &str = "2023-05-29";

/// Default model for the code-oriented features.
pub const DEFAULT_MODEL_ID: &str = "ibm/granite-3-2b-instruct";

/// Default model for the free-form chat feature.
pub const DEFAULT_CHAT_MODEL_ID: &str = "ibm/granite-3-2-8b-instruct";

// ============================================================================
// Feature Profiles
// ============================================================================

/// Generation settings for one feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureProfile {
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
    /// Use the chat model instead of the default model.
    pub chat_model: bool,
}

/// Low temperature for consistent fixes.
pub const BUG_FIX_PROFILE: FeatureProfile = FeatureProfile {
    temperature: 0.1,
    max_tokens: 3000,
    timeout: Duration::from_secs(120),
    chat_model: false,
};

pub const CODE_GEN_PROFILE: FeatureProfile = FeatureProfile {
    temperature: 0.2,
    max_tokens: 2000,
    timeout: Duration::from_secs(30),
    chat_model: false,
};

pub const TEST_GEN_PROFILE: FeatureProfile = FeatureProfile {
    temperature: 0.3,
    max_tokens: 3000,
    timeout: Duration::from_secs(120),
    chat_model: false,
};

pub const TEST_REVIEW_PROFILE: FeatureProfile = FeatureProfile {
    temperature: 0.2,
    max_tokens: 4000,
    timeout: Duration::from_secs(120),
    chat_model: false,
};

pub const CHAT_PROFILE: FeatureProfile = FeatureProfile {
    temperature: 0.0,
    max_tokens: 2000,
    timeout: Duration::from_secs(30),
    chat_model: true,
};

/// Low temperature for consistent classification.
pub const CLASSIFY_PROFILE: FeatureProfile = FeatureProfile {
    temperature: 0.1,
    max_tokens: 3000,
    timeout: Duration::from_secs(60),
    chat_model: false,
};

/// Timeout for the identity endpoint.
pub const TOKEN_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// Storage Defaults
// ============================================================================

/// Default data directory.
pub const DEFAULT_DATA_DIR: &str = "feedback_data";

/// Default feedback file name.
pub const DEFAULT_FEEDBACK_FILE: &str = "feedback.json";

// ============================================================================
// Server Defaults
// ============================================================================

pub const DEFAULT_HOST: &str = "127.0.0.1";

pub const DEFAULT_PORT: u16 = 8000;

/// Maximum accepted request body (PDF uploads included), 20 MB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "SmartSDLC";

// ============================================================================
// Validation Defaults
// ============================================================================

pub const MIN_NAME_LENGTH: usize = 2;

pub const MIN_FEEDBACK_LENGTH: usize = 10;

pub const MIN_RATING: i64 = 1;

pub const MAX_RATING: i64 = 5;
