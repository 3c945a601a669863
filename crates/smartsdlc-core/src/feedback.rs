use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::config::{MAX_RATING, MIN_FEEDBACK_LENGTH, MIN_NAME_LENGTH, MIN_RATING};
use crate::storage::{FeedbackStore, StorageError};

/// A stored piece of user feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Unique identifier for this record
    pub id: String,
    /// Submitter name, trimmed
    pub name: String,
    /// Feedback text, trimmed
    pub feedback: String,
    /// Rating between 1 and 5
    pub rating: u8,
    /// When the feedback was submitted
    pub timestamp: DateTime<Utc>,
}

impl FeedbackRecord {
    /// The timestamp in the same RFC 3339 form the record serializes to.
    pub fn timestamp_string(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

/// Feedback as submitted, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub name: String,
    pub feedback: String,
    pub rating: i64,
}

/// Rejected user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must be at least {} characters long", MIN_NAME_LENGTH)]
    NameTooShort,

    #[error("Feedback must be at least {} characters long", MIN_FEEDBACK_LENGTH)]
    FeedbackTooShort,

    #[error("Rating must be between {} and {}", MIN_RATING, MAX_RATING)]
    RatingOutOfRange(i64),
}

impl FeedbackRequest {
    /// Validates the request and turns it into a new record with a fresh id
    /// and timestamp.
    pub fn into_record(self) -> Result<FeedbackRecord, ValidationError> {
        let name = self.name.trim();
        if name.chars().count() < MIN_NAME_LENGTH {
            return Err(ValidationError::NameTooShort);
        }

        let feedback = self.feedback.trim();
        if feedback.chars().count() < MIN_FEEDBACK_LENGTH {
            return Err(ValidationError::FeedbackTooShort);
        }

        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(ValidationError::RatingOutOfRange(self.rating));
        }

        Ok(FeedbackRecord {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            feedback: feedback.to_string(),
            rating: self.rating as u8,
            timestamp: Utc::now(),
        })
    }
}

/// Errors from submitting feedback.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Error submitting feedback: {0}")]
    Storage(#[from] StorageError),
}

/// Validates and persists a submission, returning the stored record.
pub fn submit_feedback<S: FeedbackStore + ?Sized>(
    store: &S,
    request: FeedbackRequest,
) -> Result<FeedbackRecord, FeedbackError> {
    let record = request.into_record()?;
    store.append(&record)?;
    info!(id = %record.id, rating = record.rating, "feedback submitted");
    Ok(record)
}
