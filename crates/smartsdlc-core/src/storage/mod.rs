mod error;
mod file;

pub use error::StorageError;
pub use file::FileFeedbackStore;

use crate::feedback::FeedbackRecord;

/// Trait for feedback storage backends.
///
/// The collection is append-only: records are never updated or removed.
pub trait FeedbackStore: Send + Sync {
    /// Appends a record to the collection.
    fn append(&self, record: &FeedbackRecord) -> Result<(), StorageError>;

    /// Loads every record in submission order.
    fn load_all(&self) -> Result<Vec<FeedbackRecord>, StorageError>;
}
