use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use smartsdlc_core::{
    submit_feedback, FeedbackError, FeedbackRequest, FeedbackStore, FileFeedbackStore,
    StorageConfig, ValidationError,
};
use tempfile::TempDir;

fn request(name: &str, feedback: &str, rating: i64) -> FeedbackRequest {
    FeedbackRequest {
        name: name.to_string(),
        feedback: feedback.to_string(),
        rating,
    }
}

fn create_test_store() -> (TempDir, FileFeedbackStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = FileFeedbackStore::new(temp_dir.path().join("feedback.json"));
    (temp_dir, store)
}

#[test]
fn test_missing_file_loads_empty() {
    let (_temp, store) = create_test_store();
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn test_blank_file_loads_empty() {
    let (_temp, store) = create_test_store();
    std::fs::write(store.path(), "  \n").unwrap();
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn test_append_preserves_order() {
    let (_temp, store) = create_test_store();

    let first = submit_feedback(&store, request("Ada", "The bug fixer is great", 5)).unwrap();
    let second = submit_feedback(&store, request("Linus", "Test review could be better", 3)).unwrap();

    let records = store.load_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], first);
    assert_eq!(records[1], second);
    assert_ne!(records[0].id, records[1].id);
}

#[test]
fn test_file_is_json_array() {
    let (_temp, store) = create_test_store();
    submit_feedback(&store, request("Ada", "Helpful classification", 4)).unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Ada");
    assert_eq!(entries[0]["rating"], 4);
    assert!(entries[0]["timestamp"].is_string());
}

#[test]
fn test_creates_missing_directories() {
    let temp_dir = TempDir::new().unwrap();
    let config = StorageConfig {
        data_dir: temp_dir.path().join("nested/data").to_string_lossy().into_owned(),
        feedback_file: "feedback.json".to_string(),
    };
    let store = FileFeedbackStore::with_config(&config);

    submit_feedback(&store, request("Ada", "Works on a fresh install", 5)).unwrap();

    assert!(temp_dir.path().join("nested/data/feedback.json").exists());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let (_temp, store) = create_test_store();
    std::fs::write(store.path(), "{not json").unwrap();

    assert!(store.load_all().is_err());

    let result = submit_feedback(&store, request("Ada", "Should not clobber the file", 5));
    assert!(matches!(result, Err(FeedbackError::Storage(_))));
    // The corrupt file is left untouched
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "{not json");
}

#[test]
fn test_invalid_feedback_is_not_stored() {
    let (_temp, store) = create_test_store();

    for rating in [0, 6, -1] {
        let result = submit_feedback(&store, request("Ada", "Rating is out of range", rating));
        assert!(matches!(
            result,
            Err(FeedbackError::Validation(ValidationError::RatingOutOfRange(r))) if r == rating
        ));
    }

    let result = submit_feedback(&store, request("A", "Name is way too short", 3));
    assert!(matches!(
        result,
        Err(FeedbackError::Validation(ValidationError::NameTooShort))
    ));

    let result = submit_feedback(&store, request("Ada", "   short   ", 3));
    assert!(matches!(
        result,
        Err(FeedbackError::Validation(ValidationError::FeedbackTooShort))
    ));

    assert!(store.load_all().unwrap().is_empty());
    assert!(!store.path().exists());
}

#[test]
fn test_concurrent_appends_are_not_lost() {
    let (_temp, store) = create_test_store();
    let store = Arc::new(store);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                submit_feedback(
                    store.as_ref(),
                    request(&format!("user-{i}"), "Concurrent submission", 4),
                )
                .unwrap()
            })
        })
        .collect();

    let submitted: HashSet<String> = handles
        .into_iter()
        .map(|h| h.join().unwrap().id)
        .collect();

    let stored: HashSet<String> = store.load_all().unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(stored.len(), 8);
    assert_eq!(stored, submitted);
}
