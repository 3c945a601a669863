//! Parses `Sentence: ... | Phase: ...` lines out of a classifier reply.

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::phase::SdlcPhase;

/// Sentences grouped by SDLC phase.
///
/// Every phase is always present, possibly with no sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SdlcClassification {
    buckets: BTreeMap<SdlcPhase, Vec<String>>,
}

impl Default for SdlcClassification {
    fn default() -> Self {
        Self {
            buckets: SdlcPhase::ALL.iter().map(|p| (*p, Vec::new())).collect(),
        }
    }
}

// Phases missing from the input come back as empty buckets.
impl<'de> Deserialize<'de> for SdlcClassification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let buckets = BTreeMap::<SdlcPhase, Vec<String>>::deserialize(deserializer)?;
        let mut classification = Self::default();
        classification.buckets.extend(buckets);
        Ok(classification)
    }
}

impl SdlcClassification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sentence to a phase bucket.
    pub fn push(&mut self, phase: SdlcPhase, sentence: impl Into<String>) {
        self.buckets.entry(phase).or_default().push(sentence.into());
    }

    /// Sentences for one phase, in reply order.
    pub fn sentences(&self, phase: SdlcPhase) -> &[String] {
        self.buckets.get(&phase).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterates phases in display order with their sentences.
    pub fn iter(&self) -> impl Iterator<Item = (SdlcPhase, &[String])> {
        self.buckets.iter().map(|(p, s)| (*p, s.as_slice()))
    }

    /// Total number of classified sentences.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A non-blank line that did not match the expected format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// 1-based line number in the reply.
    pub line_number: usize,
    pub line: String,
}

/// Result of parsing a classifier reply. Partial results are normal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedClassification {
    pub classification: SdlcClassification,
    pub warnings: Vec<ParseWarning>,
}

/// `[N. ]Sentence: <text> | Phase: <label>`, case-insensitive.
const PHASE_LINE_PATTERN: &str =
    r"(?i)^\s*(?:\d+\.\s*)?sentence:\s*(?P<sentence>.+?)\s*\|\s*phase:\s*(?P<phase>.+?)\s*$";

/// Parses a classifier reply into phase buckets.
///
/// Never fails: lines that do not match are returned as warnings.
pub fn parse_classification(text: &str) -> ParsedClassification {
    let mut parsed = ParsedClassification::default();

    let re = match Regex::new(PHASE_LINE_PATTERN) {
        Ok(r) => r,
        Err(_) => return parsed,
    };

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match re.captures(line) {
            Some(caps) => {
                let sentence = caps["sentence"].trim();
                let label = caps["phase"].trim_matches(|c: char| c == '*' || c == '.' || c.is_whitespace());
                parsed
                    .classification
                    .push(SdlcPhase::from_label(label), sentence);
            }
            None => {
                warn!(line_number = idx + 1, "unparseable classification line");
                parsed.warnings.push(ParseWarning {
                    line_number: idx + 1,
                    line: line.to_string(),
                });
            }
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_phases_present() {
        let classification = SdlcClassification::new();
        assert_eq!(classification.iter().count(), 7);
        assert!(classification.is_empty());
    }

    #[test]
    fn test_decorated_phase_label() {
        let parsed = parse_classification("Sentence: Ship it. | Phase: **Deployment**.");
        assert_eq!(
            parsed.classification.sentences(SdlcPhase::Deployment),
            ["Ship it."]
        );
    }

    #[test]
    fn test_serializes_with_lowercase_keys() {
        let value = serde_json::to_value(SdlcClassification::new()).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 7);
        assert!(value["requirements"].as_array().unwrap().is_empty());
        assert!(value["other"].as_array().unwrap().is_empty());
    }
}
