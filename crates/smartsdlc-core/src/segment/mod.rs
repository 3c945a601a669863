//! Splits free-text model replies into named sections.
//!
//! The model is asked to answer with literal headers such as
//! `**FIXED CODE:**`, but compliance is not guaranteed. A [`Segmenter`]
//! therefore tries an ordered list of strategies and keeps the first
//! result that has any content:
//!
//! 1. [`MarkerSplit`]: exact split on the literal headers
//! 2. [`KeywordScan`]: line scan driven by section keywords
//! 3. [`PositionalSplit`]: paragraphs assigned by position, or the whole
//!    reply dumped into one section

mod strategy;

pub use strategy::{KeywordScan, MarkerSplit, PositionalSplit, SegmentStrategy};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One expected section of a reply.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    /// Literal header that starts the section.
    pub marker: &'static str,
    /// Keyword groups; a line matches when every word of any group occurs
    /// in its lowercase form.
    pub keywords: &'static [&'static [&'static str]],
}

/// The expected shape of a reply.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub sections: &'static [SectionSpec],
    /// Minimum number of markers that must be found, in order.
    pub required_markers: usize,
    /// Whether paragraphs may be assigned by position.
    pub positional: bool,
    /// Section receiving the whole reply when nothing else matched.
    pub fallback_section: usize,
}

pub const BUG_FIX_LAYOUT: Layout = Layout {
    sections: &[
        SectionSpec {
            marker: "**FIXED CODE:**",
            keywords: &[&["fixed code"], &["corrected code"]],
        },
        SectionSpec {
            marker: "**EXPLANATION:**",
            keywords: &[&["explanation"], &["what", "fix"]],
        },
    ],
    required_markers: 2,
    positional: false,
    fallback_section: 1,
};

pub const TEST_REVIEW_LAYOUT: Layout = Layout {
    sections: &[
        SectionSpec {
            marker: "**TEST ANALYSIS:**",
            keywords: &[&["analysis"], &["current test"]],
        },
        SectionSpec {
            marker: "**IMPROVED TESTS:**",
            keywords: &[&["improved"], &["better test"], &["additional test"]],
        },
        SectionSpec {
            marker: "**COVERAGE SUGGESTIONS:**",
            keywords: &[&["coverage"], &["suggestion"], &["recommend"]],
        },
    ],
    required_markers: 1,
    positional: true,
    fallback_section: 0,
};

/// Result of segmenting a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmented {
    /// One entry per layout section, trimmed.
    pub sections: Vec<String>,
    /// Name of the strategy that produced the sections.
    pub strategy: &'static str,
}

/// Runs segmentation strategies in order until one yields content.
pub struct Segmenter {
    layout: Layout,
    strategies: Vec<Box<dyn SegmentStrategy>>,
}

impl Segmenter {
    /// Creates a segmenter with the default marker → keyword → positional ladder.
    pub fn new(layout: Layout) -> Self {
        Self::with_strategies(
            layout,
            vec![
                Box::new(MarkerSplit),
                Box::new(KeywordScan),
                Box::new(PositionalSplit),
            ],
        )
    }

    /// Creates a segmenter with a custom strategy list.
    pub fn with_strategies(layout: Layout, strategies: Vec<Box<dyn SegmentStrategy>>) -> Self {
        Self { layout, strategies }
    }

    /// Segments a reply. Never fails; an unusable reply yields empty sections.
    pub fn segment(&self, reply: &str) -> Segmented {
        for strategy in &self.strategies {
            if let Some(sections) = strategy.segment(&self.layout, reply) {
                if sections.iter().any(|s| !s.is_empty()) {
                    debug!(strategy = strategy.name(), "segmented model reply");
                    return Segmented {
                        sections,
                        strategy: strategy.name(),
                    };
                }
            }
        }

        Segmented {
            sections: vec![String::new(); self.layout.sections.len()],
            strategy: "none",
        }
    }
}

/// A bug-fix reply split into code and explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedBugFix {
    /// Never empty: falls back to the submitted code.
    pub fixed_code: String,
    pub explanation: String,
}

/// A test-review reply split into its three sections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedTestReview {
    pub test_analysis: String,
    pub improved_tests: String,
    pub coverage_suggestions: String,
}

/// Splits a bug-fix reply. `original_code` fills in for a missing fix.
pub fn parse_bug_fix(reply: &str, original_code: &str) -> ParsedBugFix {
    let mut sections = Segmenter::new(BUG_FIX_LAYOUT).segment(reply).sections.into_iter();
    let fixed_code = sections.next().unwrap_or_default();
    let explanation = sections.next().unwrap_or_default();

    ParsedBugFix {
        fixed_code: if fixed_code.is_empty() {
            original_code.to_string()
        } else {
            fixed_code
        },
        explanation,
    }
}

/// Splits a test-review reply.
pub fn parse_test_review(reply: &str) -> ParsedTestReview {
    let mut sections = Segmenter::new(TEST_REVIEW_LAYOUT).segment(reply).sections.into_iter();

    ParsedTestReview {
        test_analysis: sections.next().unwrap_or_default(),
        improved_tests: sections.next().unwrap_or_default(),
        coverage_suggestions: sections.next().unwrap_or_default(),
    }
}
