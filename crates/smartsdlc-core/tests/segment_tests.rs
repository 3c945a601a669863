use smartsdlc_core::segment::{
    KeywordScan, PositionalSplit, Segmenter, BUG_FIX_LAYOUT, TEST_REVIEW_LAYOUT,
};
use smartsdlc_core::{parse_bug_fix, parse_test_review};

const ORIGINAL: &str = "def add(a, b):\n    return a - b";

mod bug_fix {
    use super::*;

    #[test]
    fn test_markers() {
        let reply = "**FIXED CODE:**\ndef add(a, b):\n    return a + b\n\n**EXPLANATION:**\nThe operator was wrong.";
        let parsed = parse_bug_fix(reply, ORIGINAL);

        assert_eq!(parsed.fixed_code, "def add(a, b):\n    return a + b");
        assert_eq!(parsed.explanation, "The operator was wrong.");
    }

    #[test]
    fn test_preamble_before_markers_is_dropped() {
        let reply = "Sure, here you go.\n**FIXED CODE:**\nx = 1\n**EXPLANATION:**\nInitialised x.";
        let parsed = parse_bug_fix(reply, ORIGINAL);

        assert_eq!(parsed.fixed_code, "x = 1");
        assert_eq!(parsed.explanation, "Initialised x.");
    }

    #[test]
    fn test_keyword_headers() {
        let reply = "Here is the corrected code:\nx = 1\n\nWhat I fixed:\nTypo in assignment.";
        let parsed = parse_bug_fix(reply, ORIGINAL);

        assert_eq!(parsed.fixed_code, "x = 1");
        assert_eq!(parsed.explanation, "Typo in assignment.");
    }

    #[test]
    fn test_unstructured_reply_becomes_explanation() {
        let reply = "  The subtraction should be an addition.  ";
        let parsed = parse_bug_fix(reply, ORIGINAL);

        assert_eq!(parsed.fixed_code, ORIGINAL);
        assert_eq!(parsed.explanation, "The subtraction should be an addition.");
    }

    #[test]
    fn test_empty_fixed_section_falls_back_to_original() {
        let reply = "**FIXED CODE:**\n\n**EXPLANATION:**\nNo change needed.";
        let parsed = parse_bug_fix(reply, ORIGINAL);

        assert_eq!(parsed.fixed_code, ORIGINAL);
        assert_eq!(parsed.explanation, "No change needed.");
    }

    #[test]
    fn test_empty_reply() {
        let parsed = parse_bug_fix("", ORIGINAL);
        assert_eq!(parsed.fixed_code, ORIGINAL);
        assert_eq!(parsed.explanation, "");
    }
}

mod test_review {
    use super::*;

    #[test]
    fn test_markers() {
        let reply = "**TEST ANALYSIS:**\nOnly the happy path is tested.\n\
                     **IMPROVED TESTS:**\ndef test_empty():\n    assert total([]) == 0\n\
                     **COVERAGE SUGGESTIONS:**\nAdd negative numbers.";
        let review = parse_test_review(reply);

        assert_eq!(review.test_analysis, "Only the happy path is tested.");
        assert_eq!(
            review.improved_tests,
            "def test_empty():\n    assert total([]) == 0"
        );
        assert_eq!(review.coverage_suggestions, "Add negative numbers.");
    }

    #[test]
    fn test_single_marker_is_enough() {
        let review = parse_test_review("**TEST ANALYSIS:**\nThe tests are thin.");

        assert_eq!(review.test_analysis, "The tests are thin.");
        assert_eq!(review.improved_tests, "");
        assert_eq!(review.coverage_suggestions, "");
    }

    #[test]
    fn test_keyword_headers() {
        let reply = "Analysis of current tests:\nOnly happy path.\n\
                     Improved tests:\ndef test_empty(): pass\n\
                     Coverage suggestions:\nAdd edge cases.";
        let review = parse_test_review(reply);

        assert_eq!(review.test_analysis, "Only happy path.");
        assert_eq!(review.improved_tests, "def test_empty(): pass");
        assert_eq!(review.coverage_suggestions, "Add edge cases.");
    }

    #[test]
    fn test_positional_paragraphs() {
        let reply = "The tests only check the happy path.\n\n\
                     def test_empty():\n    assert total([]) == 0\n\n\
                     Consider property-based tests.\n\n\
                     Also test negative numbers.";
        let review = parse_test_review(reply);

        assert_eq!(review.test_analysis, "The tests only check the happy path.");
        assert_eq!(
            review.improved_tests,
            "def test_empty():\n    assert total([]) == 0"
        );
        assert_eq!(
            review.coverage_suggestions,
            "Consider property-based tests.\n\nAlso test negative numbers."
        );
    }

    #[test]
    fn test_few_paragraphs_become_analysis() {
        let reply = "Looks fine overall.\n\nNothing to add.";
        let review = parse_test_review(reply);

        assert_eq!(review.test_analysis, "Looks fine overall.\n\nNothing to add.");
        assert_eq!(review.improved_tests, "");
        assert_eq!(review.coverage_suggestions, "");
    }
}

mod segmenter {
    use super::*;

    #[test]
    fn test_reports_winning_strategy() {
        let segmenter = Segmenter::new(TEST_REVIEW_LAYOUT);

        assert_eq!(segmenter.segment("**TEST ANALYSIS:**\nok").strategy, "marker");
        assert_eq!(segmenter.segment("Analysis:\nok").strategy, "keyword");
        assert_eq!(segmenter.segment("just prose").strategy, "positional");
        assert_eq!(segmenter.segment("").strategy, "none");
    }

    #[test]
    fn test_custom_ladder() {
        let segmenter = Segmenter::with_strategies(BUG_FIX_LAYOUT, vec![Box::new(PositionalSplit)]);
        let segmented = segmenter.segment("**FIXED CODE:**\nx\n**EXPLANATION:**\ny");

        assert_eq!(segmented.strategy, "positional");
        assert_eq!(segmented.sections[0], "");
        assert_eq!(segmented.sections[1], "**FIXED CODE:**\nx\n**EXPLANATION:**\ny");
    }

    #[test]
    fn test_keyword_scan_ignores_text_before_first_header() {
        let segmenter = Segmenter::with_strategies(BUG_FIX_LAYOUT, vec![Box::new(KeywordScan)]);
        let segmented = segmenter.segment("Preamble line\nFixed code:\nx = 2");

        assert_eq!(segmented.sections, vec!["x = 2", ""]);
    }
}
