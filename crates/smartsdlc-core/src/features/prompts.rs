use crate::llm::ChatMessage;

use super::{BugFixInput, TestGenInput, TestReviewInput};

/// System prompt for SDLC sentence classification.
pub const CLASSIFY_SYSTEM_PROMPT: &str = "Classify each sentence into specific SDLC phases such as Requirements, Design, Development, Testing, or Deployment. \
Analyze the following text and for each sentence, identify which SDLC phase it belongs to. \
Format your response as: 'Sentence: [sentence text] | Phase: [SDLC Phase]' for each sentence, one per line. \
If a sentence doesn't clearly fit into any SDLC phase, classify it as 'General' or 'Other'.";

/// Builds the bug-fix conversation.
pub fn bug_fix_messages(input: &BugFixInput) -> Vec<ChatMessage> {
    let language = &input.programming_language;

    let system = format!(
        r#"You are an expert {language} programmer and debugging specialist. Your task is to analyze the provided code, identify bugs, and provide a fixed version. Please provide your response in the following format:

**FIXED CODE:**
[Insert the corrected code here]

**EXPLANATION:**
[Explain what the bugs were and how you fixed them]

Focus on:
- Syntax errors
- Logic errors
- Runtime errors
- Performance issues
- Best practices violations
- Security vulnerabilities
Provide clean, working code without any markdown formatting or code blocks."#
    );

    let mut user = format!("Code to fix:\n```{language}\n{}\n```", input.code);
    if let Some(error) = non_blank(&input.error_message) {
        user.push_str(&format!("\n\nError message encountered:\n{error}"));
    }
    if let Some(description) = non_blank(&input.description) {
        user.push_str(&format!("\n\nAdditional context:\n{description}"));
    }

    vec![ChatMessage::system(system), ChatMessage::user(user)]
}

/// Builds the code-generation conversation.
pub fn code_gen_messages(prompt: &str) -> Vec<ChatMessage> {
    let system = format!(
        "Generate only the implementation code (do not include test cases, do not wrap it in markdown like ```python``` and do not add explanations):\n{prompt}"
    );

    vec![ChatMessage::system(system), ChatMessage::user(prompt)]
}

/// Builds the test-generation conversation.
pub fn test_gen_messages(input: &TestGenInput) -> Vec<ChatMessage> {
    let language = &input.programming_language;
    let framework = framework_suffix(&input.test_framework);

    let system = format!(
        r#"You are an expert {language} testing specialist. Generate comprehensive test cases{framework} for the provided code. Include:
- Basic functionality tests
- Edge cases and boundary conditions
- Error handling tests
- Performance considerations
- Integration test suggestions
Provide clean, executable test code without markdown formatting."#
    );

    let mut user = format!(
        "Generate comprehensive test cases for this {language} code:\n```{language}\n{}\n```",
        input.code
    );
    if let Some(description) = non_blank(&input.description) {
        user.push_str(&format!("\n\nAdditional context:\n{description}"));
    }

    vec![ChatMessage::system(system), ChatMessage::user(user)]
}

/// Builds the test-review conversation.
pub fn test_review_messages(input: &TestReviewInput) -> Vec<ChatMessage> {
    let language = &input.programming_language;
    let framework = framework_suffix(&input.test_framework);

    let system = format!(
        r#"You are an expert {language} developer and testing specialist. Your task is to analyze the provided code and test cases, then provide comprehensive feedback and improvements. Please provide your response in the following format:

**TEST ANALYSIS:**
[Analyze the current test cases - what they cover, what they miss, quality assessment]

**IMPROVED TESTS:**
[Provide improved/additional test cases that address the gaps]

**COVERAGE SUGGESTIONS:**
[Suggest specific test scenarios that should be covered]

Focus on:
- Test coverage completeness
- Edge cases and boundary conditions
- Error handling scenarios
- Performance test considerations
- Test code quality and maintainability
- Best practices for the specified testing framework
- Mock/stub usage where appropriate
- Test data management
Provide clean, well-structured test code without markdown formatting."#
    );

    let mut user = format!(
        "Code to test:\n```{language}\n{}\n```\n\nExisting test cases{framework}:\n```{language}\n{}\n```",
        input.code, input.test_cases
    );
    if let Some(description) = non_blank(&input.description) {
        user.push_str(&format!("\n\nAdditional context:\n{description}"));
    }

    vec![ChatMessage::system(system), ChatMessage::user(user)]
}

/// Builds the chat conversation: the message alone, no system prompt.
pub fn chat_messages(message: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::user(message)]
}

/// Builds the SDLC classification conversation.
pub fn classification_messages(document_text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(CLASSIFY_SYSTEM_PROMPT),
        ChatMessage::user(format!("Text to classify:\n\n{document_text}")),
    ]
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn framework_suffix(framework: &Option<String>) -> String {
    non_blank(framework)
        .map(|f| format!(" using {f}"))
        .unwrap_or_default()
}
