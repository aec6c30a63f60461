// Prompt for the language-model fallback path. The prompt must carry the
// full raw document text and the user's literal question.

/// Fallback prompt template. Replace `{resume_text}` and `{question}`
/// before sending.
pub const ANSWER_PROMPT_TEMPLATE: &str =
    "Answer this question based on this resume: {resume_text}\n\nQuestion: {question}";

pub fn answer_prompt(resume_text: &str, question: &str) -> String {
    ANSWER_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{question}", question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_both_raw_text_and_question() {
        let prompt = answer_prompt("full resume text", "what is the latest job?");
        assert!(prompt.contains("full resume text"));
        assert!(prompt.contains("what is the latest job?"));
    }
}
