//! Intent Router / Answer Composer.
//!
//! A strict, ordered list of keyword-triggered intents over the parsed
//! resume; the first intent whose triggers match AND whose backing data is
//! non-empty wins. Everything else falls through to the language-model
//! delegate with the full raw text plus the question. Every failure mode
//! degrades to a returned string — no error crosses this boundary.

pub mod handlers;
pub mod prompts;

use tracing::{debug, warn};

use crate::llm_client::{AnswerDelegate, LlmError};
use crate::resume::contact::extract_contact;
use crate::resume::{extract_roles, most_recent_roles, ParsedResume, Role};

/// Returned when a question arrives before any document has been parsed.
pub const NO_DOCUMENT_ANSWER: &str =
    "No resume has been uploaded yet. Please upload one and ask again.";

/// Returned when neither the intents nor the delegate produced usable text.
pub const NO_ANSWER: &str = "I couldn't find an answer. Please ask a different question.";

/// Returned when the delegate call itself fails (network/auth/timeout).
pub const DELEGATE_FAILED_ANSWER: &str =
    "The language model could not be reached. Please check the API key or network.";

fn contains_any(question: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|t| question.contains(t))
}

fn bulleted(header: &str, items: &[String]) -> String {
    format!("{header}\n- {}", items.join("\n- "))
}

fn role_lines(roles: &[Role]) -> Vec<String> {
    roles.iter().map(|r| r.full_text.clone()).collect()
}

/// Answers a free-text question about the parsed resume.
///
/// `parsed = None` means no document has been uploaded yet; the precondition
/// check lives here so callers never attempt extraction on absent data.
pub async fn answer_question(
    question: &str,
    parsed: Option<&ParsedResume>,
    delegate: &dyn AnswerDelegate,
) -> String {
    let Some(parsed) = parsed else {
        return NO_DOCUMENT_ANSWER.to_string();
    };

    let q = question.to_lowercase();
    let mut answer = String::new();

    // 1. Most recent role(s)
    if contains_any(&q, &["last position", "most recent role", "latest job"]) {
        let latest = most_recent_roles(extract_roles(parsed));
        if !latest.is_empty() {
            answer = bulleted("Most recent role(s):", &role_lines(&latest));
        }
    }

    // 2. All roles
    if answer.is_empty() && contains_any(&q, &["all roles", "work experience", "job history"]) {
        let roles = extract_roles(parsed);
        if !roles.is_empty() {
            answer = bulleted("Work experience:", &role_lines(&roles));
        }
    }

    // 3. Skills
    if answer.is_empty() && contains_any(&q, &["skills", "technologies", "tools"]) {
        if let Some(lines) = parsed.section("skills").filter(|l| !l.is_empty()) {
            answer = bulleted("Skills:", lines);
        }
    }

    // 4. Education
    if answer.is_empty() && contains_any(&q, &["education", "study", "degree"]) {
        if let Some(lines) = parsed.section("education").filter(|l| !l.is_empty()) {
            answer = bulleted("Education:", lines);
        }
    }

    // 5. Projects
    if answer.is_empty() && contains_any(&q, &["project", "portfolio"]) {
        if let Some(lines) = parsed.section("projects").filter(|l| !l.is_empty()) {
            answer = bulleted("Projects:", lines);
        }
    }

    // 6. Summary — prioritized lookup: "summary" first, then "objective"
    if answer.is_empty() && contains_any(&q, &["summary", "objective", "about myself"]) {
        if let Some(lines) = parsed
            .first_present(&["summary", "objective"])
            .filter(|l| !l.is_empty())
        {
            answer = format!("Summary:\n{}", lines.join(" "));
        }
    }

    // 7. Contact — prioritized lookup: "contact" first, then "misc".
    // A present container with zero pattern matches leaves the answer
    // empty; the delegate check below then governs what happens.
    if answer.is_empty() && contains_any(&q, &["contact", "email", "phone", "portfolio"]) {
        if let Some(lines) = parsed.first_present(&["contact", "misc"]) {
            let info = extract_contact(&lines.join(" "));
            if !info.is_empty() {
                answer = info.to_answer();
            }
        }
    }

    // 8. Fallback to the language-model delegate
    if answer.is_empty() {
        debug!("no intent matched, delegating to language model");
        let prompt = prompts::answer_prompt(&parsed.raw_text, question);
        answer = match delegate.complete(&prompt).await {
            Ok(text) => text,
            Err(LlmError::EmptyContent) => String::new(),
            Err(e) => {
                warn!("delegate call failed: {e}");
                DELEGATE_FAILED_ANSWER.to_string()
            }
        };
    }

    // 9. Final fallback
    if answer.trim().is_empty() {
        NO_ANSWER.to_string()
    } else {
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::parse_document_text;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    enum Reply {
        Text(&'static str),
        Empty,
        Fail,
    }

    struct MockDelegate {
        reply: Reply,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl MockDelegate {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AnswerDelegate for MockDelegate {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            match self.reply {
                Reply::Text(t) => Ok(t.to_string()),
                Reply::Empty => Err(LlmError::EmptyContent),
                Reply::Fail => Err(LlmError::Api {
                    status: 500,
                    message: "boom".to_string(),
                }),
            }
        }
    }

    fn fixture() -> ParsedResume {
        parse_document_text(
            "John Doe\n\
             a.b@x.com +1 415-555-0100 https://a.dev\n\
             Summary\n\
             Builds reliable backend services.\n\
             Work Experience\n\
             Software Engineer\n\
             Acme Inc\n\
             March 2021 - Present\n\
             Intern\n\
             Beta Co\n\
             June 2019 - August 2019\n\
             Skills\n\
             Rust\n\
             TypeScript\n\
             Education\n\
             B.Sc. Computer Science, 2019\n\
             Projects\n\
             Resume chatbot\n",
        )
    }

    #[tokio::test]
    async fn test_most_recent_role_intent_returns_single_ranked_role() {
        let parsed = fixture();
        let delegate = MockDelegate::new(Reply::Fail);
        let answer = answer_question("what is the most recent role?", Some(&parsed), &delegate).await;

        assert!(answer.contains("Software Engineer – Acme Inc – March 2021 - Present"));
        assert_eq!(
            answer.lines().filter(|l| l.starts_with("- ")).count(),
            1,
            "only the open-ended role is most recent"
        );
        assert_eq!(delegate.call_count(), 0, "intent hit must not delegate");
    }

    #[tokio::test]
    async fn test_work_experience_intent_lists_all_roles_in_extraction_order() {
        let parsed = fixture();
        let delegate = MockDelegate::new(Reply::Fail);
        let answer = answer_question("show me your work experience", Some(&parsed), &delegate).await;

        let bullets: Vec<&str> = answer.lines().filter(|l| l.starts_with("- ")).collect();
        assert_eq!(bullets.len(), 2);
        assert!(bullets[0].contains("Software Engineer – Acme Inc – March 2021 - Present"));
        assert!(bullets[1].contains("Intern – Beta Co – June 2019 - August 2019"));
    }

    #[tokio::test]
    async fn test_skills_intent_lists_section_lines() {
        let parsed = fixture();
        let delegate = MockDelegate::new(Reply::Fail);
        let answer = answer_question("which skills do you have?", Some(&parsed), &delegate).await;
        assert_eq!(answer, "Skills:\n- Rust\n- TypeScript");
    }

    #[tokio::test]
    async fn test_education_intent_triggers_on_study() {
        let parsed = fixture();
        let delegate = MockDelegate::new(Reply::Fail);
        let answer = answer_question("what did you study?", Some(&parsed), &delegate).await;
        assert_eq!(answer, "Education:\n- B.Sc. Computer Science, 2019");
    }

    #[tokio::test]
    async fn test_summary_intent_joins_lines_with_spaces() {
        let parsed = fixture();
        let delegate = MockDelegate::new(Reply::Fail);
        let answer = answer_question("give me a summary", Some(&parsed), &delegate).await;
        assert_eq!(answer, "Summary:\nBuilds reliable backend services.");
    }

    #[tokio::test]
    async fn test_portfolio_prefers_projects_over_contact() {
        let parsed = fixture();
        let delegate = MockDelegate::new(Reply::Fail);
        let answer = answer_question("show me your portfolio", Some(&parsed), &delegate).await;
        assert_eq!(answer, "Projects:\n- Resume chatbot");
    }

    #[tokio::test]
    async fn test_portfolio_falls_through_to_contact_when_projects_absent() {
        let parsed = parse_document_text("John Doe\nhttps://a.dev\n");
        let delegate = MockDelegate::new(Reply::Fail);
        let answer = answer_question("link to your portfolio?", Some(&parsed), &delegate).await;
        assert_eq!(answer, "Portfolio: https://a.dev");
        assert_eq!(delegate.call_count(), 0);
    }

    #[tokio::test]
    async fn test_contact_intent_reports_email_phone_url_in_order() {
        let parsed = fixture();
        let delegate = MockDelegate::new(Reply::Fail);
        let answer = answer_question("how can I contact you?", Some(&parsed), &delegate).await;
        assert_eq!(
            answer,
            "Email: a.b@x.com\nPhone: +1 415-555-0100\nPortfolio: https://a.dev"
        );
    }

    #[tokio::test]
    async fn test_contact_container_with_no_matches_still_delegates() {
        let parsed = parse_document_text("Contact\nask around for me\n");
        let delegate = MockDelegate::new(Reply::Text("ask the front desk"));
        let answer = answer_question("what is your phone number?", Some(&parsed), &delegate).await;
        assert_eq!(answer, "ask the front desk");
        assert_eq!(delegate.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unmatched_question_delegates_exactly_once_with_full_context() {
        let parsed = fixture();
        let delegate = MockDelegate::new(Reply::Text("a generated answer"));
        let answer = answer_question("tell me something surprising", Some(&parsed), &delegate).await;

        assert_eq!(answer, "a generated answer");
        assert_eq!(delegate.call_count(), 1);

        let prompt = delegate.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("tell me something surprising"), "prompt carries the literal question");
        assert!(prompt.contains(&parsed.raw_text), "prompt carries the full raw text");
    }

    #[tokio::test]
    async fn test_trigger_hit_with_empty_backing_data_delegates() {
        let parsed = parse_document_text("Skills\n");
        let delegate = MockDelegate::new(Reply::Text("no skills listed"));
        let answer = answer_question("what are your skills?", Some(&parsed), &delegate).await;
        assert_eq!(answer, "no skills listed");
        assert_eq!(delegate.call_count(), 1);
    }

    #[tokio::test]
    async fn test_delegate_failure_degrades_to_fixed_error_string() {
        let parsed = fixture();
        let delegate = MockDelegate::new(Reply::Fail);
        let answer = answer_question("unmatchable question", Some(&parsed), &delegate).await;
        assert_eq!(answer, DELEGATE_FAILED_ANSWER);
    }

    #[tokio::test]
    async fn test_empty_delegate_text_yields_no_answer_message() {
        let parsed = fixture();
        let delegate = MockDelegate::new(Reply::Empty);
        let answer = answer_question("unmatchable question", Some(&parsed), &delegate).await;
        assert_eq!(answer, NO_ANSWER);
    }

    #[tokio::test]
    async fn test_missing_document_short_circuits_before_any_extraction() {
        let delegate = MockDelegate::new(Reply::Fail);
        let answer = answer_question("what are your skills?", None, &delegate).await;
        assert_eq!(answer, NO_DOCUMENT_ANSWER);
        assert_eq!(delegate.call_count(), 0);
    }
}
