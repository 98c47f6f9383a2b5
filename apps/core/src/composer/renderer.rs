//! Reply Composer - Fills the register templates from an analysis.
//!
//! Paragraph order: greeting, opening, keywords, questions, desired outcome,
//! additional notes, follow-up, closing. Optional paragraphs are skipped when
//! their input is absent; the output depends on nothing but the arguments.

use super::templates::{Register, Tone, REPLY_MARKER, REPLY_SUBJECT};
use crate::analysis::{AnalysisResult, Urgency};
use crate::models::{GeneratedReply, ReplyRequest};

/// Keywords mentioned at most in the acknowledgment line
pub const MAX_KEYWORDS_MENTIONED: usize = 5;

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Template-based reply renderer
#[derive(Debug, Clone, Default)]
pub struct ReplyComposer;

impl ReplyComposer {
    pub fn new() -> Self {
        Self
    }

    /// Render the reply and subject suggestion for a request
    pub fn render(&self, request: &ReplyRequest, analysis: AnalysisResult) -> GeneratedReply {
        GeneratedReply {
            reply: self.compose_body(request, &analysis),
            subject_suggestion: self.suggest_subject(request, &analysis),
            analysis,
        }
    }

    /// The reply text
    pub fn compose_body(&self, request: &ReplyRequest, analysis: &AnalysisResult) -> String {
        let register = Register::for_context(request.context);
        let tone = Tone::select(analysis.sentiment, analysis.urgency);

        let mut paragraphs: Vec<String> = Vec::with_capacity(8);

        paragraphs.push(greeting(register, request));
        paragraphs.push(register.opening(tone).to_string());

        if !analysis.keywords.is_empty() {
            let mentioned: Vec<&str> = analysis
                .keywords
                .iter()
                .take(MAX_KEYWORDS_MENTIONED)
                .map(String::as_str)
                .collect();
            paragraphs.push(
                register
                    .keywords_line
                    .replace("{keywords}", &mentioned.join(", ")),
            );
        }

        if !analysis.questions.is_empty() {
            let intro = if analysis.questions.len() == 1 {
                register.question_intro_single
            } else {
                register.question_intro_multiple
            };

            let mut block = vec![intro.to_string()];
            block.extend(
                analysis
                    .questions
                    .iter()
                    .map(|q| register.question_item.replace("{question}", q)),
            );
            paragraphs.push(block.join("\n"));
        }

        if let Some(outcome) = present(&request.desired_outcome) {
            paragraphs.push(format!("{}{}", register.outcome_intro, as_sentence(outcome)));
        }

        if let Some(notes) = present(&request.additional_notes) {
            paragraphs.push(format!("{}{}", register.notes_intro, as_sentence(notes)));
        }

        let follow_up = match analysis.urgency {
            Urgency::High => register.follow_up_urgent,
            Urgency::Moderate | Urgency::Low => register.follow_up,
        };
        paragraphs.push(follow_up.to_string());

        // The signature carries its own sign-off
        let closing = present(&request.user_signature).unwrap_or(register.closing);
        paragraphs.push(closing.to_string());

        paragraphs.join(PARAGRAPH_SEPARATOR)
    }

    /// A subject line for the reply
    pub fn suggest_subject(&self, request: &ReplyRequest, analysis: &AnalysisResult) -> String {
        if let Some(subject) = present(&request.subject) {
            return if is_reply_subject(subject) {
                subject.to_string()
            } else {
                REPLY_SUBJECT.replace("{subject}", subject)
            };
        }

        let register = Register::for_context(request.context);
        match analysis.top_keyword() {
            Some(keyword) => register
                .subject_from_keyword
                .replace("{keyword}", &capitalize(keyword)),
            None => register.subject_fallback.to_string(),
        }
    }
}

/// "Re: x" or the French "Re : x", in any case
fn is_reply_subject(subject: &str) -> bool {
    subject
        .to_lowercase()
        .strip_prefix(REPLY_MARKER)
        .is_some_and(|rest| rest.trim_start().starts_with(':'))
}

fn greeting(register: &Register, request: &ReplyRequest) -> String {
    present(&request.sender_name)
        .or_else(|| present(&request.recipient_name))
        .map(|name| register.greeting_named.replace("{name}", name))
        .unwrap_or_else(|| register.greeting_generic.to_string())
}

/// Trimmed value of an optional field, `None` when blank
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// End a fragment with punctuation if the user did not
fn as_sentence(text: &str) -> String {
    let text = text.trim();
    if text.ends_with(['.', '!', '?', '…']) {
        text.to_string()
    } else {
        format!("{}.", text)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
