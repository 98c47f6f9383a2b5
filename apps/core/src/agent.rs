//! Email Agent - analysis followed by rendering.

use tracing::info;

use crate::analysis::EmailAnalyzer;
use crate::composer::ReplyComposer;
use crate::models::{GeneratedReply, ReplyRequest};

/// Drafts replies to received emails
#[derive(Debug, Clone, Default)]
pub struct EmailAgent {
    analyzer: EmailAnalyzer,
    composer: ReplyComposer,
}

impl EmailAgent {
    pub fn new() -> Self {
        Self::with_analyzer(EmailAnalyzer::new())
    }

    pub fn with_analyzer(analyzer: EmailAnalyzer) -> Self {
        Self {
            analyzer,
            composer: ReplyComposer::new(),
        }
    }

    /// Analyze the received email and draft a reply.
    ///
    /// Never fails: the request is expected to have passed validation.
    pub fn generate_email_response(&self, request: &ReplyRequest) -> GeneratedReply {
        let analysis = self.analyzer.analyze(&request.email_body);
        let generated = self.composer.render(request, analysis);

        info!(
            context = %request.context,
            sentiment = %generated.analysis.sentiment,
            urgency = %generated.analysis.urgency,
            keywords = generated.analysis.keywords.len(),
            questions = generated.analysis.questions.len(),
            reply_chars = generated.reply.chars().count(),
            "Reply drafted"
        );

        generated
    }
}

/// Draft a reply with the built-in lexicons and templates
pub fn generate_email_response(request: &ReplyRequest) -> GeneratedReply {
    EmailAgent::new().generate_email_response(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Urgency;
    use crate::models::EmailContext;

    #[test]
    fn test_generate_uses_body_analysis() {
        let agent = EmailAgent::new();
        let request = ReplyRequest::new(
            EmailContext::Personal,
            "Coucou ! On organise un dîner samedi, tu viens ?",
        );

        let generated = agent.generate_email_response(&request);
        assert_eq!(generated.analysis.keywords, vec!["dîner"]);
        assert_eq!(
            generated.analysis.questions,
            vec!["On organise un dîner samedi, tu viens ?"]
        );
        assert_eq!(generated.analysis.urgency, Urgency::Low);
        assert!(generated.reply.starts_with("Salut,"));
        assert_eq!(generated.subject_suggestion, "À propos de : Dîner");
    }
}
