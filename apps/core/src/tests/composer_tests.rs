//! Reply Drafting Tests
//!
//! Full pipeline: form, validation, analysis, rendering.

use crate::agent::{generate_email_response, EmailAgent};
use crate::analysis::{Sentiment, Urgency};
use crate::composer::templates::{PERSONAL, PROFESSIONAL};
use crate::models::{EmailContext, ReplyForm, ReplyRequest};

fn form(json: serde_json::Value) -> ReplyForm {
    serde_json::from_value(json).unwrap()
}

#[cfg(test)]
mod end_to_end_tests {
    use super::*;

    #[test]
    fn test_urgent_professional_reply() {
        let request = form(serde_json::json!({
            "context": "professional",
            "emailBody": "This is urgent, please respond ASAP about the budget deadline!",
            "senderName": "Marie"
        }))
        .into_request()
        .unwrap();

        let generated = generate_email_response(&request);

        assert_eq!(generated.analysis.urgency, Urgency::High);
        assert_eq!(generated.analysis.sentiment, Sentiment::Neutral);
        assert_eq!(generated.analysis.keywords, vec!["budget", "deadline"]);
        assert!(generated.analysis.questions.is_empty());

        let expected = [
            "Bonjour Marie,",
            PROFESSIONAL.opening_prompt,
            "J'ai bien noté les points relatifs à : budget, deadline.",
            PROFESSIONAL.follow_up_urgent,
            PROFESSIONAL.closing,
        ]
        .join("\n\n");
        assert_eq!(generated.reply, expected);
        assert_eq!(generated.subject_suggestion, "Suite à votre message : Budget");
    }

    #[test]
    fn test_french_form_values() {
        let request = form(serde_json::json!({
            "context": "personnel",
            "senderName": "Marie Dupont",
            "subject": "Ce week-end",
            "emailBody": "Salut ! Tu es dispo ce week-end pour un dîner ? Je suis ravie de te revoir.",
            "desiredOutcome": "accepter pour samedi soir",
            "userSignature": "Bises, Jean"
        }))
        .into_request()
        .unwrap();

        assert_eq!(request.context, EmailContext::Personal);
        let generated = EmailAgent::new().generate_email_response(&request);

        assert_eq!(generated.analysis.sentiment, Sentiment::Positive);
        assert_eq!(generated.analysis.keywords, vec!["week-end", "dîner"]);
        assert_eq!(
            generated.analysis.questions,
            vec!["Tu es dispo ce week-end pour un dîner ?"]
        );

        assert!(generated.reply.starts_with("Salut Marie Dupont,\n\n"));
        assert!(generated.reply.contains(PERSONAL.opening_warm));
        assert!(generated
            .reply
            .contains("De mon côté, voilà ce que je te propose : accepter pour samedi soir."));
        assert!(generated.reply.ends_with("\n\nBises, Jean"));
        assert_eq!(generated.subject_suggestion, "Re: Ce week-end");
    }

    #[test]
    fn test_concerned_mail_gets_attentive_opening() {
        let request = ReplyRequest::new(
            EmailContext::Professional,
            "Je suis déçu par la qualité du rapport reçu.",
        );

        let generated = generate_email_response(&request);
        assert_eq!(generated.analysis.sentiment, Sentiment::Concerned);
        assert_eq!(generated.analysis.urgency, Urgency::Low);
        assert!(generated.reply.contains(PROFESSIONAL.opening_attentive));
        assert!(generated.reply.contains(PROFESSIONAL.follow_up));
    }

    #[test]
    fn test_reply_is_deterministic() {
        let request = ReplyRequest {
            sender_name: Some("Paul".to_string()),
            desired_outcome: Some("fixer une réunion".to_string()),
            ..ReplyRequest::new(
                EmailContext::Professional,
                "Où en est la facture ? Merci de me tenir informé.",
            )
        };

        let agent = EmailAgent::new();
        let first = agent.generate_email_response(&request);
        assert_eq!(agent.generate_email_response(&request), first);
        assert_eq!(generate_email_response(&request), first);
    }
}
