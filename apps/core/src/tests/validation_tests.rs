//! Validation Tests
//!
//! Form checks and the messages they surface.

use crate::error::{
    AppError, EMAIL_BODY_TOO_LONG_MESSAGE, EMAIL_BODY_TOO_SHORT_MESSAGE, INVALID_CONTEXT_MESSAGE,
};
use crate::models::{EmailContext, ReplyForm, MAX_EMAIL_BODY_CHARS};

fn parse(json: &str) -> ReplyForm {
    serde_json::from_str(json).unwrap()
}

fn rejection(form: ReplyForm) -> String {
    match form.into_request() {
        Err(AppError::InvalidInput(msg)) => msg,
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}

#[cfg(test)]
mod body_tests {
    use super::*;

    #[test]
    fn test_short_body_rejected() {
        let form = parse(r#"{"context": "professional", "emailBody": "  court   "}"#);
        assert_eq!(rejection(form), EMAIL_BODY_TOO_SHORT_MESSAGE);
    }

    #[test]
    fn test_missing_body_rejected() {
        let form = parse(r#"{"context": "professional"}"#);
        assert_eq!(rejection(form), EMAIL_BODY_TOO_SHORT_MESSAGE);
    }

    #[test]
    fn test_non_string_body_rejected() {
        let form = parse(r#"{"context": "professional", "emailBody": 12345678901}"#);
        assert_eq!(rejection(form), EMAIL_BODY_TOO_SHORT_MESSAGE);
    }

    #[test]
    fn test_length_is_counted_in_characters() {
        // Ten accented characters, twenty bytes
        let form = parse(r#"{"context": "personal", "emailBody": "éééééééééé"}"#);
        assert!(form.into_request().is_ok());
    }

    #[test]
    fn test_long_body_rejected() {
        let form = ReplyForm {
            context: "professional".to_string(),
            email_body: "a".repeat(MAX_EMAIL_BODY_CHARS + 1),
            ..Default::default()
        };
        assert_eq!(rejection(form), EMAIL_BODY_TOO_LONG_MESSAGE);
    }
}

#[cfg(test)]
mod context_tests {
    use super::*;

    #[test]
    fn test_unknown_context_rejected() {
        let form = parse(r#"{"context": "familial", "emailBody": "Bonjour, comment vas-tu ?"}"#);
        assert_eq!(rejection(form), INVALID_CONTEXT_MESSAGE);
    }

    #[test]
    fn test_missing_context_rejected() {
        let form = parse(r#"{"emailBody": "Bonjour, comment vas-tu ?"}"#);
        assert_eq!(rejection(form), INVALID_CONTEXT_MESSAGE);
    }

    #[test]
    fn test_body_error_reported_first() {
        let form = parse(r#"{"context": "familial", "emailBody": "court"}"#);
        assert_eq!(rejection(form), EMAIL_BODY_TOO_SHORT_MESSAGE);
    }
}

#[cfg(test)]
mod optional_field_tests {
    use super::*;

    #[test]
    fn test_optional_fields_normalized() {
        let form = parse(
            r#"{
                "context": "Professionnel",
                "emailBody": "Pouvez-vous m'envoyer le devis ?",
                "senderName": "  Marie  ",
                "recipientName": "",
                "subject": 42,
                "desiredOutcome": null,
                "additionalNotes": "   "
            }"#,
        );

        let request = form.into_request().unwrap();
        assert_eq!(request.context, EmailContext::Professional);
        assert_eq!(request.sender_name.as_deref(), Some("Marie"));
        assert_eq!(request.recipient_name, None);
        assert_eq!(request.subject, None);
        assert_eq!(request.desired_outcome, None);
        assert_eq!(request.additional_notes, None);
        assert_eq!(request.user_signature, None);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let form = parse(
            r#"{"context": "personal", "emailBody": "On se voit demain ?", "mood": "happy"}"#,
        );
        assert!(form.into_request().is_ok());
    }
}
