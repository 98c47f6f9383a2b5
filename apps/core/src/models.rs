use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use crate::analysis::AnalysisResult;
use crate::error::{
    AppError, EMAIL_BODY_TOO_LONG_MESSAGE, EMAIL_BODY_TOO_SHORT_MESSAGE, INVALID_CONTEXT_MESSAGE,
    MALFORMED_REQUEST_MESSAGE,
};

/// Minimum number of characters in the email body, after trimming.
pub const MIN_EMAIL_BODY_CHARS: usize = 10;
/// Maximum number of characters in the email body.
pub const MAX_EMAIL_BODY_CHARS: usize = 20_000;

/// Register of the correspondence: decides formal or familiar phrasing.
///
/// Deserialization goes through [`FromStr`], so JSON and form values accept
/// the same spellings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailContext {
    #[default]
    Professional,
    Personal,
}

impl EmailContext {
    pub fn label(&self) -> &'static str {
        match self {
            EmailContext::Professional => "professional",
            EmailContext::Personal => "personal",
        }
    }
}

impl fmt::Display for EmailContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl<'de> Deserialize<'de> for EmailContext {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for EmailContext {
    type Err = AppError;

    /// Accepts the English values and the French values of the web form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "professional" | "professionnel" => Ok(EmailContext::Professional),
            "personal" | "personnel" => Ok(EmailContext::Personal),
            _ => Err(AppError::InvalidInput(INVALID_CONTEXT_MESSAGE.to_string())),
        }
    }
}

/// A validated request for a reply draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    pub context: EmailContext,
    /// Author of the received email, greeted in the reply.
    #[serde(default)]
    pub sender_name: Option<String>,
    /// The person being answered, used when no sender name is given.
    #[serde(default)]
    pub recipient_name: Option<String>,
    /// Subject of the received email.
    #[serde(default)]
    pub subject: Option<String>,
    /// The received email.
    pub email_body: String,
    /// What the reply should steer toward.
    #[serde(default)]
    pub desired_outcome: Option<String>,
    /// A supporting point to weave into the reply.
    #[serde(default)]
    pub additional_notes: Option<String>,
    /// Closing block, sign-off included.
    #[serde(default)]
    pub user_signature: Option<String>,
}

impl ReplyRequest {
    pub fn new(context: EmailContext, email_body: impl Into<String>) -> Self {
        Self {
            context,
            email_body: email_body.into(),
            ..Default::default()
        }
    }
}

/// The raw form as posted by the page.
///
/// Every field may be missing or of the wrong JSON type; optional fields that
/// are not strings are dropped, required ones fail validation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReplyForm {
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(custom(function = "validate_context"))]
    pub context: String,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub sender_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub recipient_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(custom(function = "validate_email_body"))]
    pub email_body: String,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub desired_outcome: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub additional_notes: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub user_signature: Option<String>,
}

impl ReplyForm {
    /// Read a form from a parsed JSON payload. Anything but an object is malformed.
    pub fn from_json(value: serde_json::Value) -> Result<Self, AppError> {
        if !value.is_object() {
            return Err(AppError::InvalidInput(MALFORMED_REQUEST_MESSAGE.to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Validate the form and turn it into a request for the core.
    pub fn into_request(self) -> Result<ReplyRequest, AppError> {
        self.validate()?;
        let context = self.context.parse::<EmailContext>()?;

        Ok(ReplyRequest {
            context,
            sender_name: non_blank(self.sender_name),
            recipient_name: non_blank(self.recipient_name),
            subject: non_blank(self.subject),
            email_body: self.email_body,
            desired_outcome: non_blank(self.desired_outcome),
            additional_notes: non_blank(self.additional_notes),
            user_signature: non_blank(self.user_signature),
        })
    }
}

/// A generated reply draft with the analysis it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedReply {
    pub reply: String,
    pub subject_suggestion: String,
    pub analysis: AnalysisResult,
}

fn validate_email_body(body: &str) -> Result<(), ValidationError> {
    let length = body.trim().chars().count();

    if length < MIN_EMAIL_BODY_CHARS {
        let mut err = ValidationError::new("email_body_too_short");
        err.message = Some(EMAIL_BODY_TOO_SHORT_MESSAGE.into());
        return Err(err);
    }

    if length > MAX_EMAIL_BODY_CHARS {
        let mut err = ValidationError::new("email_body_too_long");
        err.message = Some(EMAIL_BODY_TOO_LONG_MESSAGE.into());
        return Err(err);
    }

    Ok(())
}

fn validate_context(context: &str) -> Result<(), ValidationError> {
    if context.parse::<EmailContext>().is_ok() {
        Ok(())
    } else {
        let mut err = ValidationError::new("context_invalid");
        err.message = Some(INVALID_CONTEXT_MESSAGE.into());
        Err(err)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_optional(deserializer)?.unwrap_or_default())
}

fn lenient_optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
