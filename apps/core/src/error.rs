use thiserror::Error;

/// Message shown when the body is missing or too short.
pub const EMAIL_BODY_TOO_SHORT_MESSAGE: &str =
    "Le contenu du mail doit comporter au moins 10 caractères.";
/// Message shown when the body exceeds the accepted size.
pub const EMAIL_BODY_TOO_LONG_MESSAGE: &str =
    "Le contenu du mail ne doit pas dépasser 20 000 caractères.";
/// Message shown when the context is not one of the two accepted values.
pub const INVALID_CONTEXT_MESSAGE: &str =
    "Le contexte doit être 'professionnel' ou 'personnel'.";
/// Message shown when the payload is not a JSON object.
pub const MALFORMED_REQUEST_MESSAGE: &str = "Requête invalide : données manquantes.";
/// Generic message returned for any internal failure.
pub const INTERNAL_FAILURE_MESSAGE: &str =
    "Une erreur est survenue lors de la génération de la réponse. Merci de réessayer.";

/// Validation codes, in the order their messages are reported.
pub(crate) const VALIDATION_CODE_PRIORITY: &[&str] = &[
    "email_body_too_short",
    "email_body_too_long",
    "context_invalid",
];

/// Application-wide error type.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Input rejected before reaching the core; the message is user-facing.
    #[error("{0}")]
    InvalidInput(String),

    /// Unexpected failure while processing; details are logged, never returned.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Configuration-related errors (e.g. malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// The message safe to show to the caller
    pub fn public_message(&self) -> &str {
        match self {
            AppError::InvalidInput(msg) => msg,
            AppError::Internal(_) | AppError::Config(_) => INTERNAL_FAILURE_MESSAGE,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(_: serde_json::Error) -> Self {
        AppError::InvalidInput(MALFORMED_REQUEST_MESSAGE.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let all: Vec<validator::ValidationError> = errors
            .field_errors()
            .into_values()
            .flat_map(|errs| errs.iter().cloned())
            .collect();

        let selected = VALIDATION_CODE_PRIORITY
            .iter()
            .find_map(|code| all.iter().find(|e| e.code == *code))
            .or_else(|| all.first());

        let message = selected
            .and_then(|e| e.message.as_ref())
            .map(|m| m.to_string())
            .unwrap_or_else(|| MALFORMED_REQUEST_MESSAGE.to_string());

        AppError::InvalidInput(message)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Internal(format!("Lexicon compilation failed: {}", err))
    }
}
