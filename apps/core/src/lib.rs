//! Mailwise core: drafts replies to received emails.
//!
//! A received email is analyzed with fixed lexicons (keywords, sentiment,
//! urgency, questions) and the findings are rendered into a French reply in
//! a professional or personal register. The `http` module exposes the
//! pipeline as a JSON service.

pub mod agent;
pub mod analysis;
pub mod composer;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod telemetry;

pub use agent::{generate_email_response, EmailAgent};
pub use analysis::{analyze, AnalysisResult, Sentiment, Urgency};
pub use config::{AppConfig, LogFormat};
pub use error::AppError;
pub use models::{EmailContext, GeneratedReply, ReplyForm, ReplyRequest};

#[cfg(test)]
mod tests;
