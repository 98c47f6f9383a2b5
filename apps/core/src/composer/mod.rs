//! # Composer Module
//!
//! Turns an analysis and the form fields into a reply draft.
//!
//! ## Components
//! - `templates`: register fragments and the (sentiment, urgency) tone table
//! - `renderer`: paragraph assembly and subject suggestion

pub mod renderer;
pub mod templates;

pub use renderer::ReplyComposer;
pub use templates::{Register, Tone};

use crate::analysis::AnalysisResult;
use crate::models::{GeneratedReply, ReplyRequest};

/// Render a reply with the default composer
pub fn render(request: &ReplyRequest, analysis: AnalysisResult) -> GeneratedReply {
    ReplyComposer::new().render(request, analysis)
}
