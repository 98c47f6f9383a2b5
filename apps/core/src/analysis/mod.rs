//! # Analysis Module
//!
//! Fast, lexicon-driven analysis of a received email.
//!
//! ## Components
//! - `lexicon`: static cue tables and their word-boundary matchers
//! - `keywords`: topic keyword extraction
//! - `sentiment`: signed sentiment scoring
//! - `urgency`: urgency tiers from cues and structural signals
//! - `questions`: interrogative sentence extraction
//! - `result`: output data structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod keywords;
pub mod lexicon;
pub mod questions;
pub mod result;
pub mod sentiment;
pub mod urgency;

pub use analyzer::{EmailAnalyzer, LexiconSet};
pub use keywords::KeywordExtractor;
pub use lexicon::{Lexicon, LexiconEntry, LexiconMatch, Matching};
pub use questions::QuestionExtractor;
pub use result::{AnalysisResult, Sentiment, Urgency};
pub use sentiment::{SentimentAssessment, SentimentScorer};
pub use urgency::UrgencyDetector;

/// Analyze a text with the built-in lexicons
pub fn analyze(text: &str) -> AnalysisResult {
    EmailAnalyzer::new().analyze(text)
}
