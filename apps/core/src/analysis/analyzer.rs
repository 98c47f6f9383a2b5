//! Email Analyzer - Orchestrator of the analysis components.
//!
//! Runs keyword extraction, sentiment scoring, urgency detection and question
//! extraction over an email body. Pure and infallible: text without any cue
//! yields a neutral, low-urgency result with no keywords or questions.

use tracing::debug;

use super::keywords::KeywordExtractor;
use super::lexicon::{
    Lexicon, LexiconEntry, NEGATIVE_LEXICON, POSITIVE_LEXICON, TOPIC_LEXICON, URGENCY_LEXICON,
};
use super::questions::QuestionExtractor;
use super::result::AnalysisResult;
use super::sentiment::SentimentScorer;
use super::urgency::UrgencyDetector;
use crate::error::AppError;

/// The lexicons an analyzer is built from
#[derive(Debug, Clone)]
pub struct LexiconSet {
    pub topics: Lexicon,
    pub positive: Lexicon,
    pub negative: Lexicon,
    pub urgency: Lexicon,
}

impl Default for LexiconSet {
    fn default() -> Self {
        Self {
            topics: TOPIC_LEXICON.clone(),
            positive: POSITIVE_LEXICON.clone(),
            negative: NEGATIVE_LEXICON.clone(),
            urgency: URGENCY_LEXICON.clone(),
        }
    }
}

impl LexiconSet {
    /// Compile a set from custom tables
    pub fn compile(
        topics: &[LexiconEntry],
        positive: &[LexiconEntry],
        negative: &[LexiconEntry],
        urgency: &[LexiconEntry],
    ) -> Result<Self, AppError> {
        Ok(Self {
            topics: Lexicon::compile(topics)?,
            positive: Lexicon::compile(positive)?,
            negative: Lexicon::compile(negative)?,
            urgency: Lexicon::compile(urgency)?,
        })
    }
}

/// Main analyzer combining all heuristics
#[derive(Debug, Clone)]
pub struct EmailAnalyzer {
    keyword_extractor: KeywordExtractor,
    sentiment_scorer: SentimentScorer,
    urgency_detector: UrgencyDetector,
    question_extractor: QuestionExtractor,
}

impl Default for EmailAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailAnalyzer {
    /// Create an analyzer over the built-in lexicons
    pub fn new() -> Self {
        Self::with_lexicons(LexiconSet::default())
    }

    /// Create an analyzer over custom lexicons
    pub fn with_lexicons(lexicons: LexiconSet) -> Self {
        Self {
            keyword_extractor: KeywordExtractor::with_lexicon(lexicons.topics),
            sentiment_scorer: SentimentScorer::with_lexicons(lexicons.positive, lexicons.negative),
            urgency_detector: UrgencyDetector::with_lexicon(lexicons.urgency),
            question_extractor: QuestionExtractor::new(),
        }
    }

    /// Analyze an email body
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        if text.trim().is_empty() {
            return AnalysisResult::default();
        }

        let sentiment = self.sentiment_scorer.assess(text);
        let urgency_score = self.urgency_detector.score(text);

        let result = AnalysisResult {
            sentiment: sentiment.sentiment,
            sentiment_score: sentiment.score,
            keywords: self.keyword_extractor.extract(text),
            questions: self.question_extractor.extract(text),
            urgency: UrgencyDetector::classify(urgency_score),
        };

        debug!(
            chars = text.chars().count(),
            sentiment = %result.sentiment,
            sentiment_score = result.sentiment_score,
            urgency = %result.urgency,
            urgency_score,
            keywords = result.keywords.len(),
            questions = result.questions.len(),
            "Email analyzed"
        );

        result
    }
}
