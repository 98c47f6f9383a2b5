//! Sentiment scoring.
//!
//! `score = Σ positive cue weights − Σ negative cue weights`, each occurrence
//! counted. The score is bucketed at zero (see [`Sentiment::from_score`]).

use super::lexicon::{Lexicon, NEGATIVE_LEXICON, POSITIVE_LEXICON};
use super::result::Sentiment;

/// Scored sentiment of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentAssessment {
    pub sentiment: Sentiment,
    pub score: i64,
}

/// Sentiment scorer backed by positive and negative cue lexicons
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    positive: Lexicon,
    negative: Lexicon,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self::with_lexicons(POSITIVE_LEXICON.clone(), NEGATIVE_LEXICON.clone())
    }

    pub fn with_lexicons(positive: Lexicon, negative: Lexicon) -> Self {
        Self { positive, negative }
    }

    /// Raw signed score
    pub fn score(&self, text: &str) -> i64 {
        let positive = i64::try_from(self.positive.weighted_count(text)).unwrap_or(i64::MAX);
        let negative = i64::try_from(self.negative.weighted_count(text)).unwrap_or(i64::MAX);
        positive - negative
    }

    pub fn assess(&self, text: &str) -> SentimentAssessment {
        let score = self.score(text);
        SentimentAssessment {
            sentiment: Sentiment::from_score(score),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let scorer = SentimentScorer::new();

        let result = scorer.assess("Merci beaucoup, c'est parfait !");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.score, 3);
    }

    #[test]
    fn test_negative_text() {
        let scorer = SentimentScorer::new();

        let result = scorer.assess("Malheureusement, nous avons un problème.");
        assert_eq!(result.sentiment, Sentiment::Concerned);
        assert_eq!(result.score, -3);
    }

    #[test]
    fn test_balanced_is_neutral() {
        let scorer = SentimentScorer::new();

        // merci (+1) and retard (-1) cancel out
        let result = scorer.assess("Merci de votre patience malgré le retard.");
        assert_eq!(result.score, 0);
        assert_eq!(result.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_each_occurrence_counts() {
        let scorer = SentimentScorer::new();

        assert_eq!(scorer.score("merci merci merci"), 3);
    }

    #[test]
    fn test_no_cues() {
        let scorer = SentimentScorer::new();

        let result = scorer.assess("Le colis part lundi.");
        assert_eq!(result.score, 0);
        assert_eq!(result.sentiment, Sentiment::Neutral);
    }
}
