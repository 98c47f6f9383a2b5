//! Urgency detection.
//!
//! Combines the urgency cue lexicon with two structural signals:
//! repeated exclamation marks and shouted (all-caps) words.

use super::lexicon::{Lexicon, URGENCY_LEXICON};
use super::result::Urgency;

/// Score at or above which urgency is high
pub const HIGH_URGENCY_THRESHOLD: u64 = 3;
/// Score at or above which urgency is moderate
pub const MODERATE_URGENCY_THRESHOLD: u64 = 1;
/// Exclamation marks needed to add one point
pub const EXCLAMATION_SIGNAL_MIN: usize = 2;
/// Shouted words needed to add one point
pub const SHOUTING_SIGNAL_MIN: usize = 2;
/// Minimum letters for a word to count as shouted
const SHOUTED_WORD_MIN_LETTERS: usize = 3;

/// Urgency detector
#[derive(Debug, Clone)]
pub struct UrgencyDetector {
    cues: Lexicon,
}

impl Default for UrgencyDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl UrgencyDetector {
    pub fn new() -> Self {
        Self::with_lexicon(URGENCY_LEXICON.clone())
    }

    pub fn with_lexicon(cues: Lexicon) -> Self {
        Self { cues }
    }

    /// Count all-caps words such as "URGENT" or "ASAP"
    fn count_shouted_words(text: &str) -> usize {
        text.split(|c: char| !c.is_alphabetic())
            .filter(|word| {
                word.chars().count() >= SHOUTED_WORD_MIN_LETTERS
                    && word.chars().all(char::is_uppercase)
            })
            .count()
    }

    /// Cue weights plus structural signals
    pub fn score(&self, text: &str) -> u64 {
        let mut score = self.cues.weighted_count(text);

        if text.matches('!').count() >= EXCLAMATION_SIGNAL_MIN {
            score = score.saturating_add(1);
        }

        if Self::count_shouted_words(text) >= SHOUTING_SIGNAL_MIN {
            score = score.saturating_add(1);
        }

        score
    }

    /// Map a score to its tier
    pub fn classify(score: u64) -> Urgency {
        if score >= HIGH_URGENCY_THRESHOLD {
            Urgency::High
        } else if score >= MODERATE_URGENCY_THRESHOLD {
            Urgency::Moderate
        } else {
            Urgency::Low
        }
    }

    pub fn detect(&self, text: &str) -> Urgency {
        Self::classify(self.score(text))
    }
}
