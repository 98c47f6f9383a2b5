//! Topic keyword extraction.
//!
//! Reports which terms of the topic lexicon occur in the text, each once,
//! in the order they first appear.

use super::lexicon::{Lexicon, TOPIC_LEXICON};

/// Keyword extractor backed by a topic lexicon
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    topics: Lexicon,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create an extractor over the built-in topic vocabulary
    pub fn new() -> Self {
        Self::with_lexicon(TOPIC_LEXICON.clone())
    }

    pub fn with_lexicon(topics: Lexicon) -> Self {
        Self { topics }
    }

    /// Extract the matched topic terms
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return vec![];
        }

        self.topics
            .first_occurrences(text)
            .into_iter()
            .map(|(_, term)| term.to_string())
            .collect()
    }
}
