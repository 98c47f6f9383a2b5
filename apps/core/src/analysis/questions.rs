//! Question extraction.
//!
//! Splits text into sentences on `.`, `!`, `?` and line breaks, then keeps the
//! sentences that end with `?` or open with an interrogative word.

use std::collections::HashSet;

use super::lexicon::INTERROGATIVE_WORDS;

/// Detects questions embedded in an email
#[derive(Debug, Clone)]
pub struct QuestionExtractor {
    interrogatives: HashSet<String>,
}

impl Default for QuestionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionExtractor {
    pub fn new() -> Self {
        Self::with_interrogatives(INTERROGATIVE_WORDS)
    }

    pub fn with_interrogatives(words: &[&str]) -> Self {
        let interrogatives = words.iter().map(|w| normalize_word(w)).collect();
        Self { interrogatives }
    }

    /// Split into trimmed sentences; the closing delimiter stays attached.
    pub fn split_sentences(text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();

        for c in text.chars() {
            match c {
                '.' | '!' | '?' => {
                    current.push(c);
                    push_sentence(&mut sentences, &current);
                    current.clear();
                }
                '\n' | '\r' => {
                    push_sentence(&mut sentences, &current);
                    current.clear();
                }
                _ => current.push(c),
            }
        }
        push_sentence(&mut sentences, &current);

        sentences
    }

    fn starts_with_interrogative(&self, sentence: &str) -> bool {
        sentence
            .split_whitespace()
            .next()
            .map(normalize_word)
            .is_some_and(|first| self.interrogatives.contains(&first))
    }

    pub fn is_question(&self, sentence: &str) -> bool {
        sentence.ends_with('?') || self.starts_with_interrogative(sentence)
    }

    /// Questions in order of appearance
    pub fn extract(&self, text: &str) -> Vec<String> {
        Self::split_sentences(text)
            .into_iter()
            .filter(|s| self.is_question(s))
            .collect()
    }
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    // A lone "..." or "?!" is punctuation, not a sentence
    if trimmed.chars().any(char::is_alphanumeric) {
        sentences.push(trimmed.to_string());
    }
}

/// Lowercase, unify apostrophes, strip surrounding punctuation
fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .replace('’', "'")
        .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-')
        .trim_matches(|c: char| c == '\'' || c == '-')
        .to_string()
}
