//! Analysis Result - Output structure of the email analyzer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall tone of the received email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Concerned,
}

impl Sentiment {
    /// Bucket a sentiment score. Zero is the only neutral value.
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s > 0 => Sentiment::Positive,
            s if s < 0 => Sentiment::Concerned,
            _ => Sentiment::Neutral,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Concerned => "concerned",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Perceived urgency of the received email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Moderate,
    Low,
}

impl Urgency {
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::High => "high",
            Urgency::Moderate => "moderate",
            Urgency::Low => "low",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Complete result of analyzing an email body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Tone bucket, consistent with `sentiment_score`
    pub sentiment: Sentiment,
    /// Positive cue weight minus negative cue weight
    pub sentiment_score: i64,
    /// Topic terms, in order of first appearance
    pub keywords: Vec<String>,
    /// Interrogative sentences, in order of appearance
    pub questions: Vec<String>,
    pub urgency: Urgency,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            sentiment_score: 0,
            keywords: vec![],
            questions: vec![],
            urgency: Urgency::Low,
        }
    }
}

impl AnalysisResult {
    /// The first keyword found, if any
    pub fn top_keyword(&self) -> Option<&str> {
        self.keywords.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_buckets() {
        assert_eq!(Sentiment::from_score(3), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(1), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(-1), Sentiment::Concerned);
        assert_eq!(Sentiment::from_score(i64::MIN), Sentiment::Concerned);
    }

    #[test]
    fn test_serialized_shape() {
        let result = AnalysisResult {
            sentiment: Sentiment::Concerned,
            sentiment_score: -2,
            keywords: vec!["budget".to_string()],
            questions: vec!["Pourquoi ?".to_string()],
            urgency: Urgency::Moderate,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["sentiment"], "concerned");
        assert_eq!(json["sentimentScore"], -2);
        assert_eq!(json["keywords"][0], "budget");
        assert_eq!(json["questions"][0], "Pourquoi ?");
        assert_eq!(json["urgency"], "moderate");
    }

    #[test]
    fn test_default_is_neutral_low() {
        let result = AnalysisResult::default();
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.urgency, Urgency::Low);
        assert!(result.top_keyword().is_none());
    }
}
