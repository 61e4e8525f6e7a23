//! Sentiment classifier interface.
//!
//! Abstracts where sentiment polarity comes from, so the analyzer never
//! branches on whether a credential is configured. `None` from `classify`
//! means "unavailable" and is always a valid answer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::result::{RiskLevel, Sentiment, SentimentAssessment, StressLevel};

/// Probability above which a polarity is taken as decisive.
pub const DECISIVE_PROBABILITY: f64 = 0.7;

/// Normalized output of a binary sentiment model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierScores {
    /// Probability of the NEGATIVE label, within [0, 1]
    pub negative: f64,
    /// Probability of the POSITIVE label, within [0, 1]
    pub positive: f64,
}

impl From<ClassifierScores> for SentimentAssessment {
    fn from(scores: ClassifierScores) -> Self {
        if scores.negative > DECISIVE_PROBABILITY {
            SentimentAssessment {
                sentiment: Sentiment::Negative,
                mood_score: ((1.0 - scores.negative) * 10.0).round() as i32,
                stress_level: StressLevel::High,
                risk_level: RiskLevel::Medium,
            }
        } else if scores.positive > DECISIVE_PROBABILITY {
            SentimentAssessment {
                sentiment: Sentiment::Positive,
                mood_score: (scores.positive * 10.0).round() as i32,
                stress_level: StressLevel::Low,
                risk_level: RiskLevel::Low,
            }
        } else {
            SentimentAssessment::neutral()
        }
    }
}

/// One label of the emotion model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub label: String,
    pub score: f64,
}

/// Defines the public interface for a sentiment source.
///
/// Implementations must not fail: any problem is reported as `None` so the
/// caller falls back to lexicon sentiment.
#[async_trait]
pub trait SentimentClassifier: Send + Sync + 'static {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Binary sentiment scores for `content`, or `None` when unavailable.
    async fn classify(&self, content: &str) -> Option<ClassifierScores>;

    /// Per-emotion scores for `content`, or `None` when unavailable.
    async fn emotions(&self, _content: &str) -> Option<Vec<EmotionScore>> {
        None
    }
}

/// Sentiment always comes from the local lexicon. No I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconOnly;

#[async_trait]
impl SentimentClassifier for LexiconOnly {
    fn name(&self) -> &'static str {
        "lexicon-only"
    }

    async fn classify(&self, _content: &str) -> Option<ClassifierScores> {
        None
    }
}
