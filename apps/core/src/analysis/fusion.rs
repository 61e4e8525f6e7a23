//! Result fusion.
//!
//! Sentiment, mood, stress and base risk come from the classifier when it
//! answered and from the lexicon otherwise. Concerns and recommendations
//! always come from the lexicon. Self-harm escalation is applied last.

use super::classifier::ClassifierScores;
use super::lexicon::LexiconScan;
use super::recommendations::RecommendationBuilder;
use super::result::{clamp_mood, AnalysisResult, SentimentAssessment};
use super::risk::Escalation;

/// Picks the sentiment source.
pub fn select_assessment(remote: Option<ClassifierScores>, scan: &LexiconScan) -> SentimentAssessment {
    match remote {
        Some(scores) => scores.into(),
        None => scan.assess(),
    }
}

/// Builds the final result.
pub fn fuse(
    assessment: SentimentAssessment,
    scan: LexiconScan,
    recommendations: RecommendationBuilder,
    escalation: &Escalation,
) -> AnalysisResult {
    AnalysisResult {
        sentiment: assessment.sentiment,
        mood_score: clamp_mood(assessment.mood_score),
        stress_level: assessment.stress_level,
        risk_level: escalation.apply(assessment.risk_level),
        concerns: scan.concerns,
        recommendations: recommendations.build(),
    }
}
