//! Default result for entries without usable text.

use super::input::EntryMetadata;
use super::recommendations::{RecommendationBuilder, EMPTY_ENTRY_DEFAULTS, VIDEO_RECEIVED, VOICE_RECEIVED};
use super::result::{AnalysisResult, ConcernSet, ConcernTag, RiskLevel, Sentiment, StressLevel};

/// Fixed neutral result. The most recently captured modality is acknowledged
/// first: video ahead of voice.
pub fn resolve(metadata: &EntryMetadata) -> AnalysisResult {
    let mut recommendations = RecommendationBuilder::new();
    recommendations.extend_back(&EMPTY_ENTRY_DEFAULTS);

    if metadata.has_voice {
        recommendations.push_front(VOICE_RECEIVED);
    }
    if metadata.has_video {
        recommendations.push_front(VIDEO_RECEIVED);
    }

    let mut concerns = ConcernSet::new();
    concerns.insert(ConcernTag::GeneralWellness);

    AnalysisResult {
        sentiment: Sentiment::Neutral,
        mood_score: 7,
        stress_level: StressLevel::Low,
        risk_level: RiskLevel::Low,
        concerns,
        recommendations: recommendations.build(),
    }
}
