//! Wellness Analyzer - Main orchestrator for content analysis.
//!
//! Coordinates input normalization, the optional remote classifier, the
//! lexicon engine, risk escalation and result fusion.
//!
//! Sentiment uses a two-tier source:
//! 1. Remote binary classifier, when a credential is configured and the call succeeds
//! 2. Lexicon decision rules otherwise
//!
//! Concerns, recommendations and self-harm escalation are always local.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::classifier::{EmotionScore, LexiconOnly, SentimentClassifier};
use super::defaults;
use super::fusion;
use super::input::{is_blank, AnalysisInput, EntryMetadata};
use super::lexicon::LexiconEngine;
use super::remote::RemoteClassifier;
use super::result::AnalysisResult;
use super::risk::RiskEscalator;
use crate::config::AnalysisConfig;
use crate::error::AppError;
use crate::models::CheckInRequest;

/// Main analyzer. Immutable once built; share it freely between requests.
pub struct WellnessAnalyzer {
    classifier: Arc<dyn SentimentClassifier>,
    lexicon: LexiconEngine,
    escalator: RiskEscalator,
}

impl Default for WellnessAnalyzer {
    fn default() -> Self {
        Self::offline()
    }
}

impl WellnessAnalyzer {
    /// Analyzer that never makes network calls
    pub fn offline() -> Self {
        Self::with_classifier(Arc::new(LexiconOnly))
    }

    /// Selects the classifier from configuration: remote when a credential is set.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self, AppError> {
        let classifier: Arc<dyn SentimentClassifier> = match &config.api_key {
            Some(key) => Arc::new(RemoteClassifier::new(config, key.clone())?),
            None => Arc::new(LexiconOnly),
        };
        Ok(Self::with_classifier(classifier))
    }

    /// Analyzer over an explicit classifier implementation
    pub fn with_classifier(classifier: Arc<dyn SentimentClassifier>) -> Self {
        info!("Wellness analyzer ready (sentiment source: {})", classifier.name());
        Self {
            classifier,
            lexicon: LexiconEngine::new(),
            escalator: RiskEscalator::new(),
        }
    }

    /// Name of the configured sentiment source
    pub fn classifier_name(&self) -> &'static str {
        self.classifier.name()
    }

    /// Analyze one entry. Never fails; empty content yields the default result.
    pub async fn analyze(&self, content: &str, metadata: &EntryMetadata) -> AnalysisResult {
        self.analyze_input(&AnalysisInput::new(content, *metadata)).await
    }

    /// Analyze a normalized input
    pub async fn analyze_input(&self, input: &AnalysisInput) -> AnalysisResult {
        let start = Instant::now();
        let AnalysisInput { content, metadata } = input;

        if input.is_empty() {
            debug!("Empty entry, using default analysis");
            return defaults::resolve(metadata);
        }

        // 1. Remote sentiment (None when unavailable)
        let remote = self.classifier.classify(content).await;

        // 2. Lexicon scan
        let scan = self.lexicon.scan(content, metadata);

        // 3. Self-harm check
        let escalation = self.escalator.inspect(content, &scan);

        // 4. Recommendations, crisis lines included
        let recommendations = self.lexicon.recommend(&scan, metadata, &escalation);

        // 5. Fuse
        let assessment = fusion::select_assessment(remote, &scan);
        let result = fusion::fuse(assessment, scan, recommendations, &escalation);

        debug!(
            "Analysis complete in {}ms ({}): {}",
            start.elapsed().as_millis(),
            if remote.is_some() { "remote sentiment" } else { "lexicon sentiment" },
            result.summary()
        );

        result
    }

    /// Analyze a check-in: merges the typed entry and voice transcript first.
    pub async fn analyze_check_in(&self, request: &CheckInRequest) -> AnalysisResult {
        self.analyze_input(&request.to_input()).await
    }

    /// Video-only analysis. Frame analysis is not available, so this is the
    /// default result for the given modalities.
    pub async fn analyze_video(&self, metadata: &EntryMetadata) -> AnalysisResult {
        info!("Video frame analysis not available, using default analysis");
        defaults::resolve(metadata)
    }

    /// Emotion label scores from the remote emotion model, when configured.
    pub async fn emotions(&self, content: &str) -> Option<Vec<EmotionScore>> {
        if is_blank(content) {
            return None;
        }
        self.classifier.emotions(content).await
    }
}
