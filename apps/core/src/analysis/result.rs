//! Analysis Result - Output structure for content analysis.
//!
//! Every field maps onto a stored check-in column; the value ranges and enum
//! vocabularies here are the only guarantees the persistence layer relies on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest mood score a result can carry.
pub const MIN_MOOD_SCORE: u8 = 1;
/// Highest mood score a result can carry.
pub const MAX_MOOD_SCORE: u8 = 10;

/// Overall polarity of the entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

/// Perceived stress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StressLevel::Low => "low",
            StressLevel::Moderate => "moderate",
            StressLevel::High => "high",
        }
    }
}

/// Escalation tier. `High` is reserved for self-harm indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

macro_rules! impl_display_via_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.label())
                }
            }
        )*
    };
}

impl_display_via_label!(Sentiment, StressLevel, RiskLevel, ConcernTag);

/// Thematic issue detected in journal content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcernTag {
    Depression,
    Anxiety,
    Sleep,
    Isolation,
    Harm,
    /// Voice entry that also carries depressive language
    VoiceEmotionalDistress,
    /// Video captured but frame analysis is not available
    VisualAnalysisPending,
    /// Nothing specific detected
    GeneralWellness,
}

impl ConcernTag {
    pub fn label(&self) -> &'static str {
        match self {
            ConcernTag::Depression => "depression",
            ConcernTag::Anxiety => "anxiety",
            ConcernTag::Sleep => "sleep",
            ConcernTag::Isolation => "isolation",
            ConcernTag::Harm => "harm",
            ConcernTag::VoiceEmotionalDistress => "voice_emotional_distress",
            ConcernTag::VisualAnalysisPending => "visual_analysis_pending",
            ConcernTag::GeneralWellness => "general_wellness",
        }
    }
}

/// Insertion-ordered set of concern tags. Deserializing drops repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ConcernTag>", into = "Vec<ConcernTag>")]
pub struct ConcernSet(Vec<ConcernTag>);

impl ConcernSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag unless already present. Returns whether it was added.
    pub fn insert(&mut self, tag: ConcernTag) -> bool {
        if self.0.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    pub fn contains(&self, tag: ConcernTag) -> bool {
        self.0.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConcernTag> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ConcernTag] {
        &self.0
    }

    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(|t| t.label().to_string()).collect()
    }
}

impl From<Vec<ConcernTag>> for ConcernSet {
    fn from(tags: Vec<ConcernTag>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<ConcernSet> for Vec<ConcernTag> {
    fn from(set: ConcernSet) -> Self {
        set.0
    }
}

impl FromIterator<ConcernTag> for ConcernSet {
    fn from_iter<I: IntoIterator<Item = ConcernTag>>(iter: I) -> Self {
        let mut set = ConcernSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

/// Complete result of analyzing one check-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub sentiment: Sentiment,

    /// Always within `MIN_MOOD_SCORE..=MAX_MOOD_SCORE`
    pub mood_score: u8,

    pub stress_level: StressLevel,

    pub risk_level: RiskLevel,

    pub concerns: ConcernSet,

    /// Priority order, at most six entries
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// Get a summary for logging. Never includes the analyzed text.
    pub fn summary(&self) -> String {
        format!(
            "Sentiment: {}, Mood: {}, Stress: {}, Risk: {}, Concerns: [{}], Recommendations: {}",
            self.sentiment,
            self.mood_score,
            self.stress_level,
            self.risk_level,
            self.concerns.labels().join(", "),
            self.recommendations.len()
        )
    }
}

/// Sentiment-side fields before fusion. Produced either by the remote
/// classifier or by the lexicon; `mood_score` is not yet clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentAssessment {
    pub sentiment: Sentiment,
    pub mood_score: i32,
    pub stress_level: StressLevel,
    pub risk_level: RiskLevel,
}

impl SentimentAssessment {
    /// Neither polarity dominates.
    pub fn neutral() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            mood_score: 6,
            stress_level: StressLevel::Moderate,
            risk_level: RiskLevel::Low,
        }
    }
}

/// Clamps an intermediate mood value into the stored range.
pub fn clamp_mood(score: i32) -> u8 {
    score.clamp(MIN_MOOD_SCORE as i32, MAX_MOOD_SCORE as i32) as u8
}
