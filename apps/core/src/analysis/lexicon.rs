//! Lexicon Engine - deterministic phrase scanning.
//!
//! Scans journal content against fixed English and Bengali phrase tables.
//! A concern category is recorded once however many of its phrases match,
//! but every matching phrase adds to the negative count.

use super::input::EntryMetadata;
use super::recommendations::{
    guidance, RecommendationBuilder, VIDEO_ANALYZED, VIDEO_CONTEXT, VOICE_ANALYZED, VOICE_DISTRESS,
    WELLNESS_DEFAULTS,
};
use super::result::{ConcernSet, ConcernTag, RiskLevel, Sentiment, SentimentAssessment, StressLevel};
use super::risk::Escalation;

/// Trigger phrases for one concern category
pub struct ConcernLexicon {
    pub tag: ConcernTag,
    pub phrases: &'static [&'static str],
}

/// Negative indicators, in the order concerns are reported
pub const CONCERN_LEXICON: &[ConcernLexicon] = &[
    ConcernLexicon {
        tag: ConcernTag::Depression,
        phrases: &[
            "sad", "depressed", "unhappy", "hopeless", "worthless", "empty",
            // Bengali
            "দুঃখিত", "বিষণ্ণ",
        ],
    },
    ConcernLexicon {
        tag: ConcernTag::Anxiety,
        phrases: &[
            "anxious", "worried", "stress", "panic", "fear", "nervous",
            // Bengali
            "চিন্তিত", "ভয়",
        ],
    },
    ConcernLexicon {
        tag: ConcernTag::Sleep,
        phrases: &[
            "tired", "exhausted", "insomnia", "sleep", "sleepless",
            // Bengali
            "ক্লান্ত", "ঘুম",
        ],
    },
    ConcernLexicon {
        tag: ConcernTag::Isolation,
        phrases: &[
            "alone", "lonely", "isolated", "nobody",
            // Bengali
            "একা", "নিঃসঙ্গ",
        ],
    },
    ConcernLexicon {
        tag: ConcernTag::Harm,
        phrases: &[
            "hurt", "pain", "die", "death", "end",
            // Bengali
            "আঘাত", "মৃত্যু",
        ],
    },
];

/// Positive indicators
pub const POSITIVE_PHRASES: &[&str] = &[
    "happy", "good", "great", "excellent", "wonderful", "joyful", "excited", "grateful",
    // Bengali
    "খুশি", "ভালো", "সুন্দর",
];

/// Result of scanning one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconScan {
    /// Modality tags first, then categories in table order.
    /// Holds only `general_wellness` when nothing else applied.
    pub concerns: ConcernSet,
    /// One per matching negative phrase
    pub negative_count: usize,
    /// One per matching positive phrase
    pub positive_count: usize,
    /// Negative phrases that matched, in table order
    pub matched_phrases: Vec<&'static str>,
}

impl LexiconScan {
    /// Whether any phrase of `tag`'s category matched.
    pub fn matched(&self, tag: ConcernTag) -> bool {
        self.concerns.contains(tag)
    }

    /// Sentiment decision used when no classifier output is available.
    pub fn assess(&self) -> SentimentAssessment {
        let negative = self.negative_count as i32;
        let positive = self.positive_count as i32;

        if negative > positive + 2 {
            SentimentAssessment {
                sentiment: Sentiment::Negative,
                mood_score: (7 - negative).max(2),
                stress_level: if negative > 4 { StressLevel::High } else { StressLevel::Moderate },
                risk_level: if negative > 4 { RiskLevel::Medium } else { RiskLevel::Low },
            }
        } else if positive > negative + 1 {
            SentimentAssessment {
                sentiment: Sentiment::Positive,
                mood_score: (7 + positive).min(9),
                stress_level: StressLevel::Low,
                risk_level: RiskLevel::Low,
            }
        } else {
            SentimentAssessment::neutral()
        }
    }
}

/// Rule-based scanner over the fixed phrase tables
pub struct LexiconEngine {
    categories: &'static [ConcernLexicon],
    positive: &'static [&'static str],
}

impl Default for LexiconEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconEngine {
    /// Create an engine over the built-in tables
    pub fn new() -> Self {
        Self {
            categories: CONCERN_LEXICON,
            positive: POSITIVE_PHRASES,
        }
    }

    /// Scan content case-insensitively and collect concerns and counts.
    pub fn scan(&self, content: &str, metadata: &EntryMetadata) -> LexiconScan {
        let text = content.to_lowercase();

        let mut categories = ConcernSet::new();
        let mut matched_phrases = Vec::new();
        for category in self.categories {
            for phrase in category.phrases {
                if text.contains(phrase) {
                    categories.insert(category.tag);
                    matched_phrases.push(*phrase);
                }
            }
        }

        let positive_count = self.positive.iter().filter(|p| text.contains(*p)).count();

        let mut concerns = ConcernSet::new();
        if metadata.has_voice && categories.contains(ConcernTag::Depression) {
            concerns.insert(ConcernTag::VoiceEmotionalDistress);
        }
        if metadata.has_video {
            concerns.insert(ConcernTag::VisualAnalysisPending);
        }
        for tag in categories.iter() {
            concerns.insert(*tag);
        }
        if concerns.is_empty() {
            concerns.insert(ConcernTag::GeneralWellness);
        }

        LexiconScan {
            concerns,
            negative_count: matched_phrases.len(),
            positive_count,
            matched_phrases,
        }
    }

    /// Assemble recommendations for a scanned entry.
    ///
    /// Order: crisis lines, video acknowledgement, voice acknowledgement,
    /// modality follow-ups, then two lines per matched concern. Generic lines
    /// are used only when nothing else applied.
    pub fn recommend(&self, scan: &LexiconScan, metadata: &EntryMetadata, escalation: &Escalation) -> RecommendationBuilder {
        let mut builder = RecommendationBuilder::new();

        if metadata.has_voice {
            builder.push_back(VOICE_ANALYZED);
            if scan.matched(ConcernTag::VoiceEmotionalDistress) {
                builder.push_back(VOICE_DISTRESS);
            }
        }

        if metadata.has_video {
            builder.push_front(VIDEO_ANALYZED);
            builder.push_back(VIDEO_CONTEXT);
        }

        escalation.prepend_crisis_lines(&mut builder);

        for category in self.categories {
            if scan.matched(category.tag) {
                if let Some(lines) = guidance(category.tag) {
                    builder.extend_back(&lines);
                }
            }
        }

        if builder.is_empty() {
            builder.extend_back(&WELLNESS_DEFAULTS);
        }

        builder
    }
}
