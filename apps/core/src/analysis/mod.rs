//! # Analysis Module
//!
//! Content analysis for wellness check-ins.
//! Derives mood, sentiment, stress, risk, concerns and recommendations from
//! journal text and voice transcripts.
//!
//! ## Components
//! - `input`: Entry normalization and modality metadata
//! - `classifier`: Sentiment source interface (lexicon-only fallback)
//! - `remote`: Hosted inference API adapter
//! - `lexicon`: Phrase-table scanner (fast path, always runs)
//! - `risk`: Self-harm escalation
//! - `recommendations`: Ordered recommendation builder
//! - `fusion`: Combines sentiment source with lexicon output
//! - `defaults`: Result for empty entries
//! - `result`: Output data structure
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod classifier;
pub mod defaults;
pub mod fusion;
pub mod input;
pub mod lexicon;
pub mod recommendations;
pub mod remote;
pub mod result;
pub mod risk;

pub use analyzer::WellnessAnalyzer;
pub use classifier::{ClassifierScores, EmotionScore, LexiconOnly, SentimentClassifier};
pub use input::{combine_content, is_blank, AnalysisInput, EntryMetadata, EntryType};
pub use lexicon::{LexiconEngine, LexiconScan};
pub use remote::RemoteClassifier;
pub use result::{AnalysisResult, ConcernSet, ConcernTag, RiskLevel, Sentiment, SentimentAssessment, StressLevel};
pub use risk::{Escalation, RiskEscalator};
