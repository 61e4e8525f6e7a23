//! Wellness check-in analysis engine.
//!
//! Turns journal text and voice transcripts into a mood score, sentiment,
//! stress and risk levels, concern tags and ranked recommendations. An external
//! sentiment model is consulted when configured; analysis always completes
//! locally when it is not.

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use analysis::{AnalysisResult, EntryMetadata, EntryType, WellnessAnalyzer};
pub use config::AnalysisConfig;
pub use error::AppError;
pub use models::{CheckInRecord, CheckInRequest, MoodTrend};
