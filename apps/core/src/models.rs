use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::analysis::{AnalysisInput, AnalysisResult, EntryMetadata, EntryType};
use crate::error::AppError;

/// Represents an incoming check-in as submitted by the client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    /// How the check-in was captured.
    pub entry_type: EntryType,
    /// Free-form journal text.
    #[serde(default)]
    pub text_entry: Option<String>,
    /// Transcript of the voice recording, if any.
    #[serde(default)]
    pub voice_transcript: Option<String>,
    /// Stored path of the voice recording.
    #[serde(default)]
    #[validate(length(max = 500))]
    pub voice_file_path: Option<String>,
    /// Stored path of the video recording.
    #[serde(default)]
    #[validate(length(max = 500))]
    pub video_file_path: Option<String>,
}

impl CheckInRequest {
    /// Parses and validates a JSON check-in payload.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let request: CheckInRequest = serde_json::from_str(json)?;
        request.validate()?;
        Ok(request)
    }

    /// Modality flags: a recording counts only when a non-empty path is present.
    pub fn metadata(&self) -> EntryMetadata {
        EntryMetadata {
            has_voice: self.voice_file_path.as_deref().is_some_and(|p| !p.is_empty()),
            has_video: self.video_file_path.as_deref().is_some_and(|p| !p.is_empty()),
            entry_type: self.entry_type,
        }
    }

    /// Typed entry and transcript merged into one analysis input.
    pub fn to_input(&self) -> AnalysisInput {
        AnalysisInput::from_parts(
            self.text_entry.as_deref(),
            self.voice_transcript.as_deref(),
            self.metadata(),
        )
    }
}

/// Represents a stored check-in row: the request plus its analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckInRecord {
    pub entry_type: EntryType,
    pub text_entry: Option<String>,
    pub voice_transcript: Option<String>,
    pub voice_file_path: Option<String>,
    pub video_file_path: Option<String>,
    #[validate(range(min = 1, max = 10))]
    pub mood_score: u8,
    pub sentiment: String,
    pub stress_level: String,
    pub concerns: Vec<String>,
    #[validate(length(max = 6))]
    pub recommendations: Vec<String>,
    pub risk_level: String,
    /// When the analysis was produced.
    pub analyzed_at: DateTime<Utc>,
}

impl CheckInRecord {
    /// Maps a request and its analysis onto the stored columns.
    pub fn new(request: &CheckInRequest, analysis: &AnalysisResult, analyzed_at: DateTime<Utc>) -> Self {
        Self {
            entry_type: request.entry_type,
            text_entry: request.text_entry.clone(),
            voice_transcript: request.voice_transcript.clone(),
            voice_file_path: request.voice_file_path.clone(),
            video_file_path: request.video_file_path.clone(),
            mood_score: analysis.mood_score,
            sentiment: analysis.sentiment.label().to_string(),
            stress_level: analysis.stress_level.label().to_string(),
            concerns: analysis.concerns.labels(),
            recommendations: analysis.recommendations.clone(),
            risk_level: analysis.risk_level.label().to_string(),
            analyzed_at,
        }
    }
}

/// Represents the daily mood aggregate for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodTrend {
    pub date: NaiveDate,
    /// Running average, kept to two decimals like the stored column.
    pub average_mood: f64,
    pub check_in_count: u32,
}

impl MoodTrend {
    /// Trend for the first check-in of the day.
    pub fn first(date: NaiveDate, mood_score: u8) -> Self {
        Self {
            date,
            average_mood: f64::from(mood_score),
            check_in_count: 1,
        }
    }

    /// Folds another check-in into the running average.
    pub fn record(&mut self, mood_score: u8) {
        let count = f64::from(self.check_in_count);
        let average = (self.average_mood * count + f64::from(mood_score)) / (count + 1.0);
        self.average_mood = (average * 100.0).round() / 100.0;
        self.check_in_count += 1;
    }
}
