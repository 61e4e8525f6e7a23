//! Input normalization.
//!
//! Merges the typed entry and the voice transcript into a single content
//! string and carries the modality flags alongside it. Content is passed
//! through untouched; case folding belongs to the lexicon.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the check-in was captured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    #[default]
    Text,
    Voice,
    Video,
}

impl EntryType {
    pub fn label(&self) -> &'static str {
        match self {
            EntryType::Text => "text",
            EntryType::Voice => "voice",
            EntryType::Video => "video",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EntryType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(EntryType::Text),
            "voice" => Ok(EntryType::Voice),
            "video" => Ok(EntryType::Video),
            other => Err(AppError::Validation(format!("unknown entry type '{}'", other))),
        }
    }
}

/// Modality flags. Missing booleans default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryMetadata {
    #[serde(default)]
    pub has_voice: bool,
    #[serde(default)]
    pub has_video: bool,
    #[serde(default)]
    pub entry_type: EntryType,
}

impl EntryMetadata {
    pub fn text() -> Self {
        Self::default()
    }

    pub fn with_voice(mut self, has_voice: bool) -> Self {
        self.has_voice = has_voice;
        self
    }

    pub fn with_video(mut self, has_video: bool) -> Self {
        self.has_video = has_video;
        self
    }

}

/// One analysis request: merged content plus modality flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisInput {
    pub content: String,
    pub metadata: EntryMetadata,
}

impl AnalysisInput {
    pub fn new(content: impl Into<String>, metadata: EntryMetadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// Builds the input from the raw check-in parts. Either part may be absent.
    pub fn from_parts(text_entry: Option<&str>, voice_transcript: Option<&str>, metadata: EntryMetadata) -> Self {
        Self {
            content: combine_content(text_entry, voice_transcript).unwrap_or_default(),
            metadata,
        }
    }

    /// Empty and whitespace-only content routes to the default result.
    pub fn is_empty(&self) -> bool {
        is_blank(&self.content)
    }
}

/// Empty or whitespace-only.
pub fn is_blank(content: &str) -> bool {
    content.trim().is_empty()
}

/// Joins the non-blank parts with a single space. `None` when nothing is left.
pub fn combine_content(text_entry: Option<&str>, voice_transcript: Option<&str>) -> Option<String> {
    let parts: Vec<&str> = [text_entry, voice_transcript]
        .into_iter()
        .flatten()
        .filter(|part| !is_blank(part))
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
