//! Recommendation assembly.
//!
//! Order is priority: index 0 is shown first. Lines are only ever added at the
//! front or the back, and the list is cut to `MAX_RECOMMENDATIONS` once, when
//! the result is built.

use super::result::ConcernTag;
use std::collections::VecDeque;

/// Upper bound on recommendations in a result.
pub const MAX_RECOMMENDATIONS: usize = 6;

// --- Modality acknowledgements ---
pub const VOICE_ANALYZED: &str = "✓ Voice recording analyzed for emotional tone and speaking patterns";
pub const VIDEO_ANALYZED: &str = "✓ Video recording captured - visual emotional cues considered";
pub const VOICE_RECEIVED: &str = "✓ Voice recording received - emotional tone analyzed";
pub const VIDEO_RECEIVED: &str = "✓ Video recording captured - visual cues considered";

pub const VOICE_DISTRESS: &str = "Speaking about feelings is a positive step - consider professional counseling";
pub const VIDEO_CONTEXT: &str = "Video provides valuable context - continue using multimodal check-ins";

// --- Crisis ---
pub const CRISIS_URGENT: &str = "⚠️ URGENT: Please reach out to a mental health professional immediately";
pub const CRISIS_HELPLINE: &str = "📞 Call National Mental Health Helpline: 09678771771 (Bangladesh)";

/// Generic lines used when content produced nothing specific.
pub const WELLNESS_DEFAULTS: [&str; 3] = [
    "📝 Continue journaling your thoughts and feelings",
    "🏃 Engage in regular physical activity (30 min daily)",
    "🤝 Maintain social connections",
];

/// Lines used when there is no content at all.
pub const EMPTY_ENTRY_DEFAULTS: [&str; 3] = [
    "Continue tracking your mental health regularly",
    "Engage in activities that bring you joy",
    "Maintain healthy sleep and exercise habits",
];

/// Two-line guidance block for a lexicon concern.
pub fn guidance(tag: ConcernTag) -> Option<[&'static str; 2]> {
    match tag {
        ConcernTag::Depression => Some([
            "💬 Consider talking to a counselor or therapist",
            "🎯 Engage in activities you usually enjoy",
        ]),
        ConcernTag::Anxiety => Some([
            "🧘 Practice deep breathing exercises (4-7-8 technique)",
            "🌿 Try mindfulness or meditation apps",
        ]),
        ConcernTag::Sleep => Some([
            "⏰ Maintain a regular sleep schedule",
            "📵 Limit screen time 1 hour before bed",
        ]),
        ConcernTag::Isolation => Some([
            "👥 Connect with friends or family members",
            "🤝 Join a support group or community activity",
        ]),
        _ => None,
    }
}

/// Ordered list builder with explicit front/back insertion.
#[derive(Debug, Clone, Default)]
pub struct RecommendationBuilder {
    lines: VecDeque<String>,
}

impl RecommendationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }

    pub fn push_front(&mut self, line: impl Into<String>) {
        self.lines.push_front(line.into());
    }

    /// Places `lines` at the front, keeping their relative order.
    pub fn push_front_all(&mut self, lines: &[&str]) {
        for line in lines.iter().rev() {
            self.lines.push_front((*line).to_string());
        }
    }

    pub fn extend_back(&mut self, lines: &[&str]) {
        self.lines.extend(lines.iter().map(|l| (*l).to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Final list, cut to `MAX_RECOMMENDATIONS`.
    pub fn build(self) -> Vec<String> {
        self.lines.into_iter().take(MAX_RECOMMENDATIONS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_and_back_ordering() {
        let mut builder = RecommendationBuilder::new();
        builder.push_back("b");
        builder.push_back("c");
        builder.push_front("a");

        assert_eq!(builder.build(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_last_prepended_wins_front() {
        let mut builder = RecommendationBuilder::new();
        builder.push_front(VOICE_RECEIVED);
        builder.push_front(VIDEO_RECEIVED);

        assert_eq!(builder.build(), vec![VIDEO_RECEIVED, VOICE_RECEIVED]);
    }

    #[test]
    fn test_push_front_all_keeps_order() {
        let mut builder = RecommendationBuilder::new();
        builder.push_back("existing");
        builder.push_front_all(&[CRISIS_URGENT, CRISIS_HELPLINE]);

        assert_eq!(builder.build(), vec![CRISIS_URGENT, CRISIS_HELPLINE, "existing"]);
    }

    #[test]
    fn test_build_truncates() {
        let mut builder = RecommendationBuilder::new();
        for i in 0..10 {
            builder.push_back(format!("line {}", i));
        }
        assert_eq!(builder.len(), 10);

        let lines = builder.build();
        assert_eq!(lines.len(), MAX_RECOMMENDATIONS);
        assert_eq!(lines[0], "line 0");
        assert_eq!(lines[5], "line 5");
    }

    #[test]
    fn test_guidance_blocks() {
        for tag in [ConcernTag::Depression, ConcernTag::Anxiety, ConcernTag::Sleep, ConcernTag::Isolation] {
            assert!(guidance(tag).is_some(), "missing guidance for {}", tag);
        }
        assert!(guidance(ConcernTag::Harm).is_none());
        assert!(guidance(ConcernTag::GeneralWellness).is_none());
    }
}
