//! Risk Escalator - self-harm detection.
//!
//! A harm-category hit combined with an explicit self-reference forces the
//! result to `RiskLevel::High` and puts crisis guidance at the front of the
//! recommendations. Nothing else in the pipeline can lower it again.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

use super::lexicon::LexiconScan;
use super::recommendations::{RecommendationBuilder, CRISIS_HELPLINE, CRISIS_URGENT};
use super::result::{ConcernTag, RiskLevel};

// NOTE: expect() is acceptable for compile-time constant patterns.
static SELF_REFERENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(myself|suicide|আত্মহত্যা)").expect("Invalid regex: self-reference terms")
});

/// Outcome of the self-harm check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Escalation {
    self_harm: bool,
}

impl Escalation {
    pub fn none() -> Self {
        Self { self_harm: false }
    }

    pub fn self_harm() -> Self {
        Self { self_harm: true }
    }

    pub fn is_self_harm(&self) -> bool {
        self.self_harm
    }

    /// Final risk level. Applied after every other risk computation.
    pub fn apply(&self, risk: RiskLevel) -> RiskLevel {
        if self.self_harm {
            RiskLevel::High
        } else {
            risk
        }
    }

    /// Puts the urgent-contact and helpline lines at positions 0 and 1.
    pub fn prepend_crisis_lines(&self, builder: &mut RecommendationBuilder) {
        if self.self_harm {
            builder.push_front_all(&[CRISIS_URGENT, CRISIS_HELPLINE]);
        }
    }
}

/// Detects explicit self-harm language
#[derive(Debug, Default)]
pub struct RiskEscalator;

impl RiskEscalator {
    pub fn new() -> Self {
        Self
    }

    /// Inspect content that the lexicon has already scanned.
    pub fn inspect(&self, content: &str, scan: &LexiconScan) -> Escalation {
        if scan.matched(ConcernTag::Harm) && SELF_REFERENCE_PATTERN.is_match(content) {
            warn!("Self-harm indicators detected, escalating risk level to high");
            Escalation::self_harm()
        } else {
            Escalation::none()
        }
    }
}
