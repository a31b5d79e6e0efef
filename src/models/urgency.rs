use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Four-level urgency scale shared by the keyword rules and the severity model
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    Display,
)]
pub enum UrgencyTier {
    #[serde(rename = "CRITICAL 🚨")]
    #[strum(serialize = "CRITICAL 🚨")]
    Critical,
    #[serde(rename = "HIGH 🔴")]
    #[strum(serialize = "HIGH 🔴")]
    High,
    #[default]
    #[serde(rename = "MEDIUM 🟡")]
    #[strum(serialize = "MEDIUM 🟡")]
    Medium,
    #[serde(rename = "LOW 🟢")]
    #[strum(serialize = "LOW 🟢")]
    Low,
}

impl UrgencyTier {
    /// Ordinal rank, higher is more urgent
    pub fn rank(&self) -> u8 {
        match self {
            UrgencyTier::Critical => 3,
            UrgencyTier::High => 2,
            UrgencyTier::Medium => 1,
            UrgencyTier::Low => 0,
        }
    }

    /// Bare tier name without the marker glyph, used for metric labels
    pub fn name(&self) -> &'static str {
        match self {
            UrgencyTier::Critical => "CRITICAL",
            UrgencyTier::High => "HIGH",
            UrgencyTier::Medium => "MEDIUM",
            UrgencyTier::Low => "LOW",
        }
    }

    /// Bucket a 1-10 severity score into a tier
    pub fn from_severity_score(score: i32) -> Self {
        if score >= 9 {
            UrgencyTier::Critical
        } else if score >= 7 {
            UrgencyTier::High
        } else if score >= 5 {
            UrgencyTier::Medium
        } else {
            UrgencyTier::Low
        }
    }

    /// Label reported for a tier predicted by the severity model
    pub fn ml_label(&self) -> &'static str {
        match self {
            UrgencyTier::Critical => "🔥 CRITICAL (ML Prediction)",
            UrgencyTier::High => "🔴 HIGH (ML Prediction)",
            UrgencyTier::Medium => "🟡 MEDIUM (ML Prediction)",
            UrgencyTier::Low => "🟢 LOW (ML Prediction)",
        }
    }
}
