use crate::models::UrgencyTier;
use serde::{Deserialize, Serialize};

/// Sentinel reported when no location phrase is found
pub const LOCATION_NOT_SPECIFIED: &str = "Location not specified";

/// Placeholder need reported when no need lexicon matches
pub const DEFAULT_NEED: &str = "Assessment teams needed";

/// Disaster type reported when no disaster lexicon matches
pub const DEFAULT_DISASTER_TYPE: &str = "Emergency";

/// Output of the keyword rules and location extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleAssessment {
    pub urgency: UrgencyTier,
    pub disaster_type: String,
    pub location: String,
    pub needs: Vec<String>,
    pub actions: Vec<String>,
}

/// Output of the statistical layer, already rendered for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlAnalysis {
    pub sentiment: String,
    pub emotion_score: String,
    pub ml_disaster_type: String,
    pub ml_severity: String,
    pub severity_score: String,
    pub ml_confidence: String,
}

/// Complete assessment returned by the analysis endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub urgency: UrgencyTier,

    #[serde(rename = "type")]
    pub disaster_type: String,

    pub location: String,

    /// At most three entries, never empty
    pub needs: Vec<String>,

    pub actions: Vec<String>,

    pub ml_analysis: MlAnalysis,
}

impl Assessment {
    /// Merge the rule-based and statistical results
    pub fn assemble(rules: RuleAssessment, ml_analysis: MlAnalysis) -> Self {
        Self {
            urgency: rules.urgency,
            disaster_type: rules.disaster_type,
            location: rules.location,
            needs: rules.needs,
            actions: rules.actions,
            ml_analysis,
        }
    }
}
