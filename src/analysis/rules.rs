//! Rule-based classification over the keyword lexicons.

use crate::analysis::lexicon::{
    KeywordSet, DISASTER_KEYWORDS, FALLBACK_ACTIONS, NEED_KEYWORDS, TIER_ACTIONS,
    URGENCY_KEYWORDS,
};
use crate::analysis::location::location_or_sentinel;
use crate::models::{RuleAssessment, UrgencyTier, DEFAULT_DISASTER_TYPE, DEFAULT_NEED};

/// Default cap on the number of reported needs
pub const DEFAULT_MAX_NEEDS: usize = 3;

/// Keyword classifier for disaster type, urgency, needs and actions
#[derive(Debug, Clone)]
pub struct RuleClassifier {
    max_needs: usize,
}

impl RuleClassifier {
    pub fn new(max_needs: usize) -> Self {
        Self {
            max_needs: max_needs.max(1),
        }
    }

    /// Run every rule over the text. The caller has already rejected empty input.
    pub fn classify(&self, text: &str) -> RuleAssessment {
        let haystack = text.to_lowercase();
        let urgency = classify_urgency(&haystack);

        RuleAssessment {
            urgency,
            disaster_type: classify_disaster_type(&haystack),
            location: location_or_sentinel(text),
            needs: self.identify_needs(&haystack),
            actions: recommended_actions(urgency),
        }
    }

    /// Every matching need category in lexicon order, capped and never empty
    pub fn identify_needs(&self, haystack: &str) -> Vec<String> {
        let mut needs: Vec<String> = NEED_KEYWORDS
            .iter()
            .filter(|kset| kset.matches(haystack))
            .map(|kset| kset.label.to_string())
            .take(self.max_needs)
            .collect();

        if needs.is_empty() {
            needs.push(DEFAULT_NEED.to_string());
        }
        needs
    }
}

impl Default for RuleClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NEEDS)
    }
}

fn first_match<L: Copy>(table: &[KeywordSet<L>], haystack: &str) -> Option<L> {
    table
        .iter()
        .find(|kset| kset.matches(haystack))
        .map(|kset| kset.label)
}

/// First disaster category with a keyword hit, or "Emergency"
pub fn classify_disaster_type(haystack: &str) -> String {
    first_match(DISASTER_KEYWORDS, haystack)
        .unwrap_or(DEFAULT_DISASTER_TYPE)
        .to_string()
}

/// Most urgent tier with a keyword hit, or MEDIUM
pub fn classify_urgency(haystack: &str) -> UrgencyTier {
    first_match(URGENCY_KEYWORDS, haystack).unwrap_or_default()
}

/// Fixed checklist for a tier
pub fn recommended_actions(tier: UrgencyTier) -> Vec<String> {
    match TIER_ACTIONS.iter().find(|(t, _)| *t == tier) {
        Some((_, actions)) => actions.iter().map(|a| a.to_string()).collect(),
        None => FALLBACK_ACTIONS.iter().map(|a| a.to_string()).collect(),
    }
}
