//! Keyword lexicons for the rule-based classifier.
//!
//! Every table is an ordered slice: earlier entries win when a first-match
//! lookup is performed.

use crate::models::UrgencyTier;

/// A category label and the substrings that trigger it
#[derive(Debug, Clone, Copy)]
pub struct KeywordSet<L: 'static> {
    pub label: L,
    pub keywords: &'static [&'static str],
}

impl<L> KeywordSet<L> {
    /// True if any keyword occurs in the already lower-cased haystack
    pub fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|kw| haystack.contains(kw))
    }
}

// ── Disaster types ──────────────────────────────────────────────────

pub static DISASTER_KEYWORDS: &[KeywordSet<&str>] = &[
    KeywordSet {
        label: "FLOOD",
        keywords: &["flood", "water", "rain", "river", "inundat"],
    },
    KeywordSet {
        label: "EARTHQUAKE",
        keywords: &["earthquake", "shake", "tremor", "seismic"],
    },
    KeywordSet {
        label: "FIRE",
        keywords: &["fire", "blaze", "burn", "smoke"],
    },
    KeywordSet {
        label: "STORM",
        keywords: &["storm", "cyclone", "hurricane", "wind"],
    },
];

// ── Urgency tiers ───────────────────────────────────────────────────

pub static URGENCY_KEYWORDS: &[KeywordSet<UrgencyTier>] = &[
    KeywordSet {
        label: UrgencyTier::Critical,
        keywords: &["trapped", "dying", "urgent", "immediate", "help now", "critical"],
    },
    KeywordSet {
        label: UrgencyTier::High,
        keywords: &["need", "emergency", "stranded", "stuck", "please help"],
    },
    KeywordSet {
        label: UrgencyTier::Medium,
        keywords: &["affected", "damage", "problem", "issue"],
    },
    KeywordSet {
        label: UrgencyTier::Low,
        keywords: &["information", "query", "question", "report"],
    },
];

// ── Needs ───────────────────────────────────────────────────────────

pub static NEED_KEYWORDS: &[KeywordSet<&str>] = &[
    KeywordSet {
        label: "Rescue Teams",
        keywords: &["rescue", "trapped", "stranded", "save"],
    },
    KeywordSet {
        label: "Medical Aid",
        keywords: &["hurt", "injured", "medicine", "doctor", "hospital"],
    },
    KeywordSet {
        label: "Food & Water",
        keywords: &["hungry", "thirsty", "food", "water", "hunger"],
    },
    KeywordSet {
        label: "Shelter",
        keywords: &["homeless", "shelter", "roof", "house"],
    },
    KeywordSet {
        label: "Evacuation",
        keywords: &["evacuate", "leave", "relocate"],
    },
];

// ── Recommended actions ─────────────────────────────────────────────

pub static TIER_ACTIONS: &[(UrgencyTier, [&str; 4])] = &[
    (
        UrgencyTier::Critical,
        [
            "🚨 CALL EMERGENCY SERVICES: 112/108",
            "📍 SHARE EXACT LOCATION WITH COORDINATES",
            "⚠️ MOVE TO HIGHER GROUND IF SAFE",
            "📞 ALERT LOCAL AUTHORITIES",
        ],
    ),
    (
        UrgencyTier::High,
        [
            "📞 Contact disaster management authorities",
            "📱 Share live updates on situation",
            "🆘 Prepare evacuation plan",
            "📊 Document damage with photos",
        ],
    ),
    (
        UrgencyTier::Medium,
        [
            "📋 Create detailed situation report",
            "👥 Inform community leaders",
            "📦 Prepare emergency supplies",
            "ℹ️ Gather more information",
        ],
    ),
    (
        UrgencyTier::Low,
        [
            "📝 Record incident details",
            "👥 Coordinate with volunteers",
            "📱 Set up communication channel",
            "🔄 Monitor situation",
        ],
    ),
];

/// Used when a tier has no checklist in [`TIER_ACTIONS`]
pub static FALLBACK_ACTIONS: &[&str] = &["Stay calm and monitor situation"];
