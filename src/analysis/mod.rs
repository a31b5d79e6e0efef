//! Rule-based triage and the response assembler.

pub mod engine;
pub mod lexicon;
pub mod location;
pub mod rules;

pub use engine::{AnalysisEngine, EMPTY_TEXT_MESSAGE};
pub use location::{extract_location, location_or_sentinel};
pub use rules::{RuleClassifier, DEFAULT_MAX_NEEDS};
