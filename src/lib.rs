//! Disaster situation triage.
//!
//! Turns a free-text description of a disaster into a structured assessment:
//! a rule-based layer (keyword lexicons and a location regex) and a small
//! statistical layer (TF-IDF + naive Bayes, a decision tree and a lexical
//! sentiment scorer) trained once at start-up.

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod ml;
pub mod models;

pub use analysis::AnalysisEngine;
pub use error::{AppError, Result};
