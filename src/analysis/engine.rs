use crate::analysis::rules::RuleClassifier;
use crate::config::AnalysisConfig;
use crate::error::{AppError, Result};
use crate::ml::{ModelMetadata, StatisticalLayer};
use crate::models::Assessment;
use std::time::Instant;
use tracing::{debug, info};

/// Message returned to clients that submit no text
pub const EMPTY_TEXT_MESSAGE: &str = "Please enter a situation description";

/// Runs the rule classifier and the statistical layer over one report and
/// merges the results.
///
/// Trained once at startup and shared read-only between requests.
pub struct AnalysisEngine {
    rules: RuleClassifier,
    statistical: StatisticalLayer,
}

impl AnalysisEngine {
    /// Train the statistical models and build the engine
    pub fn train(config: &AnalysisConfig) -> Result<Self> {
        let statistical = StatisticalLayer::train(config.severity_max_depth)?;
        let rules = RuleClassifier::new(config.max_needs);

        info!(max_needs = config.max_needs, "Analysis engine ready");

        Ok(Self::new(rules, statistical))
    }

    pub fn new(rules: RuleClassifier, statistical: StatisticalLayer) -> Self {
        Self { rules, statistical }
    }

    /// Produce a full assessment. Only empty text is rejected; statistical
    /// failures degrade to placeholder strings.
    pub fn analyze(&self, text: &str) -> Result<Assessment> {
        if text.is_empty() {
            return Err(AppError::Validation(EMPTY_TEXT_MESSAGE.to_string()));
        }

        let started = Instant::now();

        let rules = self.rules.classify(text);
        let ml = self.statistical.analyze(text).to_ml_analysis();
        let assessment = Assessment::assemble(rules, ml);

        let elapsed = started.elapsed().as_secs_f64();
        crate::metrics::record_analysis(
            assessment.urgency.name(),
            &assessment.disaster_type,
            elapsed,
        );

        debug!(
            urgency = assessment.urgency.name(),
            disaster_type = %assessment.disaster_type,
            location = %assessment.location,
            ml_disaster_type = %assessment.ml_analysis.ml_disaster_type,
            severity_score = %assessment.ml_analysis.severity_score,
            elapsed_ms = elapsed * 1000.0,
            "Analysis complete"
        );

        Ok(assessment)
    }

    /// Metadata for the statistical models
    pub fn model_metadata(&self) -> Vec<ModelMetadata> {
        self.statistical.model_metadata()
    }

    pub fn is_ready(&self) -> bool {
        self.statistical.is_trained()
    }
}
