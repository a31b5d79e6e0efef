use crate::ml::classifier::{DisasterTypeModel, SeverityModel, TextClassifier};
use crate::ml::models::{MlResult, ModelMetadata, ModelOutcome};
use crate::ml::sentiment::{self, SentimentLabel, SentimentScore};
use crate::ml::training::{split, DISASTER_TRAINING_SET, SEVERITY_TRAINING_SET};
use crate::models::{MlAnalysis, UrgencyTier};
use tracing::{debug, info};

/// Fixed confidence string; not derived from the model
pub const ML_CONFIDENCE: &str = "Model Confidence: 85%";

pub const DISASTER_FALLBACK: &str = "ML Analysis Pending";
pub const CONFIDENCE_FALLBACK: &str = "Training model...";
pub const SEVERITY_SCORE_FALLBACK: &str = "Calculating...";
pub const SEVERITY_LABEL_FALLBACK: &str = "ML Analysis";

/// Statistical layer: disaster-type model, severity model and sentiment scorer.
///
/// Built once before serving and shared read-only; nothing here mutates after
/// construction.
pub struct StatisticalLayer {
    disaster_model: Box<dyn TextClassifier<Label = String>>,
    severity_model: Box<dyn TextClassifier<Label = i32>>,
}

impl StatisticalLayer {
    /// Train both models on the built-in corpora
    pub fn train(severity_max_depth: Option<u16>) -> MlResult<Self> {
        info!("🤖 Training ML models...");

        let (texts, labels) = split(DISASTER_TRAINING_SET);
        let disaster_model = DisasterTypeModel::train(&texts, &labels)?;
        info!(
            vocab_size = disaster_model.metadata().vocab_size,
            accuracy = disaster_model.metadata().training_accuracy,
            "Disaster-type model trained"
        );

        let (texts, scores) = split(SEVERITY_TRAINING_SET);
        let severity_model = SeverityModel::train(&texts, &scores, severity_max_depth)?;
        info!(
            vocab_size = severity_model.metadata().vocab_size,
            accuracy = severity_model.metadata().training_accuracy,
            "Severity model trained"
        );

        Ok(Self::with_models(
            Box::new(disaster_model),
            Box::new(severity_model),
        ))
    }

    /// Assemble a layer from already trained models
    pub fn with_models(
        disaster_model: Box<dyn TextClassifier<Label = String>>,
        severity_model: Box<dyn TextClassifier<Label = i32>>,
    ) -> Self {
        Self {
            disaster_model,
            severity_model,
        }
    }

    /// Run all three scorers. Never fails: model errors become fallbacks.
    pub fn analyze(&self, text: &str) -> StatisticalAssessment {
        let sentiment = sentiment::score(text);

        let disaster_type: ModelOutcome<String> = self.disaster_model.predict_text(text).into();
        if let ModelOutcome::Fallback(reason) = &disaster_type {
            debug!(reason = %reason, "Disaster-type prediction fell back");
            crate::metrics::record_model_fallback("disaster_type", reason.code());
        }

        let severity: ModelOutcome<i32> = self.severity_model.predict_text(text).into();
        if let ModelOutcome::Fallback(reason) = &severity {
            debug!(reason = %reason, "Severity prediction fell back");
            crate::metrics::record_model_fallback("severity", reason.code());
        }

        StatisticalAssessment {
            sentiment,
            disaster_type,
            severity,
        }
    }

    /// Metadata for both models
    pub fn model_metadata(&self) -> Vec<ModelMetadata> {
        vec![
            self.disaster_model.metadata().clone(),
            self.severity_model.metadata().clone(),
        ]
    }

    /// Check if both models are trained
    pub fn is_trained(&self) -> bool {
        self.disaster_model.is_trained() && self.severity_model.is_trained()
    }
}

/// Raw outputs of the statistical layer for one text
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticalAssessment {
    pub sentiment: SentimentScore,
    pub disaster_type: ModelOutcome<String>,
    /// Raw 1-10 score
    pub severity: ModelOutcome<i32>,
}

impl StatisticalAssessment {
    pub fn sentiment_label(&self) -> SentimentLabel {
        SentimentLabel::classify(&self.sentiment)
    }

    /// Severity tier, if the severity model produced a score
    pub fn severity_tier(&self) -> Option<UrgencyTier> {
        self.severity
            .predicted()
            .map(|&score| UrgencyTier::from_severity_score(score))
    }

    /// Render display strings, substituting placeholders for fallbacks
    pub fn to_ml_analysis(&self) -> MlAnalysis {
        let label = self.sentiment_label();

        let (ml_disaster_type, ml_confidence) = match &self.disaster_type {
            ModelOutcome::Predicted(label) => (label.clone(), ML_CONFIDENCE.to_string()),
            ModelOutcome::Fallback(_) => (
                DISASTER_FALLBACK.to_string(),
                CONFIDENCE_FALLBACK.to_string(),
            ),
        };

        let (severity_score, ml_severity) = match &self.severity {
            ModelOutcome::Predicted(score) => (
                format!("{}/10", score),
                UrgencyTier::from_severity_score(*score).ml_label().to_string(),
            ),
            ModelOutcome::Fallback(_) => (
                SEVERITY_SCORE_FALLBACK.to_string(),
                SEVERITY_LABEL_FALLBACK.to_string(),
            ),
        };

        MlAnalysis {
            sentiment: label.as_str().to_string(),
            emotion_score: label.emotion_score(&self.sentiment),
            ml_disaster_type,
            ml_severity,
            severity_score,
            ml_confidence,
        }
    }
}
