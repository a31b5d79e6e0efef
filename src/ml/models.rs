use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

/// Failures inside the statistical pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MlError {
    /// Model or vectorizer used before fitting
    #[error("model not fitted")]
    NotFitted,

    /// Training data unusable (empty, mismatched lengths, no vocabulary)
    #[error("invalid training data: {0}")]
    InvalidTrainingData(String),

    /// Text could not be turned into a feature vector
    #[error("vectorization failed: {0}")]
    Vectorization(String),

    /// The estimator rejected the feature vector
    #[error("prediction failed: {0}")]
    Inference(String),
}

impl MlError {
    /// Stable reason code for metrics and logs
    pub fn code(&self) -> &'static str {
        match self {
            MlError::NotFitted => "not_fitted",
            MlError::InvalidTrainingData(_) => "invalid_training_data",
            MlError::Vectorization(_) => "vectorization",
            MlError::Inference(_) => "inference",
        }
    }
}

pub type MlResult<T> = std::result::Result<T, MlError>;

/// Result of a single model inference.
///
/// `Fallback` carries the reason so callers can tell a failed pipeline from a
/// genuine (if weak) prediction.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutcome<T> {
    Predicted(T),
    Fallback(MlError),
}

impl<T> ModelOutcome<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ModelOutcome::Fallback(_))
    }

    pub fn predicted(&self) -> Option<&T> {
        match self {
            ModelOutcome::Predicted(value) => Some(value),
            ModelOutcome::Fallback(_) => None,
        }
    }
}

impl<T> From<MlResult<T>> for ModelOutcome<T> {
    fn from(result: MlResult<T>) -> Self {
        match result {
            Ok(value) => ModelOutcome::Predicted(value),
            Err(e) => ModelOutcome::Fallback(e),
        }
    }
}

/// Estimator family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    #[strum(serialize = "Multinomial Naive Bayes")]
    MultinomialNaiveBayes,
    #[strum(serialize = "Decision Tree")]
    DecisionTree,
}

/// Descriptive data about a trained model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub name: String,
    pub model_type: ModelType,
    pub trained_at: DateTime<Utc>,
    pub n_training_samples: usize,
    pub vocab_size: usize,
    pub classes: Vec<String>,
    /// Accuracy on the training examples themselves
    pub training_accuracy: f64,
}

impl ModelMetadata {
    pub fn new(name: impl Into<String>, model_type: ModelType) -> Self {
        Self {
            name: name.into(),
            model_type,
            trained_at: Utc::now(),
            n_training_samples: 0,
            vocab_size: 0,
            classes: Vec::new(),
            training_accuracy: 0.0,
        }
    }
}

/// Fraction of positions where the two label slices agree
pub fn accuracy<T: PartialEq>(expected: &[T], predicted: &[T]) -> f64 {
    if expected.is_empty() {
        return 0.0;
    }
    let correct = expected
        .iter()
        .zip(predicted.iter())
        .filter(|(e, p)| e == p)
        .count();
    correct as f64 / expected.len() as f64
}
