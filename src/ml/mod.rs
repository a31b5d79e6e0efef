//! Statistical layer for situation reports
//!
//! - TF-IDF text vectorization
//! - Disaster-type classification (multinomial naive Bayes)
//! - Severity scoring (decision tree)
//! - Lexical polarity/subjectivity scoring
//! - Fixed training corpora, fitted once at start-up

pub mod classifier;
pub mod features;
pub mod models;
pub mod sentiment;
pub mod service;
pub mod training;

pub use classifier::{DisasterTypeModel, MultinomialNaiveBayes, SeverityModel, TextClassifier};
pub use features::TfidfVectorizer;
pub use models::{MlError, MlResult, ModelMetadata, ModelOutcome, ModelType};
pub use sentiment::{SentimentLabel, SentimentScore};
pub use service::{StatisticalAssessment, StatisticalLayer, ML_CONFIDENCE};
