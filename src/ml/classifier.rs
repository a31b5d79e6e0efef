use crate::ml::features::TfidfVectorizer;
use crate::ml::models::{accuracy, MlError, MlResult, ModelMetadata, ModelType};
use ndarray::{Array1, Array2, ArrayView1};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::tree::decision_tree_classifier::{
    DecisionTreeClassifier, DecisionTreeClassifierParameters, SplitCriterion,
};
use std::collections::BTreeSet;

/// A trained model that predicts a label straight from raw text
pub trait TextClassifier: Send + Sync {
    type Label;

    /// Vectorize the text and predict a label
    fn predict_text(&self, text: &str) -> MlResult<Self::Label>;

    /// Get model metadata
    fn metadata(&self) -> &ModelMetadata;

    /// Check if model is trained
    fn is_trained(&self) -> bool;
}

/// Multinomial naive Bayes over non-negative feature weights
#[derive(Debug, Clone)]
pub struct MultinomialNaiveBayes {
    /// Additive (Laplace) smoothing
    alpha: f64,

    /// ln P(class)
    class_log_prior: Array1<f64>,

    /// ln P(feature | class), one row per class
    feature_log_prob: Array2<f64>,

    trained: bool,
}

impl MultinomialNaiveBayes {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            class_log_prior: Array1::zeros(0),
            feature_log_prob: Array2::zeros((0, 0)),
            trained: false,
        }
    }

    /// Fit on a feature matrix and class indices in `0..n_classes`
    pub fn fit(&mut self, x: &Array2<f64>, y: &[usize], n_classes: usize) -> MlResult<()> {
        if x.nrows() == 0 || x.nrows() != y.len() {
            return Err(MlError::InvalidTrainingData(format!(
                "{} samples but {} labels",
                x.nrows(),
                y.len()
            )));
        }
        if x.iter().any(|&v| v < 0.0) {
            return Err(MlError::InvalidTrainingData(
                "naive Bayes requires non-negative features".to_string(),
            ));
        }

        let mut class_count = Array1::<f64>::zeros(n_classes);
        let mut feature_count = Array2::<f64>::zeros((n_classes, x.ncols()));

        for (row, &label) in x.rows().into_iter().zip(y.iter()) {
            if label >= n_classes {
                return Err(MlError::InvalidTrainingData(format!(
                    "label index {} out of range",
                    label
                )));
            }
            class_count[label] += 1.0;
            let mut counts = feature_count.row_mut(label);
            counts += &row;
        }

        let n_samples = y.len() as f64;
        self.class_log_prior = class_count.mapv(|c| (c / n_samples).ln());

        let mut smoothed = feature_count.mapv(|c| c + self.alpha);
        for mut row in smoothed.rows_mut() {
            let total = row.sum();
            row.mapv_inplace(|c| (c / total).ln());
        }
        self.feature_log_prob = smoothed;
        self.trained = true;

        Ok(())
    }

    /// Unnormalised log posterior per class
    pub fn joint_log_likelihood(&self, x: ArrayView1<f64>) -> MlResult<Array1<f64>> {
        if !self.trained {
            return Err(MlError::NotFitted);
        }
        if x.len() != self.feature_log_prob.ncols() {
            return Err(MlError::Inference(format!(
                "expected {} features, got {}",
                self.feature_log_prob.ncols(),
                x.len()
            )));
        }

        Ok(self.feature_log_prob.dot(&x) + &self.class_log_prior)
    }

    /// Most likely class index; ties go to the lowest index
    pub fn predict(&self, x: ArrayView1<f64>) -> MlResult<usize> {
        let jll = self.joint_log_likelihood(x)?;

        let mut best: Option<(usize, f64)> = None;
        for (idx, &score) in jll.iter().enumerate() {
            if score.is_nan() {
                return Err(MlError::Inference("log likelihood is NaN".to_string()));
            }
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((idx, score)),
            }
        }

        best.map(|(idx, _)| idx)
            .ok_or_else(|| MlError::Inference("model has no classes".to_string()))
    }

    pub fn is_trained(&self) -> bool {
        self.trained
    }
}

/// Disaster-type classifier: TF-IDF features into multinomial naive Bayes
#[derive(Debug, Clone)]
pub struct DisasterTypeModel {
    vectorizer: TfidfVectorizer,
    estimator: MultinomialNaiveBayes,
    /// Class labels in sorted order; index = estimator class
    classes: Vec<String>,
    metadata: ModelMetadata,
}

impl DisasterTypeModel {
    /// Fit a fresh vectorizer and estimator on labelled texts
    pub fn train(texts: &[&str], labels: &[&str]) -> MlResult<Self> {
        if texts.len() != labels.len() {
            return Err(MlError::InvalidTrainingData(format!(
                "{} texts but {} labels",
                texts.len(),
                labels.len()
            )));
        }

        let classes: Vec<String> = labels
            .iter()
            .copied()
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        let y: Vec<usize> = labels
            .iter()
            .map(|label| classes.iter().position(|c| c == label).unwrap_or_default())
            .collect();

        let mut vectorizer = TfidfVectorizer::new();
        let x = vectorizer.fit_transform(texts)?;

        let mut estimator = MultinomialNaiveBayes::new(1.0);
        estimator.fit(&x, &y, classes.len())?;

        let predictions = x
            .rows()
            .into_iter()
            .map(|row| estimator.predict(row))
            .collect::<MlResult<Vec<usize>>>()?;

        let mut metadata = ModelMetadata::new("disaster-type", ModelType::MultinomialNaiveBayes);
        metadata.n_training_samples = texts.len();
        metadata.vocab_size = vectorizer.vocab_size();
        metadata.classes = classes.clone();
        metadata.training_accuracy = accuracy(&y, &predictions);

        Ok(Self {
            vectorizer,
            estimator,
            classes,
            metadata,
        })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl TextClassifier for DisasterTypeModel {
    type Label = String;

    fn predict_text(&self, text: &str) -> MlResult<String> {
        let features = self.vectorizer.transform(text)?;
        let idx = self.estimator.predict(features.view())?;
        self.classes
            .get(idx)
            .cloned()
            .ok_or_else(|| MlError::Inference(format!("unknown class index {}", idx)))
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn is_trained(&self) -> bool {
        self.estimator.is_trained() && self.vectorizer.is_fitted()
    }
}

/// Severity scorer: TF-IDF features into a decision tree over 1-10 scores
pub struct SeverityModel {
    vectorizer: TfidfVectorizer,
    tree: DecisionTreeClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>>,
    metadata: ModelMetadata,
    trained: bool,
}

impl SeverityModel {
    /// Fit a fresh vectorizer and tree; `max_depth` of None grows until pure
    pub fn train(texts: &[&str], scores: &[i32], max_depth: Option<u16>) -> MlResult<Self> {
        if texts.is_empty() || texts.len() != scores.len() {
            return Err(MlError::InvalidTrainingData(format!(
                "{} texts but {} scores",
                texts.len(),
                scores.len()
            )));
        }

        let mut vectorizer = TfidfVectorizer::new();
        let features = vectorizer.fit_transform(texts)?;
        let x = ndarray_to_densematrix(&features);
        let y: Vec<i32> = scores.to_vec();

        // A node holding two samples must still split for the tree to grow until pure
        let mut params = DecisionTreeClassifierParameters::default()
            .with_criterion(SplitCriterion::Gini)
            .with_min_samples_split(1);
        if let Some(depth) = max_depth {
            params = params.with_max_depth(depth);
        }

        let tree = DecisionTreeClassifier::fit(&x, &y, params).map_err(|e| {
            MlError::InvalidTrainingData(format!("Failed to train decision tree: {}", e))
        })?;

        let predictions = tree
            .predict(&x)
            .map_err(|e| MlError::Inference(format!("Prediction failed: {}", e)))?;

        let classes: BTreeSet<i32> = scores.iter().copied().collect();

        let mut metadata = ModelMetadata::new("severity", ModelType::DecisionTree);
        metadata.n_training_samples = texts.len();
        metadata.vocab_size = vectorizer.vocab_size();
        metadata.classes = classes.iter().rev().map(|s| s.to_string()).collect();
        metadata.training_accuracy = accuracy(&y, &predictions);

        Ok(Self {
            vectorizer,
            tree,
            metadata,
            trained: true,
        })
    }
}

impl TextClassifier for SeverityModel {
    type Label = i32;

    fn predict_text(&self, text: &str) -> MlResult<i32> {
        let features = self.vectorizer.transform(text)?;
        let row = features.insert_axis(ndarray::Axis(0));
        let x = ndarray_to_densematrix(&row);

        let predictions = self
            .tree
            .predict(&x)
            .map_err(|e| MlError::Inference(format!("Prediction failed: {}", e)))?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| MlError::Inference("tree returned no prediction".to_string()))
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn is_trained(&self) -> bool {
        self.trained && self.vectorizer.is_fitted()
    }
}

fn ndarray_to_densematrix(arr: &Array2<f64>) -> DenseMatrix<f64> {
    let shape = arr.shape();
    let data: Vec<f64> = arr.iter().copied().collect();
    DenseMatrix::new(shape[0], shape[1], data, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::training::{split, DISASTER_TRAINING_SET, SEVERITY_TRAINING_SET};
    use ndarray::array;

    fn disaster_model() -> DisasterTypeModel {
        let (texts, labels) = split(DISASTER_TRAINING_SET);
        DisasterTypeModel::train(&texts, &labels).unwrap()
    }

    fn severity_model() -> SeverityModel {
        let (texts, scores) = split(SEVERITY_TRAINING_SET);
        SeverityModel::train(&texts, &scores, None).unwrap()
    }

    #[test]
    fn test_naive_bayes_two_classes() {
        let x = array![[3.0, 0.0], [2.0, 1.0], [0.0, 4.0], [1.0, 3.0]];
        let mut nb = MultinomialNaiveBayes::new(1.0);
        assert!(!nb.is_trained());

        nb.fit(&x, &[0, 0, 1, 1], 2).unwrap();

        assert!(nb.is_trained());
        assert_eq!(nb.predict(array![5.0, 0.0].view()).unwrap(), 0);
        assert_eq!(nb.predict(array![0.0, 5.0].view()).unwrap(), 1);
    }

    #[test]
    fn test_naive_bayes_tie_goes_to_first_class() {
        let x = array![[1.0, 0.0], [0.0, 1.0]];
        let mut nb = MultinomialNaiveBayes::new(1.0);
        nb.fit(&x, &[0, 1], 2).unwrap();

        assert_eq!(nb.predict(array![0.0, 0.0].view()).unwrap(), 0);
    }

    #[test]
    fn test_naive_bayes_rejects_bad_input() {
        let mut nb = MultinomialNaiveBayes::new(1.0);
        assert_eq!(
            nb.predict(array![1.0].view()),
            Err(MlError::NotFitted)
        );

        let x = array![[1.0, -1.0]];
        assert!(nb.fit(&x, &[0], 1).is_err());

        let x = array![[1.0, 0.0]];
        assert!(nb.fit(&x, &[0, 1], 2).is_err());
        assert!(nb.fit(&x, &[3], 2).is_err());

        nb.fit(&x, &[0], 1).unwrap();
        assert!(matches!(
            nb.predict(array![1.0, 2.0, 3.0].view()),
            Err(MlError::Inference(_))
        ));
    }

    #[test]
    fn test_disaster_model_training() {
        let model = disaster_model();

        assert!(model.is_trained());
        assert_eq!(
            model.classes(),
            &["EARTHQUAKE", "FIRE", "FLOOD", "LANDSLIDE", "STORM"]
        );
        assert_eq!(model.metadata().n_training_samples, 15);
        assert_eq!(model.metadata().model_type, ModelType::MultinomialNaiveBayes);
        assert!(model.metadata().vocab_size > 40);
    }

    #[test]
    fn test_disaster_model_predicts_training_example() {
        let model = disaster_model();
        assert_eq!(
            model.predict_text("flood water rising help emergency").unwrap(),
            "FLOOD"
        );
        assert_eq!(
            model.predict_text("landslide mudslide hill collapse").unwrap(),
            "LANDSLIDE"
        );
    }

    #[test]
    fn test_disaster_model_unseen_text() {
        let model = disaster_model();
        assert_eq!(
            model.predict_text("Huge wildfire and flames near the forest").unwrap(),
            "FIRE"
        );
        // No known terms: priors are equal so the first class wins
        assert_eq!(model.predict_text("x").unwrap(), "EARTHQUAKE");
    }

    #[test]
    fn test_disaster_model_rejects_mismatched_data() {
        assert!(DisasterTypeModel::train(&["flood"], &[]).is_err());
    }

    #[test]
    fn test_severity_model_fits_training_set() {
        let model = severity_model();

        assert_eq!(model.metadata().n_training_samples, 9);
        assert_eq!(model.metadata().training_accuracy, 1.0);
        assert_eq!(model.metadata().classes.first().map(String::as_str), Some("10"));
        assert_eq!(
            model.predict_text("people trapped dying help now").unwrap(),
            10
        );
        assert_eq!(
            model.predict_text("just reporting situation calm").unwrap(),
            1
        );
    }

    #[test]
    fn test_severity_model_predicts_every_training_example() {
        let model = severity_model();
        assert!(model.is_trained());

        for (text, expected) in SEVERITY_TRAINING_SET {
            assert_eq!(model.predict_text(text).unwrap(), *expected, "text: {}", text);
        }
    }

    #[test]
    fn test_severity_model_depth_limit_still_trains() {
        let (texts, scores) = split(SEVERITY_TRAINING_SET);
        let model = SeverityModel::train(&texts, &scores, Some(1)).unwrap();

        assert!(model.is_trained());
        assert!(model.metadata().training_accuracy < 1.0);
    }

    #[test]
    fn test_severity_model_predicts_known_score_for_any_text() {
        let model = severity_model();
        let known: Vec<i32> = SEVERITY_TRAINING_SET.iter().map(|(_, s)| *s).collect();

        for text in ["x", "", "completely unrelated words", "help"] {
            let score = model.predict_text(text).unwrap();
            assert!(known.contains(&score), "{} not a training label", score);
        }
    }

    #[test]
    fn test_severity_model_rejects_empty_training() {
        assert!(SeverityModel::train(&[], &[], None).is_err());
    }
}
