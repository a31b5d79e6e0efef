use crate::ml::models::{MlError, MlResult};
use ndarray::{Array1, Array2};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Runs of two or more word characters
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("Failed to compile token pattern"));

/// TF-IDF vectorizer over unigram terms
///
/// Terms are lower-cased tokens of two or more word characters. The vocabulary
/// is every term seen during fitting, indexed in sorted order. Weights are raw
/// counts times a smoothed IDF, each row L2-normalised. Terms outside the
/// vocabulary are ignored at transform time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Vocabulary mapping (term -> column)
    vocabulary: HashMap<String, usize>,

    /// Inverse document frequency per column
    idf: Vec<f64>,

    /// Is fitted (vocabulary built)
    is_fitted: bool,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the vocabulary and IDF weights from a corpus
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> MlResult<()> {
        if documents.is_empty() {
            return Err(MlError::InvalidTrainingData(
                "cannot fit vectorizer on an empty corpus".to_string(),
            ));
        }

        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| Self::tokenize(doc.as_ref()))
            .collect();

        let terms: BTreeSet<&String> = tokenized.iter().flatten().collect();
        if terms.is_empty() {
            return Err(MlError::InvalidTrainingData(
                "corpus produced an empty vocabulary".to_string(),
            ));
        }

        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        // Document frequency per column
        let mut doc_freq = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: BTreeSet<usize> = tokens.iter().map(|t| vocabulary[t]).collect();
            for idx in unique {
                doc_freq[idx] += 1;
            }
        }

        let n_docs = documents.len() as f64;
        self.idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();
        self.vocabulary = vocabulary;
        self.is_fitted = true;

        Ok(())
    }

    /// Transform one document into an L2-normalised TF-IDF row
    pub fn transform(&self, text: &str) -> MlResult<Array1<f64>> {
        if !self.is_fitted {
            return Err(MlError::NotFitted);
        }

        let mut row = Array1::<f64>::zeros(self.vocabulary.len());
        for token in Self::tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                row[idx] += 1.0;
            }
        }

        for (idx, value) in row.iter_mut().enumerate() {
            *value *= self.idf[idx];
        }

        let norm = row.dot(&row).sqrt();
        if norm > 0.0 {
            row.mapv_inplace(|v| v / norm);
        }

        Ok(row)
    }

    /// Transform a batch of documents into a (n_docs x vocab) matrix
    pub fn transform_batch<S: AsRef<str>>(&self, documents: &[S]) -> MlResult<Array2<f64>> {
        let mut matrix = Array2::<f64>::zeros((documents.len(), self.vocab_size()));
        for (i, doc) in documents.iter().enumerate() {
            let row = self.transform(doc.as_ref())?;
            matrix.row_mut(i).assign(&row);
        }
        Ok(matrix)
    }

    /// Fit and transform in one step
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> MlResult<Array2<f64>> {
        self.fit(documents)?;
        self.transform_batch(documents)
    }

    /// Lower-case and split into terms
    pub fn tokenize(text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        TOKEN_PATTERN
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Column index of a term
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Get vocabulary size
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Check if fitted
    pub fn is_fitted(&self) -> bool {
        self.is_fitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<&'static str> {
        vec![
            "flood water rising",
            "flood river overflow",
            "fire smoke spreading",
        ]
    }

    #[test]
    fn test_tokenize_drops_single_characters() {
        assert_eq!(
            TfidfVectorizer::tokenize("A flood, a FIRE & 2 x rivers!"),
            vec!["flood", "fire", "rivers"]
        );
    }

    #[test]
    fn test_unfitted_transform_fails() {
        let vectorizer = TfidfVectorizer::new();
        assert!(!vectorizer.is_fitted());
        assert_eq!(vectorizer.transform("flood"), Err(MlError::NotFitted));
    }

    #[test]
    fn test_fit_rejects_empty_corpus() {
        let mut vectorizer = TfidfVectorizer::new();
        let empty: Vec<&str> = vec![];
        assert!(matches!(
            vectorizer.fit(&empty),
            Err(MlError::InvalidTrainingData(_))
        ));
        assert!(matches!(
            vectorizer.fit(&["a b c"]),
            Err(MlError::InvalidTrainingData(_))
        ));
    }

    #[test]
    fn test_vocabulary_is_sorted() {
        let mut vectorizer = TfidfVectorizer::new();
        vectorizer.fit(&corpus()).unwrap();

        assert_eq!(vectorizer.vocab_size(), 8);
        assert_eq!(vectorizer.term_index("fire"), Some(0));
        assert_eq!(vectorizer.term_index("water"), Some(7));
        assert_eq!(vectorizer.term_index("quake"), None);
    }

    #[test]
    fn test_rows_are_l2_normalised() {
        let mut vectorizer = TfidfVectorizer::new();
        let matrix = vectorizer.fit_transform(&corpus()).unwrap();

        assert_eq!(matrix.shape(), &[3, 8]);
        for row in matrix.rows() {
            let norm = row.dot(&row).sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rare_terms_weigh_more() {
        let mut vectorizer = TfidfVectorizer::new();
        vectorizer.fit(&corpus()).unwrap();

        let row = vectorizer.transform("flood water").unwrap();
        let flood = row[vectorizer.term_index("flood").unwrap()];
        let water = row[vectorizer.term_index("water").unwrap()];
        assert!(water > flood);
    }

    #[test]
    fn test_out_of_vocabulary_is_zero_row() {
        let mut vectorizer = TfidfVectorizer::new();
        vectorizer.fit(&corpus()).unwrap();

        let row = vectorizer.transform("x").unwrap();
        assert_eq!(row.len(), 8);
        assert!(row.iter().all(|&v| v == 0.0));
    }
}
