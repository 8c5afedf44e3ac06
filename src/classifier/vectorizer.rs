use crate::{Error, Result};
use ndarray::{Array1, Array2};
use std::collections::HashMap;

/// TF-IDF vectorizer over whitespace-tokenized, already-normalized documents.
///
/// `fit` builds the vocabulary and smoothed inverse document frequencies;
/// `transform` produces an L2-normalized dense vector. Terms outside the
/// fitted vocabulary are ignored, so an entirely out-of-vocabulary document
/// maps to the zero vector.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    pub fn fit(documents: &[String]) -> Result<Self> {
        if documents.is_empty() {
            return Err(Error::training("cannot fit vectorizer on zero documents"));
        }

        let n_documents = documents.len();
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();

        for doc in documents {
            let mut seen: Vec<&str> = doc.split_whitespace().collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(Error::training(
                "vocabulary is empty: every training question normalized to nothing",
            ));
        }

        // Sorted terms so vocabulary indices are deterministic
        let mut terms: Vec<&str> = document_frequency.keys().copied().collect();
        terms.sort_unstable();

        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (index, term) in terms.into_iter().enumerate() {
            let df = document_frequency[term];
            // Smoothed IDF: ln((N + 1) / (df + 1)) + 1
            idf.push(((n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
            vocabulary.insert(term.to_string(), index);
        }

        Ok(Self { vocabulary, idf })
    }

    pub fn transform(&self, document: &str) -> Array1<f64> {
        let mut vector = Array1::<f64>::zeros(self.vocabulary.len());

        for term in document.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(term) {
                vector[index] += self.idf[index];
            }
        }

        // L2 normalization; the zero vector stays zero
        let norm = vector.dot(&vector).sqrt();
        if norm > 1e-10 {
            vector /= norm;
        }

        vector
    }

    /// Transform a batch of documents into a dense matrix, one row each.
    pub fn transform_all(&self, documents: &[String]) -> Array2<f64> {
        let mut matrix = Array2::zeros((documents.len(), self.vocabulary.len()));
        for (row, doc) in documents.iter().enumerate() {
            matrix.row_mut(row).assign(&self.transform(doc));
        }
        matrix
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}
