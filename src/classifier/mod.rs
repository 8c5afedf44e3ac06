mod labels;
mod vectorizer;

pub use labels::LabelEncoder;
pub use vectorizer::TfIdfVectorizer;

use crate::{Error, Result};
use linfa::prelude::*;
use linfa_svm::Svm;
use ndarray::Array1;
use tracing::debug;

/// Linear decision function for one category: f(x) = w·x - rho.
#[derive(Debug, Clone)]
struct ClassDecision {
    weights: Array1<f64>,
    rho: f64,
}

impl ClassDecision {
    #[inline]
    fn decision_function(&self, x: &Array1<f64>) -> f64 {
        self.weights.dot(x) - self.rho
    }
}

/// Trained text-classification pipeline: a fitted TF-IDF vectorizer plus one
/// linear SVM decision function per category (one-vs-rest).
///
/// Immutable once fitted; prediction is arg-max over the per-class decision
/// values with ties broken by the lowest class code, so any input, including
/// an empty or fully out-of-vocabulary one, maps to a deterministic class.
pub struct Pipeline {
    vectorizer: TfIdfVectorizer,
    classes: Vec<ClassDecision>,
}

impl Pipeline {
    /// Fit the pipeline over preprocessed documents and their class codes.
    ///
    /// `codes[i]` is the encoded category of `documents[i]` and must be below
    /// `n_classes`. Requires at least two classes: a single-class dataset has
    /// no decision boundary to learn.
    pub fn fit(documents: &[String], codes: &[usize], n_classes: usize) -> Result<Self> {
        if documents.len() != codes.len() {
            return Err(Error::training(format!(
                "{} documents but {} class codes",
                documents.len(),
                codes.len()
            )));
        }
        if n_classes < 2 {
            return Err(Error::training(format!(
                "need at least two categories to train, got {}",
                n_classes
            )));
        }

        let vectorizer = TfIdfVectorizer::fit(documents)?;
        let matrix = vectorizer.transform_all(documents);
        let dim = vectorizer.vocabulary_len();

        debug!(
            "Fitting {} one-vs-rest classifiers over {} documents ({} terms)",
            n_classes,
            documents.len(),
            dim
        );

        let mut classes = Vec::with_capacity(n_classes);
        for class in 0..n_classes {
            let targets: Array1<bool> = codes.iter().map(|&code| code == class).collect();
            let dataset = Dataset::new(matrix.clone(), targets);

            let svm = Svm::<_, bool>::params()
                .linear_kernel()
                .fit(&dataset)
                .map_err(|e| Error::training(format!("SVM fit failed for class {}: {}", class, e)))?;

            // Recover the primal weight vector: w = Σ αᵢ·xᵢ
            let mut weights = Array1::zeros(dim);
            for (i, &alpha_i) in svm.alpha.iter().enumerate() {
                weights = weights + &(matrix.row(i).to_owned() * alpha_i);
            }

            classes.push(ClassDecision {
                weights,
                rho: svm.rho,
            });
        }

        Ok(Self { vectorizer, classes })
    }

    /// Predict the class code of a preprocessed document.
    pub fn predict(&self, document: &str) -> usize {
        let x = self.vectorizer.transform(document);

        let mut best_class = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (class, decision) in self.classes.iter().enumerate() {
            let score = decision.decision_function(&x);
            if score > best_score {
                best_score = score;
                best_class = class;
            }
        }

        best_class
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }
}
