use crate::{
    classifier::{LabelEncoder, Pipeline},
    dataset::TrainingExample,
    preprocess::Preprocessor,
    responses::ResponseTable,
    Error, Result,
};
use tracing::{debug, info};

/// The trained question-answering engine.
///
/// Built once at startup by [`Engine::fit`] and shared read-only by every
/// request handler afterwards; nothing in here mutates, so it can sit behind
/// a plain `Arc` with no locking.
pub struct Engine {
    preprocessor: Preprocessor,
    pipeline: Pipeline,
    labels: LabelEncoder,
    responses: ResponseTable,
}

impl Engine {
    /// Fit the label encoder and classification pipeline over the full
    /// training set and assemble the immutable engine.
    ///
    /// Fails on an empty dataset, a dataset with fewer than two distinct
    /// categories, or an SVM fit failure; all of these mean the process
    /// cannot serve and must not start.
    pub fn fit(examples: &[TrainingExample], responses: ResponseTable) -> Result<Self> {
        if examples.is_empty() {
            return Err(Error::training("training dataset is empty"));
        }

        let labels = LabelEncoder::fit(examples.iter().map(|e| e.category.as_str()));
        if labels.len() < 2 {
            return Err(Error::training(format!(
                "need at least two distinct categories to train, got {}",
                labels.len()
            )));
        }

        let preprocessor = Preprocessor::new();
        let documents: Vec<String> = examples
            .iter()
            .map(|e| preprocessor.normalize(&e.question))
            .collect();

        let codes: Vec<usize> = examples
            .iter()
            .map(|e| {
                labels.encode(&e.category).ok_or_else(|| {
                    Error::internal(format!("category '{}' missing from encoder", e.category))
                })
            })
            .collect::<Result<_>>()?;

        let pipeline = Pipeline::fit(&documents, &codes, labels.len())?;

        info!(
            "Trained classifier: {} examples, {} categories, {} responses configured",
            examples.len(),
            labels.len(),
            responses.len()
        );

        Ok(Self {
            preprocessor,
            pipeline,
            labels,
            responses,
        })
    }

    /// Classify a raw question into its category label.
    pub fn classify(&self, question: &str) -> Result<&str> {
        let normalized = self.preprocessor.normalize(question);
        let code = self.pipeline.predict(&normalized);
        let category = self.labels.decode(code)?;

        debug!(
            "Classified question into '{}' (code {})",
            category, code
        );

        Ok(category)
    }

    /// Answer a raw question: classify it, then look up the canned response
    /// for its category, falling back to the default message.
    pub fn answer(&self, question: &str) -> Result<String> {
        let category = self.classify(question)?;
        Ok(self.responses.lookup(category).to_string())
    }

    pub fn responses(&self) -> &ResponseTable {
        &self.responses
    }
}
