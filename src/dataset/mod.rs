mod types;

pub use types::*;

use crate::{Error, Result};
use std::path::Path;
use tracing::info;

/// Loads training examples from a CSV file with `question` and `category`
/// headers. Any malformed or empty row is fatal: the classifier must not be
/// fit on junk, and there is no serving without a classifier.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<TrainingExample>> {
    let path = path.as_ref();

    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| Error::dataset(format!("failed to open {}: {}", path.display(), e)))?;

    let mut examples = Vec::new();
    for (index, row) in reader.deserialize::<TrainingExample>().enumerate() {
        // Header row is line 1, so data rows start at line 2
        let line = index + 2;
        let example = row.map_err(|e| Error::dataset(format!("line {}: {}", line, e)))?;

        if example.question.trim().is_empty() {
            return Err(Error::dataset(format!("line {}: empty question", line)));
        }
        if example.category.trim().is_empty() {
            return Err(Error::dataset(format!("line {}: empty category", line)));
        }

        examples.push(example);
    }

    if examples.is_empty() {
        return Err(Error::dataset(format!(
            "no training examples in {}",
            path.display()
        )));
    }

    info!(
        "Loaded {} training examples from {}",
        examples.len(),
        path.display()
    );

    Ok(examples)
}
