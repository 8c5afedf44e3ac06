use crate::{Error, Result};

/// Bidirectional mapping between category labels and dense integer codes.
///
/// Labels are sorted before encoding so the code assignment is stable across
/// runs regardless of dataset row order.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    labels: Vec<String>,
}

impl LabelEncoder {
    pub fn fit<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut labels: Vec<String> = labels
            .into_iter()
            .map(|label| label.as_ref().to_string())
            .collect();
        labels.sort();
        labels.dedup();

        Self { labels }
    }

    pub fn encode(&self, label: &str) -> Option<usize> {
        self.labels.binary_search_by(|l| l.as_str().cmp(label)).ok()
    }

    pub fn decode(&self, code: usize) -> Result<&str> {
        self.labels
            .get(code)
            .map(String::as_str)
            .ok_or(Error::UnknownCategoryCode { code })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
