use serde::{Deserialize, Serialize};

/// One labeled question from the training CSV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingExample {
    pub question: String,
    pub category: String,
}
