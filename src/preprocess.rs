use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

/// Normalizes free text into the token string the classifier is trained on.
///
/// Lowercases, splits on anything non-alphanumeric (punctuation is dropped),
/// filters English stopwords, and reduces the remaining words to their stems.
/// Deterministic and side-effect free; the output may be empty if every token
/// was filtered out.
pub struct Preprocessor {
    stemmer: Stemmer,
    stopwords: HashSet<String>,
}

impl Preprocessor {
    pub fn new() -> Self {
        let stopwords = stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .collect();

        Self {
            stemmer: Stemmer::create(Algorithm::English),
            stopwords,
        }
    }

    /// Normalize `text` into a space-joined string of stemmed tokens.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();

        lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty() && !self.stopwords.contains(*token))
            .map(|token| self.stemmer.stem(token).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
