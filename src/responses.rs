use crate::{config::ResponseEntry, Error, Result};
use std::collections::HashMap;

/// The default answer for categories without a configured response.
pub const FALLBACK_RESPONSE: &str = "Sorry, I don't understand your question.";

/// Static category -> canned answer table, immutable after construction.
///
/// Duplicate categories are a configuration error: silently letting a later
/// entry overwrite an earlier one hides authoring mistakes.
#[derive(Debug, Clone)]
pub struct ResponseTable {
    entries: HashMap<String, String>,
}

impl ResponseTable {
    pub fn new(entries: &[ResponseEntry]) -> Result<Self> {
        let mut table = HashMap::with_capacity(entries.len());

        for entry in entries {
            let category = entry.category.trim();
            if category.is_empty() {
                return Err(Error::config("response entry with empty category"));
            }
            if table.insert(category.to_string(), entry.text.clone()).is_some() {
                return Err(Error::config(format!(
                    "duplicate response category: '{}'",
                    category
                )));
            }
        }

        Ok(Self { entries: table })
    }

    /// The canned answer for `category`, or the fallback message.
    pub fn lookup(&self, category: &str) -> &str {
        self.entries
            .get(category)
            .map(String::as_str)
            .unwrap_or(FALLBACK_RESPONSE)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `text` is one of the configured answers or the fallback.
    pub fn contains_text(&self, text: &str) -> bool {
        text == FALLBACK_RESPONSE || self.entries.values().any(|t| t == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(category: &str, text: &str) -> ResponseEntry {
        ResponseEntry {
            category: category.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn lookup_returns_configured_answer() {
        let table = ResponseTable::new(&[entry("diabetes", "Diabetes is a chronic condition.")])
            .unwrap();
        assert_eq!(table.lookup("diabetes"), "Diabetes is a chronic condition.");
    }

    #[test]
    fn lookup_falls_back_for_unknown_category() {
        let table = ResponseTable::new(&[entry("diabetes", "answer")]).unwrap();
        assert_eq!(table.lookup("astrology"), FALLBACK_RESPONSE);
    }

    #[test]
    fn duplicate_categories_are_rejected() {
        let result = ResponseTable::new(&[entry("diabetes", "a"), entry("diabetes", "b")]);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn empty_category_is_rejected() {
        let result = ResponseTable::new(&[entry("  ", "a")]);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn empty_table_is_allowed_and_always_falls_back() {
        let table = ResponseTable::new(&[]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.lookup("anything"), FALLBACK_RESPONSE);
    }
}
