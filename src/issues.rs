//! Findings produced by the diff rules.

use crate::core::Occurrence;

/// A string used in the sources that at least one catalog does not provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslation {
    pub text: String,
    /// Every place the string was found, in extraction order.
    pub occurrences: Vec<Occurrence>,
    /// Languages whose catalog lacks the string, sorted.
    pub missing_from: Vec<String>,
}

impl MissingTranslation {
    /// True when no loaded catalog has the string.
    pub fn is_missing_everywhere(&self, language_count: usize) -> bool {
        self.missing_from.len() == language_count
    }
}

/// Result of comparing used strings against the catalogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Sorted by text.
    pub missing: Vec<MissingTranslation>,
    /// Catalog keys no source references, sorted.
    pub unused: Vec<String>,
}

impl DiffResult {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unused.is_empty()
    }
}
