use std::collections::{BTreeMap, btree_map};

use serde::Serialize;

/// Position of a translatable string in a markup or script file.
///
/// Line and column are computed against the original file content, even
/// when matching ran over a comment-stripped copy.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Occurrence {
    /// Path of the source file, relative to the project root when possible.
    pub file: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in characters).
    pub col: usize,
}

impl Occurrence {
    pub fn new(file: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file: file.into(),
            line,
            col,
        }
    }
}

/// A source file read into memory, ready to be scanned.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Display path used in occurrences.
    pub path: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Every translatable string found in the sources, with where it was found.
///
/// Keys are compared exactly (case-sensitive, no trimming). Occurrence lists
/// keep insertion order and are never deduplicated: the same text found by
/// two strategies at the same place is listed twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedStrings {
    entries: BTreeMap<String, Vec<Occurrence>>,
}

impl UsedStrings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence. Empty text is never a source string and is ignored.
    pub fn record(&mut self, text: impl Into<String>, occurrence: Occurrence) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.entries.entry(text).or_default().push(occurrence);
    }

    /// Append all occurrences from `other` after the ones already recorded.
    pub fn merge(&mut self, other: UsedStrings) {
        for (text, occurrences) in other.entries {
            self.entries.entry(text).or_default().extend(occurrences);
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    pub fn occurrences(&self, text: &str) -> &[Occurrence] {
        self.entries.get(text).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All distinct texts, sorted.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<Occurrence>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Split into the strings matching `predicate` and the rest.
    pub fn partition<F>(self, mut predicate: F) -> (UsedStrings, UsedStrings)
    where
        F: FnMut(&str) -> bool,
    {
        let (matched, rest): (BTreeMap<_, _>, BTreeMap<_, _>) = self
            .entries
            .into_iter()
            .partition(|(text, _)| predicate(text));
        (UsedStrings { entries: matched }, UsedStrings { entries: rest })
    }
}

impl IntoIterator for UsedStrings {
    type Item = (String, Vec<Occurrence>);
    type IntoIter = btree_map::IntoIter<String, Vec<Occurrence>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a UsedStrings {
    type Item = (&'a String, &'a Vec<Occurrence>);
    type IntoIter = btree_map::Iter<'a, String, Vec<Occurrence>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
