//! Classification of strings that are passed through translation markers but
//! are not user-facing text (CSS selectors, SVG tag lists, escape sequences).

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use regex::Regex;

use crate::core::UsedStrings;

/// Ordered list of start-anchored patterns; a string matching any of them is
/// excluded from every comparison.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    patterns: Vec<Regex>,
}

impl ExclusionFilter {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                // Only a match at the start of the string counts.
                Regex::new(&format!("^(?:{})", p))
                    .with_context(|| format!("Invalid exclusion pattern: \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn is_excluded(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }

    /// Split used strings into the ones kept for diffing and the sorted set of
    /// excluded texts.
    pub fn partition(&self, used: UsedStrings) -> (UsedStrings, BTreeSet<String>) {
        let (excluded, kept) = used.partition(|text| self.is_excluded(text));
        let excluded = excluded.into_iter().map(|(text, _)| text).collect();
        (kept, excluded)
    }
}
