//! Machine-readable output for `--json`.
//!
//! Always carries every location and language regardless of the text report
//! options.

use anyhow::Result;
use serde::Serialize;

use crate::core::{CheckOutcome, Occurrence};

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub summary: JsonSummary,
    pub missing_translations: Vec<JsonMissing<'a>>,
    pub unused_translations: &'a [String],
    pub excluded_strings: Vec<&'a str>,
    pub whitelisted_strings: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct JsonSummary {
    pub total_strings_used: usize,
    pub total_translation_keys: usize,
    pub total_languages: usize,
    pub missing_count: usize,
    pub unused_count: usize,
    pub excluded_count: usize,
    pub whitelisted_count: usize,
}

#[derive(Debug, Serialize)]
pub struct JsonMissing<'a> {
    pub string: &'a str,
    pub missing_from_languages: &'a [String],
    pub locations: &'a [Occurrence],
}

impl<'a> JsonReport<'a> {
    pub fn new(outcome: &'a CheckOutcome) -> Self {
        let diff = &outcome.diff;
        Self {
            summary: JsonSummary {
                total_strings_used: outcome.used.len(),
                total_translation_keys: outcome.translation_key_count,
                total_languages: outcome.language_count(),
                missing_count: diff.missing.len(),
                unused_count: diff.unused.len(),
                excluded_count: outcome.excluded.len(),
                whitelisted_count: outcome.whitelist.len(),
            },
            missing_translations: diff
                .missing
                .iter()
                .map(|m| JsonMissing {
                    string: &m.text,
                    missing_from_languages: &m.missing_from,
                    locations: &m.occurrences,
                })
                .collect(),
            unused_translations: &diff.unused,
            excluded_strings: outcome.excluded.iter().map(String::as_str).collect(),
            whitelisted_strings: outcome.whitelist.iter().map(String::as_str).collect(),
        }
    }
}

/// Render the outcome as pretty-printed JSON.
pub fn render_json(outcome: &CheckOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::new(outcome))?)
}
