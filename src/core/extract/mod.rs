//! String extraction: finds every translatable string in markup and script
//! sources.
//!
//! Three independent strategies, each running on its own comment-stripped
//! copy of the file:
//!
//! - `markup`: marker-class elements in HTML files
//! - `call_site`: literal arguments of the translation function in scripts
//! - `embedded`: marker-class markup written inside script strings
//!
//! Results are merged in that order into one `UsedStrings` map.

pub mod call_site;
pub mod embedded;
pub mod markup;
pub mod sanitize;

use anyhow::Result;

pub use call_site::{CallPattern, extract_call_strings};
pub use embedded::extract_embedded_strings;
pub use markup::{MarkerPattern, extract_markup_strings, is_complex_payload};

use crate::config::Config;
use crate::core::{SourceFile, UsedStrings};

/// Distinct strings found by each strategy, before merging and exclusion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub markup_elements: usize,
    pub call_sites: usize,
    pub embedded_elements: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub used: UsedStrings,
    pub stats: ExtractionStats,
}

/// Compiled matchers for one marker class and translation function.
#[derive(Debug, Clone)]
pub struct Extractor {
    markup_marker: MarkerPattern,
    script_marker: MarkerPattern,
    calls: CallPattern,
}

impl Extractor {
    pub fn new(marker_class: &str, translate_function: &str) -> Result<Self> {
        Ok(Self {
            markup_marker: MarkerPattern::markup(marker_class)?,
            script_marker: MarkerPattern::script(marker_class)?,
            calls: CallPattern::new(translate_function)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.marker_class, &config.translate_function)
    }

    /// Run all three strategies and merge their results.
    ///
    /// Occurrence lists are concatenated per strategy, then per file in the
    /// order given, so the output only depends on the inputs.
    pub fn extract(&self, markup_files: &[SourceFile], script_files: &[SourceFile]) -> Extraction {
        let markup = collect(markup_files, |f| {
            extract_markup_strings(f, &self.markup_marker)
        });
        let calls = collect(script_files, |f| extract_call_strings(f, &self.calls));
        let embedded = collect(script_files, |f| {
            extract_embedded_strings(f, &self.script_marker, &self.calls)
        });

        let stats = ExtractionStats {
            markup_elements: markup.len(),
            call_sites: calls.len(),
            embedded_elements: embedded.len(),
        };

        let mut used = markup;
        used.merge(calls);
        used.merge(embedded);

        Extraction { used, stats }
    }
}

fn collect<F>(files: &[SourceFile], strategy: F) -> UsedStrings
where
    F: Fn(&SourceFile) -> UsedStrings,
{
    let mut used = UsedStrings::new();
    for file in files {
        used.merge(strategy(file));
    }
    used
}
