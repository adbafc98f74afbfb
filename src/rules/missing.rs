//! Missing translation detection rule.
//!
//! A used string is missing when no catalog has it, or when some catalog
//! lacks it. Each finding lists the languages to fix.

use std::collections::BTreeSet;

use crate::{
    core::{CatalogSet, UsedStrings},
    issues::MissingTranslation,
};

/// Find used strings that are absent from one or more catalogs.
///
/// Special keys take part in neither side of the comparison: they are
/// removed from every key set, and a used string equal to one is skipped.
///
/// # Arguments
/// * `used` - Used strings, after exclusion
/// * `catalogs` - All loaded catalogs
/// * `special_keys` - Reserved catalog keys never expected in the sources
pub fn find_missing(
    used: &UsedStrings,
    catalogs: &CatalogSet,
    special_keys: &BTreeSet<String>,
) -> Vec<MissingTranslation> {
    used.iter()
        .filter(|(text, _)| !special_keys.contains(text.as_str()))
        .filter_map(|(text, occurrences)| {
            let missing_from: Vec<String> = catalogs
                .iter()
                .filter(|catalog| !catalog.contains_key(text))
                .map(|catalog| catalog.language.clone())
                .collect();

            // With no catalogs at all every string is missing from all (zero) languages.
            if missing_from.is_empty() && !catalogs.is_empty() {
                return None;
            }

            Some(MissingTranslation {
                text: text.clone(),
                occurrences: occurrences.clone(),
                missing_from,
            })
        })
        .collect()
}
