//! Unused translation detection rule.
//!
//! Detects catalog keys that no source string references.

use std::collections::BTreeSet;

use crate::core::{CatalogSet, UsedStrings};

/// Find catalog keys that are not used anywhere in the sources.
///
/// # Arguments
/// * `used` - Used strings, after exclusion
/// * `catalogs` - All loaded catalogs (keys of every language count)
/// * `special_keys` - Reserved catalog keys, never reported
/// * `whitelist` - Keys that may stay in the catalogs without being used
///
/// # Returns
/// Sorted list of unused keys
pub fn find_unused(
    used: &UsedStrings,
    catalogs: &CatalogSet,
    special_keys: &BTreeSet<String>,
    whitelist: &BTreeSet<String>,
) -> Vec<String> {
    catalogs
        .union_keys()
        .into_iter()
        .filter(|key| !special_keys.contains(*key))
        .filter(|key| !used.contains(key))
        .filter(|key| !whitelist.contains(*key))
        .map(str::to_string)
        .collect()
}
