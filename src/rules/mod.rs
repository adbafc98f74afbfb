//! Rule implementations for catalint.
//!
//! Pure set comparisons between the used strings and the loaded catalogs.
//! Each function takes only the specific inputs it needs.
//!
//! ## Module Structure
//!
//! - `missing`: Used strings that one or more catalogs lack
//! - `unused`: Catalog keys no source references

pub mod missing;
pub mod unused;

use std::collections::BTreeSet;

pub use missing::find_missing;
pub use unused::find_unused;

use crate::{
    core::{CatalogSet, UsedStrings},
    issues::DiffResult,
};

/// Compare used strings (already filtered by exclusion) against the catalogs.
///
/// Special keys are dropped from both comparisons; the whitelist only applies
/// to the unused side.
pub fn diff(
    used: &UsedStrings,
    catalogs: &CatalogSet,
    special_keys: &BTreeSet<String>,
    whitelist: &BTreeSet<String>,
) -> DiffResult {
    DiffResult {
        missing: find_missing(used, catalogs, special_keys),
        unused: find_unused(used, catalogs, special_keys, whitelist),
    }
}
