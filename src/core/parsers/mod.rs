//! File parsers for translation catalogs.
//!
//! - `catalog`: flat JSON catalog parser (scans the catalog directory)

pub mod catalog;
