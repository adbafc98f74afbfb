//! Core data types used across all pipeline phases.
//!
//! ## Module Structure
//!
//! - `catalog`: Translation catalog types (Catalog, CatalogSet)
//! - `source`: Source-side types (SourceFile, Occurrence, UsedStrings)

pub mod catalog;
pub mod source;

pub use catalog::{Catalog, CatalogSet};
pub use source::{Occurrence, SourceFile, UsedStrings};
