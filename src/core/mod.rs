//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `context`: One check run, from file discovery to the diff result
//! - `data`: Shared data types (catalogs, sources, occurrences)
//! - `exclusion`: Filter for technical strings that are not user-facing
//! - `extract`: The three string extraction strategies
//! - `file_scanner`: Markup and script file discovery
//! - `parsers`: Catalog loading

pub mod context;
pub mod data;
pub mod exclusion;
pub mod extract;
pub mod file_scanner;
pub mod parsers;

pub use context::{CheckContext, CheckOutcome};
pub use data::{Catalog, CatalogSet, Occurrence, SourceFile, UsedStrings};
