//! catalint - translation catalog checker for static web frontends
//!
//! catalint scans HTML templates and JavaScript sources for user-facing
//! strings (elements carrying a marker class and calls to a translation
//! function) and compares them against per-language JSON catalogs. It reports
//! strings missing from catalogs and catalog keys nothing uses.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, text and JSON reports)
//! - `config`: Configuration file loading and validation
//! - `core`: Core analysis engine (discovery, extraction, exclusion, catalogs)
//! - `issues`: Findings produced by the comparison
//! - `rules`: Missing and unused detection
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod utils;
