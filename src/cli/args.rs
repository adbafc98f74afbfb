//! CLI argument definitions using clap.
//!
//! All flags are independent and can be combined freely.

use std::path::PathBuf;

use clap::Parser;

use super::report::ReportOptions;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project root containing the templates, scripts and catalogs
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// List excluded strings in the text report
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the results as a single JSON document
    #[arg(long)]
    pub json: bool,

    /// Omit locations and per-language lists from the text report
    #[arg(long)]
    pub compact: bool,
}

impl Arguments {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            verbose: self.verbose,
            compact: self.compact,
        }
    }
}
