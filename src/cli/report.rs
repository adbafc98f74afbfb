//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow catalint to be used as a library.
//! Everything is written through a `Write` sink so output can be tested.

use std::io::{self, Write};

use colored::Colorize;

use crate::{
    core::CheckOutcome,
    issues::MissingTranslation,
    utils::plural,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of languages listed per missing string.
const MAX_LANGUAGES_DISPLAY: usize = 5;

const RULE_WIDTH: usize = 80;

/// Text report options. Only affects presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// List every excluded string.
    pub verbose: bool,
    /// Omit locations and missing-from lists.
    pub compact: bool,
}

/// Print the text report to stdout.
pub fn report(outcome: &CheckOutcome, options: ReportOptions) {
    report_to(outcome, options, &mut io::stdout().lock());
}

/// Print the text report to a custom writer.
pub fn report_to<W: Write>(outcome: &CheckOutcome, options: ReportOptions, writer: &mut W) {
    print_banner("Translation String Checker", writer);
    let _ = writeln!(writer);

    print_scan_stats(outcome, writer);
    print_excluded(outcome, options, writer);
    print_catalog_stats(outcome, writer);

    print_banner("RESULTS", writer);
    let _ = writeln!(writer);
    print_missing(outcome, options, writer);
    print_unused(outcome, writer);

    print_summary(outcome, writer);
}

/// Print scan and catalog warnings to stderr.
pub fn print_warnings(outcome: &CheckOutcome) {
    print_warnings_to(outcome, &mut io::stderr().lock());
}

/// Print warnings to a custom writer.
pub fn print_warnings_to<W: Write>(outcome: &CheckOutcome, writer: &mut W) {
    for warning in &outcome.warnings {
        let _ = writeln!(
            writer,
            "{} {}: {}",
            "warning:".bold().yellow(),
            warning.file_path,
            warning.error
        );
    }

    if outcome.no_catalogs() {
        let _ = writeln!(
            writer,
            "{} No translation catalogs found in {}",
            "warning:".bold().yellow(),
            outcome.catalogs_dir
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_banner<W: Write>(title: &str, writer: &mut W) {
    let rule = "=".repeat(RULE_WIDTH);
    let _ = writeln!(writer, "{}", rule);
    let _ = writeln!(writer, "{}", title.bold());
    let _ = writeln!(writer, "{}", rule);
}

fn print_scan_stats<W: Write>(outcome: &CheckOutcome, writer: &mut W) {
    let markup = outcome.markup_files_checked;
    let scripts = outcome.script_files_checked;
    let stats = &outcome.stats;

    let _ = writeln!(writer, "Scanning source files...");
    let _ = writeln!(writer, "Found {} HTML {}", markup, plural(markup, "file", "files"));
    let _ = writeln!(
        writer,
        "Found {} JavaScript {}",
        scripts,
        plural(scripts, "file", "files")
    );
    let _ = writeln!(writer);

    let _ = writeln!(writer, "Extracting translation strings from source files...");
    let _ = writeln!(
        writer,
        "Found {} marked {} in HTML files",
        stats.markup_elements,
        plural(stats.markup_elements, "string", "strings")
    );
    let _ = writeln!(
        writer,
        "Found {} {} in translation calls",
        stats.call_sites,
        plural(stats.call_sites, "string", "strings")
    );
    let _ = writeln!(
        writer,
        "Found {} marked {} in JavaScript files",
        stats.embedded_elements,
        plural(stats.embedded_elements, "string", "strings")
    );
    let _ = writeln!(writer);
}

fn print_excluded<W: Write>(outcome: &CheckOutcome, options: ReportOptions, writer: &mut W) {
    if outcome.excluded.is_empty() {
        return;
    }

    let count = outcome.excluded.len();
    let _ = writeln!(
        writer,
        "Excluded {} non-translatable {} (CSS selectors, etc.)",
        count,
        plural(count, "string", "strings")
    );
    if options.verbose {
        for text in &outcome.excluded {
            let _ = writeln!(writer, "  - \"{}\"", text.dimmed());
        }
    }
    let _ = writeln!(writer);
}

fn print_catalog_stats<W: Write>(outcome: &CheckOutcome, writer: &mut W) {
    let keys = outcome.translation_key_count;
    let languages = outcome.language_count();

    let _ = writeln!(writer, "Loading translation keys from catalogs...");
    let _ = writeln!(writer, "Found {} {} in translation files", keys, plural(keys, "key", "keys"));
    let _ = writeln!(
        writer,
        "Found {} language {}",
        languages,
        plural(languages, "file", "files")
    );
    let _ = writeln!(writer);
}

fn print_missing<W: Write>(outcome: &CheckOutcome, options: ReportOptions, writer: &mut W) {
    let missing = &outcome.diff.missing;
    if missing.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No missing translations found".green()
        );
        let _ = writeln!(writer);
        return;
    }

    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!(
            "MISSING TRANSLATIONS ({} {})",
            missing.len(),
            plural(missing.len(), "string", "strings")
        )
        .bold()
        .red()
    );
    let _ = writeln!(
        writer,
        "These strings are used in code but not found in translation files:"
    );
    let _ = writeln!(writer, "{}", "-".repeat(RULE_WIDTH));

    for entry in missing {
        let _ = writeln!(writer, "  - \"{}\"", entry.text);
        if !options.compact {
            print_locations(entry, writer);
            print_missing_from(entry, outcome.language_count(), writer);
        }
    }
    let _ = writeln!(writer);
}

fn print_locations<W: Write>(entry: &MissingTranslation, writer: &mut W) {
    let Some(first) = entry.occurrences.first() else {
        return;
    };

    let _ = writeln!(
        writer,
        "    {} {}:{}:{}",
        "-->".blue(),
        first.file,
        first.line,
        first.col
    );

    let more = entry.occurrences.len() - 1;
    if more > 0 {
        let _ = writeln!(
            writer,
            "    (and {} more {})",
            more,
            plural(more, "location", "locations")
        );
    }
}

fn print_missing_from<W: Write>(entry: &MissingTranslation, language_count: usize, writer: &mut W) {
    let languages = &entry.missing_from;
    let listed = if entry.is_missing_everywhere(language_count) {
        format!("ALL languages ({})", language_count)
    } else if languages.len() <= MAX_LANGUAGES_DISPLAY {
        languages.join(", ")
    } else {
        format!(
            "{} (and {} more)",
            languages[..MAX_LANGUAGES_DISPLAY].join(", "),
            languages.len() - MAX_LANGUAGES_DISPLAY
        )
    };

    let _ = writeln!(writer, "    {} {}", "Missing from:".dimmed(), listed);
}

fn print_unused<W: Write>(outcome: &CheckOutcome, writer: &mut W) {
    let unused = &outcome.diff.unused;
    if unused.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No unused translations found".green()
        );
        let _ = writeln!(writer);
        return;
    }

    let _ = writeln!(
        writer,
        "{} {}",
        "info:".bold().cyan(),
        format!(
            "UNUSED TRANSLATIONS ({} {})",
            unused.len(),
            plural(unused.len(), "string", "strings")
        )
        .bold()
    );
    let _ = writeln!(
        writer,
        "These strings are in translation files but not used in code:"
    );
    let _ = writeln!(writer, "{}", "-".repeat(RULE_WIDTH));
    for key in unused {
        let _ = writeln!(writer, "  - \"{}\"", key);
    }
    let _ = writeln!(writer);
}

fn print_summary<W: Write>(outcome: &CheckOutcome, writer: &mut W) {
    print_banner("SUMMARY", writer);
    let _ = writeln!(writer, "Total strings used in code: {}", outcome.used.len());
    let _ = writeln!(
        writer,
        "Total keys in translation files: {}",
        outcome.translation_key_count
    );
    let _ = writeln!(writer, "Missing translations: {}", outcome.diff.missing.len());
    let _ = writeln!(writer, "Unused translations: {}", outcome.diff.unused.len());
    let _ = writeln!(writer, "Whitelisted strings: {}", outcome.whitelist.len());
    let _ = writeln!(writer);

    if outcome.has_issues() {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            "Translation files need updates".bold().red()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All translations are in sync".bold().green()
        );
    }
}
