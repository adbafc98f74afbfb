//! Comment stripping that remembers where every remaining byte came from.
//!
//! Matching runs on the stripped copy, but occurrences must point into the
//! original file. Each stripping pass records a shift table: for every gap it
//! leaves, the offset in the stripped text where the gap starts and the total
//! number of bytes removed up to that point.

use std::sync::LazyLock;

use regex::Regex;

use crate::utils::LineIndex;

static HTML_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static LINE_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//[^\n]*").unwrap());

static BLOCK_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Sorted `(stripped_offset, removed_so_far)` pairs for one pass.
type ShiftTable = Vec<(usize, usize)>;

/// A comment-free copy of a source file.
#[derive(Debug, Clone)]
pub struct Sanitized<'a> {
    original: &'a str,
    text: String,
    passes: Vec<ShiftTable>,
}

impl<'a> Sanitized<'a> {
    /// Markup: removes `<!-- ... -->`, including comments spanning lines.
    pub fn markup(original: &'a str) -> Self {
        Self::strip(original, &[&HTML_COMMENT_REGEX])
    }

    /// Script: removes `// ...` line comments, then `/* ... */` block comments.
    ///
    /// Line comments go first, so `//` inside a string literal (a URL for
    /// instance) also cuts the rest of that line.
    pub fn script(original: &'a str) -> Self {
        Self::strip(original, &[&LINE_COMMENT_REGEX, &BLOCK_COMMENT_REGEX])
    }

    fn strip(original: &'a str, patterns: &[&Regex]) -> Self {
        let mut text = original.to_string();
        let mut passes = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            let (stripped, shifts) = remove_matches(&text, pattern);
            text = stripped;
            passes.push(shifts);
        }

        Self {
            original,
            text,
            passes,
        }
    }

    /// The stripped text that patterns should run on.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn original(&self) -> &'a str {
        self.original
    }

    /// Map a byte offset in the stripped text back to the original content.
    pub fn to_original(&self, offset: usize) -> usize {
        self.passes
            .iter()
            .rev()
            .fold(offset, |offset, shifts| apply_shift(shifts, offset))
    }
}

/// Converts stripped-text offsets into original (line, column) positions.
pub struct PositionMapper<'s, 'a> {
    sanitized: &'s Sanitized<'a>,
    lines: LineIndex<'a>,
}

impl<'s, 'a> PositionMapper<'s, 'a> {
    pub fn new(sanitized: &'s Sanitized<'a>) -> Self {
        Self {
            sanitized,
            lines: LineIndex::new(sanitized.original()),
        }
    }

    pub fn position(&self, stripped_offset: usize) -> (usize, usize) {
        self.lines
            .position(self.sanitized.to_original(stripped_offset))
    }
}

fn remove_matches(text: &str, pattern: &Regex) -> (String, ShiftTable) {
    let mut out = String::with_capacity(text.len());
    let mut shifts = ShiftTable::new();
    let mut removed = 0;
    let mut last = 0;

    for m in pattern.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        removed += m.len();
        shifts.push((out.len(), removed));
        last = m.end();
    }
    out.push_str(&text[last..]);

    (out, shifts)
}

fn apply_shift(shifts: &[(usize, usize)], offset: usize) -> usize {
    let idx = shifts.partition_point(|(start, _)| *start <= offset);
    if idx == 0 {
        offset
    } else {
        offset + shifts[idx - 1].1
    }
}
