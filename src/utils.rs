//! Common utility functions shared across the codebase.

/// Byte offsets where each line of a text starts.
///
/// Used to turn a byte offset into a 1-based (line, column) pair with a
/// binary search instead of rescanning the text for every match.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut starts = vec![0]; // Line 1 starts at offset 0
        for (i, c) in text.char_indices() {
            if c == '\n' {
                starts.push(i + 1);
            }
        }
        Self { text, starts }
    }

    /// 1-based line and column for a byte offset.
    ///
    /// Columns count characters, not bytes, so a position after non-ASCII text
    /// still points at the right place in an editor.
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.text.len());
        let line = match self.starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        };
        let line_start = self.starts[line - 1];
        let col = self.text[line_start..offset].chars().count() + 1;
        (line, col)
    }
}

/// Plural suffix helper for report messages.
pub fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}
