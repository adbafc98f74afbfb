//! Translation function call extraction from script files.

use anyhow::{Context, Result};
use regex::Regex;

use super::sanitize::{PositionMapper, Sanitized};
use crate::core::{Occurrence, SourceFile, UsedStrings};

/// Matchers for calls to the translation function.
#[derive(Debug, Clone)]
pub struct CallPattern {
    /// `l('text')`, `this.l("text")`, `` l(`text`) ``.
    call: Regex,
    /// `${l('text')}` inside a template literal.
    interpolation: Regex,
}

impl CallPattern {
    pub fn new(function: &str) -> Result<Self> {
        let name = regex::escape(function);
        // The argument must be one literal with no quote characters inside,
        // so concatenations and nested calls never match.
        let literal = r#"\s*\(\s*["'`]([^"'`]+)["'`]\s*\)"#;

        let call = format!(r"(?:this\.)?\b{}{}", name, literal);
        let interpolation = format!(r"\$\{{{}{}\}}", name, literal);

        Ok(Self {
            call: Regex::new(&call)
                .with_context(|| format!("Failed to build call pattern: {}", call))?,
            interpolation: Regex::new(&interpolation).with_context(|| {
                format!("Failed to build interpolation pattern: {}", interpolation)
            })?,
        })
    }

    /// Literal arguments of every call in `text`, with the call's start offset.
    pub fn calls<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (usize, &'a str)> + 'a {
        captures_with_offset(&self.call, text)
    }

    /// Literal arguments of every `${fn('...')}` interpolation in `text`, with
    /// the offset of the `$`.
    pub fn interpolations<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = (usize, &'a str)> + 'a {
        captures_with_offset(&self.interpolation, text)
    }

    pub fn has_interpolation(&self, text: &str) -> bool {
        self.interpolation.is_match(text)
    }
}

fn captures_with_offset<'a>(
    regex: &'a Regex,
    text: &'a str,
) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    regex.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        let literal = caps.get(1)?;
        Some((whole.start(), literal.as_str()))
    })
}

/// Strategy 2: literal arguments of translation calls in script files.
pub fn extract_call_strings(file: &SourceFile, pattern: &CallPattern) -> UsedStrings {
    let sanitized = Sanitized::script(&file.content);
    let mapper = PositionMapper::new(&sanitized);
    let mut used = UsedStrings::new();

    for (start, text) in pattern.calls(sanitized.text()) {
        let (line, col) = mapper.position(start);
        used.record(text, Occurrence::new(&file.path, line, col));
    }

    used
}
