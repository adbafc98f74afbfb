//! Marker-class element extraction.
//!
//! An element is translatable when the `class` attribute of its opening tag
//! contains the marker token. Its payload runs to the first closing tag with
//! the same name. Nested elements with the same tag name therefore cut the
//! payload short; there is no attempt to track nesting depth.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use super::sanitize::{PositionMapper, Sanitized};
use crate::core::{Occurrence, SourceFile, UsedStrings};

/// Inline formatting tags allowed inside a payload: bare `<b>`, `<i>`, `<em>`,
/// `<strong>`, `<span>` and their closing forms.
static SIMPLE_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?(?:b|i|em|strong|span)>").unwrap());

/// Opening-tag matcher for marker-class elements.
#[derive(Debug, Clone)]
pub struct MarkerPattern {
    opening: Regex,
}

/// A marker-class element found in a (sanitized) text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkedElement<'t> {
    /// Offset of the `<` of the opening tag.
    pub start: usize,
    /// Offset where the payload begins.
    pub payload_start: usize,
    /// Text between the opening tag and the first matching closing tag.
    pub payload: &'t str,
}

impl MarkerPattern {
    /// Matcher for HTML files, where the class attribute is double-quoted.
    pub fn markup(marker_class: &str) -> Result<Self> {
        Self::build(&format!(
            r#"<(\w+)[^>]*class="[^"]*{}[^"]*"[^>]*>"#,
            regex::escape(marker_class)
        ))
    }

    /// Matcher for markup built inside script string literals, where the class
    /// attribute may use any of the three JS quote characters.
    pub fn script(marker_class: &str) -> Result<Self> {
        Self::build(&format!(
            r#"<(\w+)[^>]*class=["'`][^"'`]*{}[^"'`]*["'`][^>]*>"#,
            regex::escape(marker_class)
        ))
    }

    fn build(pattern: &str) -> Result<Self> {
        let opening = Regex::new(pattern)
            .with_context(|| format!("Failed to build marker pattern: {}", pattern))?;
        Ok(Self { opening })
    }

    /// Find all marker-class elements, left to right, without overlap.
    ///
    /// When an opening tag has no closing tag, scanning resumes right after
    /// its `<`. After a complete element, scanning resumes after its closing
    /// tag, so marker elements nested inside a payload are not visited.
    pub fn find_elements<'t>(&self, text: &'t str) -> Vec<MarkedElement<'t>> {
        let mut elements = Vec::new();
        let mut pos = 0;

        while pos <= text.len() {
            let Some(caps) = self.opening.captures_at(text, pos) else {
                break;
            };
            let (Some(open), Some(tag)) = (caps.get(0), caps.get(1)) else {
                break;
            };

            let closing = format!("</{}>", tag.as_str());
            match text[open.end()..].find(&closing) {
                Some(rel) => {
                    let payload_end = open.end() + rel;
                    elements.push(MarkedElement {
                        start: open.start(),
                        payload_start: open.end(),
                        payload: &text[open.end()..payload_end],
                    });
                    pos = payload_end + closing.len();
                }
                None => pos = open.start() + 1,
            }
        }

        elements
    }
}

/// True when the payload holds markup beyond the inline formatting tags,
/// which makes it a layout fragment rather than a translation unit.
pub fn is_complex_payload(payload: &str) -> bool {
    if !(payload.contains('<') && payload.contains('>')) {
        return false;
    }
    SIMPLE_TAG_REGEX.replace_all(payload, "").contains('<')
}

/// Strategy 1: marker-class elements in HTML files.
pub fn extract_markup_strings(file: &SourceFile, pattern: &MarkerPattern) -> UsedStrings {
    let sanitized = Sanitized::markup(&file.content);
    let mapper = PositionMapper::new(&sanitized);
    let mut used = UsedStrings::new();

    for element in pattern.find_elements(sanitized.text()) {
        if element.payload.is_empty() || is_complex_payload(element.payload) {
            continue;
        }
        let (line, col) = mapper.position(element.start);
        used.record(element.payload, Occurrence::new(&file.path, line, col));
    }

    used
}
