//! Marker-class markup assembled inside script string literals.
//!
//! ```js
//! el.innerHTML = `<p class="ds-i18n">${l('Saved')}</p>`;
//! html += '<span class="ds-i18n">Ready</span>';
//! ```
//!
//! Interpolated translation calls in the payload are recorded on their own.
//! The payload itself is recorded only when it has no interpolation, so a
//! wrapper template is never reported next to the string it wraps.

use super::{
    call_site::CallPattern,
    markup::{MarkerPattern, is_complex_payload},
    sanitize::{PositionMapper, Sanitized},
};
use crate::core::{Occurrence, SourceFile, UsedStrings};

/// Strategy 3: marker-class elements inside script files.
pub fn extract_embedded_strings(
    file: &SourceFile,
    marker: &MarkerPattern,
    calls: &CallPattern,
) -> UsedStrings {
    let sanitized = Sanitized::script(&file.content);
    let mapper = PositionMapper::new(&sanitized);
    let mut used = UsedStrings::new();

    for element in marker.find_elements(sanitized.text()) {
        if element.payload.is_empty() || is_complex_payload(element.payload) {
            continue;
        }

        for (offset, text) in calls.interpolations(element.payload) {
            let (line, col) = mapper.position(element.payload_start + offset);
            used.record(text, Occurrence::new(&file.path, line, col));
        }

        if !calls.has_interpolation(element.payload) {
            let (line, col) = mapper.position(element.start);
            used.record(element.payload, Occurrence::new(&file.path, line, col));
        }
    }

    used
}
