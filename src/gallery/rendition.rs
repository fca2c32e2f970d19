//! Display rendition selection.

use crate::upstream::types::ImageSize;

const PREFERRED: &str = "medium";
const FALLBACK: &str = "original";

/// Pick the display URL from the available renditions.
///
/// "Medium" wins over "Original" (labels compared ASCII case-insensitively).
/// When a label repeats, the last occurrence wins, even if its source is
/// missing. A missing or empty source counts as no rendition, so an unusable
/// medium falls back to the original. Returns `None` when neither resolves.
pub fn select_rendition(sizes: &[ImageSize]) -> Option<String> {
    let mut medium = None;
    let mut original = None;

    for size in sizes {
        let Some(label) = size.label.as_deref() else {
            continue;
        };
        let source = size.source.as_deref().filter(|s| !s.is_empty());
        if label.eq_ignore_ascii_case(PREFERRED) {
            medium = source;
        } else if label.eq_ignore_ascii_case(FALLBACK) {
            original = source;
        }
    }

    medium.or(original).map(str::to_string)
}
