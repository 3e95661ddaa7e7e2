//! Name normalization: display spelling vs. canonical merge key.

use crate::utils::text::{collapse_whitespace, strip_annotation, turkish_upper};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// Trimmed, annotation-free, whitespace-collapsed; original case and
    /// diacritics preserved.
    pub display: String,
    /// Turkish-aware uppercase fold of `display`; the merge key.
    pub canonical: String,
}

/// Normalize a raw name cell. Returns None when nothing is left after
/// stripping; the classifier already rejects such cells, so callers
/// treat None as a silent skip.
pub fn normalize(raw: &str) -> Option<NormalizedName> {
    let display = collapse_whitespace(strip_annotation(raw));
    if display.is_empty() {
        return None;
    }
    let canonical = turkish_upper(&display);
    Some(NormalizedName { display, canonical })
}
