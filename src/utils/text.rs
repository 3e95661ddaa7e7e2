//! Text utilities: annotation stripping, Turkish case folding, slugs.

/// Drop a trailing parenthetical annotation (shift times, notes) and trim.
/// Everything from the first '(' onward is discarded.
pub fn strip_annotation(raw: &str) -> &str {
    match raw.find('(') {
        Some(idx) => raw[..idx].trim(),
        None => raw.trim(),
    }
}

/// Collapse interior whitespace runs to single spaces.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercase with Turkish casing rules: dotted 'i' pairs with 'İ' and
/// dotless 'ı' pairs with 'I'. Everything else follows Unicode uppercasing.
pub fn turkish_upper(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            'i' => vec!['İ'],
            'ı' => vec!['I'],
            other => other.to_uppercase().collect(),
        })
        .collect()
}

/// Lowercase with Turkish casing rules, the inverse of [`turkish_upper`].
pub fn turkish_lower(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            'İ' => vec!['i'],
            'I' => vec!['ı'],
            other => other.to_lowercase().collect(),
        })
        .collect()
}

/// Filesystem-safe form of a display name: lower-cased, whitespace runs
/// replaced by single hyphens. Two display names that slugify identically
/// will target the same output file; callers accept that collision.
pub fn slugify(name: &str) -> String {
    turkish_lower(name.trim())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
