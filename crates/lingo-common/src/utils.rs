//! Language-code helpers shared across the workspace.

/// Returns the base-language portion of a code.
///
/// The base form is everything before the first region separator
/// (`-` or `_`): `"en-CA"` becomes `"en"`, `"en"` stays `"en"`.
#[must_use]
pub fn base_language(code: &str) -> &str {
    code.split(['-', '_']).next().unwrap_or(code)
}

/// Whether a code carries a region (or other) subtag.
#[must_use]
pub fn is_region_qualified(code: &str) -> bool {
    base_language(code) != code
}

/// Whether a string is usable as a language code.
///
/// Codes are opaque map keys, so the check is deliberately loose: ASCII
/// alphanumerics separated by `-` or `_`, at least one character.
#[must_use]
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
