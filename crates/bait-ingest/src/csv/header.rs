//! Header normalization and column resolution.

/// Normalizes a header value: strips a UTF-8 BOM and surrounding whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Finds the header in `headers` that names `wanted`.
///
/// An exact match on the normalized header wins; otherwise the first
/// case-insensitive match is used.
pub fn resolve_column<'a>(headers: &'a [String], wanted: &str) -> Option<&'a str> {
    let wanted = normalize_header(wanted);
    headers
        .iter()
        .find(|h| normalize_header(h) == wanted)
        .or_else(|| {
            headers
                .iter()
                .find(|h| normalize_header(h).eq_ignore_ascii_case(&wanted))
        })
        .map(String::as_str)
}
