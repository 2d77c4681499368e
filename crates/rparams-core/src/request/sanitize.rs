//! Text sanitization for raw request metadata.

/// Cleans a raw request value for use as plain text.
///
/// - Drops markup tags (`<...>`) and a trailing unterminated `<...`
/// - Replaces line breaks, tabs and other control characters with spaces
/// - Collapses runs of whitespace and trims both ends
///
/// Percent-encoded octets are left alone so query strings survive intact.
pub fn sanitize_text_field(raw: &str) -> String {
    let mut without_tags = String::with_capacity(raw.len());
    let mut in_tag = false;
    for c in raw.chars() {
        match c {
            '<' if !in_tag => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            c if c.is_control() => without_tags.push(' '),
            c => without_tags.push(c),
        }
    }

    without_tags.split_whitespace().collect::<Vec<_>>().join(" ")
}
