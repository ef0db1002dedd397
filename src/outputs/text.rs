//! Length limits for generated text.
//!
//! Storage and display are cut independently: the CSV keeps up to the
//! storage limit, the rating screen re-cuts from that at its own limit.
//! All counts are in characters, not bytes.

pub const ELLIPSIS: &str = "...";

/// Hard cut at `limit` characters plus `...`; shorter text is returned as is.
pub fn truncate_stored(text: &str, limit: usize) -> String {
    match char_boundary(text, limit) {
        Some(end) => format!("{}{}", &text[..end], ELLIPSIS),
        None => text.to_string(),
    }
}

/// What the rating screen shows for a stored variant.
///
/// Surrounding quotes are dropped (double first, then single). Text over
/// `limit` is cut after its first sentence when that sentence ends before
/// `limit`, otherwise hard-cut with `...`.
pub fn display_text(stored: &str, limit: usize) -> String {
    let text = strip_quotes(stored.trim());

    let end = match char_boundary(text, limit) {
        Some(end) => end,
        None => return text.to_string(),
    };

    match text.find(". ") {
        Some(boundary) if boundary < end => format!("{}.", &text[..boundary]),
        _ => format!("{}{}", &text[..end], ELLIPSIS),
    }
}

pub fn strip_quotes(text: &str) -> &str {
    let text = strip_pair(text, '"');
    strip_pair(text, '\'')
}

fn strip_pair(text: &str, quote: char) -> &str {
    if text.chars().count() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
        &text[quote.len_utf8()..text.len() - quote.len_utf8()]
    } else {
        text
    }
}

/// Byte offset of the `limit`-th character, `None` if the text is not longer.
fn char_boundary(text: &str, limit: usize) -> Option<usize> {
    let mut indices = text.char_indices().skip(limit);
    indices.next().map(|(offset, _)| offset)
}
