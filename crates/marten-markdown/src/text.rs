//! Text normalization for text nodes outside `<pre>`.

/// Characters after which no separating space is appended.
///
/// A following inline element usually supplies its own spacing, and a space
/// before such punctuation reads wrong.
pub const TIGHT_PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ';', ':'];

/// Trim `text` and collapse every internal whitespace run to one space.
///
/// Idempotent: collapsing an already collapsed string returns it unchanged.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Returns true if the last character of `text` is in [`TIGHT_PUNCTUATION`].
#[must_use]
pub fn ends_with_punctuation(text: &str) -> bool {
    text.chars()
        .next_back()
        .is_some_and(|c| TIGHT_PUNCTUATION.contains(&c))
}

/// Append a text node's data to `out` the way the renderer does outside `<pre>`.
///
/// Whitespace-only data appends nothing. Otherwise the collapsed text is
/// appended followed by one space, unless it ends in [`TIGHT_PUNCTUATION`].
pub fn push_normalized(out: &mut String, raw: &str) {
    let text = collapse_whitespace(raw);
    if text.is_empty() {
        return;
    }
    out.push_str(&text);
    if !ends_with_punctuation(&text) {
        out.push(' ');
    }
}
