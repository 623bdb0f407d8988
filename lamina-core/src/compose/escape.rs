/// Replace typographic punctuation with its ASCII counterpart.
///
/// Guillemets and curly double quotes become `"`, curly single quotes become
/// `'`, em and en dashes become `-`, and the ellipsis glyph becomes `...`.
#[must_use]
pub fn normalize_punctuation(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '«' | '»' | '\u{201C}' | '\u{201D}' | '\u{201E}' => out.push('"'),
            '\u{2018}' | '\u{2019}' | '\u{201A}' => out.push('\''),
            '\u{2014}' | '\u{2013}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            other => out.push(other),
        }
    }
    out
}

/// Normalize punctuation, then escape the five markup-reserved characters.
///
/// Total and pure. Not idempotent: escaping `&amp;` again yields `&amp;amp;`,
/// so raw text must go through here exactly once.
#[must_use]
pub fn escape(raw: &str) -> String {
    let normalized = normalize_punctuation(raw);
    let mut out = String::with_capacity(normalized.len());
    // Single pass: each input char is emitted once, so no entity is re-escaped.
    for ch in normalized.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Reverse of the reserved-character step of [`escape`].
///
/// Punctuation normalization is lossy and is not undone.
#[must_use]
pub fn unescape(escaped: &str) -> String {
    escaped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
