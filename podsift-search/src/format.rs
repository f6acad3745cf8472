//! Description shaping for display.
//!
//! Directory descriptions are often long and carry HTML. They are cut down
//! to their first few sentences with markup removed.

/// Sentences kept when no explicit count is given.
pub const DEFAULT_MAX_SENTENCES: usize = 3;

/// Shown when a description has no usable text.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Shorten `description` to its first `max_sentences` sentences.
///
/// Markup tags are stripped, `!` and `?` end sentences like `.`, empty
/// fragments are skipped, and the kept sentences are joined with `". "`
/// plus a final period.
pub fn format_description(description: &str, max_sentences: usize) -> String {
    if description.trim().is_empty() || max_sentences == 0 {
        return NO_DESCRIPTION.to_owned();
    }

    let text = strip_tags(description);
    let sentences: Vec<&str> = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(max_sentences)
        .collect();

    if sentences.is_empty() {
        return NO_DESCRIPTION.to_owned();
    }
    format!("{}.", sentences.join(". "))
}

/// Remove `<...>` tags.
///
/// A tag is a `<` followed by at least one character other than `<`, up to
/// the nearest `>`. A `<` that does not open such a tag is kept.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.chars().next() {
            Some(first) if first != '<' => {
                // The first character is part of the tag even when it is `>`.
                let tail = &after[first.len_utf8()..];
                match (tail.find('>'), tail.find('<')) {
                    (Some(end), next_open) if next_open.map_or(true, |n| n > end) => {
                        rest = &tail[end + 1..];
                    }
                    _ => {
                        out.push('<');
                        rest = after;
                    }
                }
            }
            _ => {
                out.push('<');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
