//! Path-to-acronym derivation.
//!
//! An acronym is built from the initials of a path's components:
//! directory initials upper-cased, file-stem initials lower-cased, extension
//! initials upper-cased. The case marks which part of the path a letter came
//! from, and the scorer relies on that to tell directory boundaries apart
//! from within-file-name positions.
//!
//! `app/models/context_external_tool.rb` → `AMcetR`.

/// Derive the acronym for a whole path.
///
/// Total and deterministic: any input string, including the empty string or
/// strings with no separators at all, produces an acronym (possibly empty).
pub fn acronymize(path: &str) -> String {
    let mut segments = split_dropping_trailing(path, '/');
    let file = segments.pop().unwrap_or("");
    let mut file_parts = split_dropping_trailing(file, '.');
    let stem = if file_parts.is_empty() {
        ""
    } else {
        file_parts.remove(0)
    };

    let dirs: String = segments.iter().map(|d| fragment_acronym(d)).collect();
    let extensions: String = file_parts.iter().map(|e| fragment_acronym(e)).collect();

    format!(
        "{}{}{}",
        dirs.to_uppercase(),
        fragment_acronym(stem),
        extensions.to_uppercase()
    )
}

/// Compute the acronym of a single path segment (one directory name, the file
/// stem, or one extension).
///
/// Words are split on camelCase humps and before each of `/ _ . -`; each word
/// contributes one representative letter. A word led by `-` or `_` contributes
/// the character after the marker instead. The result is lower-cased; the
/// caller decides final casing.
pub fn fragment_acronym(fragment: &str) -> String {
    let mut spaced = String::with_capacity(fragment.len() * 2);
    let mut chars = fragment.chars().peekable();
    while let Some(c) = chars.next() {
        if matches!(c, '/' | '_' | '.' | '-') {
            spaced.push(' ');
            spaced.push(c);
        } else {
            spaced.push(c);
            if c.is_ascii_lowercase() && chars.peek().is_some_and(|n| n.is_ascii_uppercase()) {
                spaced.push(' ');
            }
        }
    }

    let mut letters = String::new();
    for word in spaced.split_whitespace() {
        let mut cs = word.chars();
        let representative = match cs.next() {
            Some('-') | Some('_') => cs.next(),
            first => first,
        };
        if let Some(c) = representative {
            letters.push(c);
        }
    }
    letters.to_lowercase()
}

// Split like the reference splitter: trailing empty segments are dropped,
// leading and interior ones are kept.
fn split_dropping_trailing(s: &str, separator: char) -> Vec<&str> {
    let mut parts: Vec<&str> = s.split(separator).collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}
