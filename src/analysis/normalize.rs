//! Whitespace collapsing and character filtering
//!
//! `clean` runs two passes in a fixed order: whitespace is collapsed first,
//! disallowed characters are removed second. The second pass does not
//! re-collapse, so `"a @ b"` cleans to `"a  b"` with two spaces. Outputs are
//! compared across executions, so this order must not change.

/// Whitespace for tokenizing, including the ASCII information separators
/// `\x1c`..`\x1f` that `char::is_whitespace` leaves out
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Alphanumeric, underscore, whitespace, or one of `. , ! ? -`
fn is_allowed(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || is_separator(c) || matches!(c, '.' | ',' | '!' | '?' | '-')
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|word| !word.is_empty())
}

/// Collapse whitespace runs to one space and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    words(text).collect::<Vec<_>>().join(" ")
}

/// Normalize fetched text for display or comparison
pub fn clean(text: &str) -> String {
    let filtered: String = collapse_whitespace(text)
        .chars()
        .filter(|c| is_allowed(*c))
        .collect();
    filtered.trim().to_string()
}

/// Number of whitespace-separated tokens
pub fn word_count(text: &str) -> usize {
    words(text).count()
}
