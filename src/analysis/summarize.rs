//! Length-bounded excerpts
//!
//! Lengths are counted in characters, never bytes, so truncation cannot split
//! a multi-byte UTF-8 sequence.

/// Marker appended to a truncated summary
pub const ELLIPSIS: &str = "...";

/// Summarize `text` to at most `max_length` characters plus the marker
///
/// Text that already fits is returned unchanged. Otherwise the first
/// `max_length` characters are cut back to the last space in that prefix
/// and `...` is appended. A prefix without a space is kept whole.
///
/// # Examples
/// ```
/// use content_oracle::analysis::summarize;
///
/// assert_eq!(summarize("The quick brown fox jumps", 10), "The quick...");
/// assert_eq!(summarize("short", 100), "short");
/// ```
pub fn summarize(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let prefix = limit_chars(text, max_length);
    let kept = match prefix.rfind(' ') {
        Some(idx) => &prefix[..idx],
        None => prefix.as_str(),
    };
    format!("{}{}", kept, ELLIPSIS)
}

/// Hard prefix of at most `max_chars` characters, no marker
pub fn limit_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_word_boundary() {
        assert_eq!(summarize("The quick brown fox jumps", 10), "The quick...");
        assert_eq!(summarize("The quick brown fox jumps", 12), "The quick...");
        assert_eq!(summarize("The quick brown fox jumps", 16), "The quick brown...");
    }

    #[test]
    fn test_summarize_fits() {
        assert_eq!(summarize("short", 100), "short");
        assert_eq!(summarize("exact", 5), "exact");
        assert_eq!(summarize("", 0), "");
    }

    #[test]
    fn test_summarize_without_space_hard_truncates() {
        assert_eq!(summarize("supercalifragilistic", 5), "super...");
    }

    #[test]
    fn test_summarize_only_cuts_on_plain_space() {
        assert_eq!(summarize("alpha\tbeta gamma", 9), "alpha\tbet...");
    }

    #[test]
    fn test_summarize_leading_space() {
        assert_eq!(summarize(" abcdefgh", 4), "...");
    }

    #[test]
    fn test_summarize_zero_length() {
        assert_eq!(summarize("abc", 0), "...");
    }

    #[test]
    fn test_summarize_multibyte() {
        assert_eq!(summarize("héllo wörld ünïcode", 12), "héllo wörld...");
        assert_eq!(summarize("日本語のテキスト", 3), "日本語...");
    }

    #[test]
    fn test_limit_chars() {
        assert_eq!(limit_chars("hello world", 5), "hello");
        assert_eq!(limit_chars("hi", 5), "hi");
        assert_eq!(limit_chars("→→→", 2), "→→");
        assert_eq!(limit_chars("abc", 0), "");
    }
}
