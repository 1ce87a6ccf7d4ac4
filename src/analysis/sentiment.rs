//! Lexicon-based sentiment classification
//!
//! Lexicon words are matched by substring containment, not by word
//! boundary: "badge" counts as a hit for "bad". Every non-overlapping
//! occurrence of a lexicon word is a hit, so the label depends only on the
//! per-side hit totals and never on where the words sit. Repeats weigh in
//! too: `"good good bad terrible"` is neutral (2 against 2), where counting
//! each lexicon word at most once would make it negative.

use crate::types::SentimentLabel;

/// Fixed sentiment word lists
pub struct SentimentLexicon;

impl SentimentLexicon {
    /// Words that signal positive sentiment
    pub fn positive() -> &'static [&'static str] {
        &[
            "good",
            "great",
            "excellent",
            "amazing",
            "awesome",
            "love",
            "best",
            "wonderful",
        ]
    }

    /// Words that signal negative sentiment
    pub fn negative() -> &'static [&'static str] {
        &[
            "bad",
            "terrible",
            "awful",
            "hate",
            "worst",
            "horrible",
            "disappointing",
            "poor",
        ]
    }
}

/// Total occurrences of lexicon words in already-lowercased text
fn hits(lowered: &str, lexicon: &[&str]) -> usize {
    lexicon
        .iter()
        .map(|word| lowered.matches(*word).count())
        .sum()
}

/// Classify text as positive, negative, or neutral
pub fn classify(text: &str) -> SentimentLabel {
    let lowered = text.to_lowercase();
    let positive = hits(&lowered, SentimentLexicon::positive());
    let negative = hits(&lowered, SentimentLexicon::negative());

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => SentimentLabel::Positive,
        std::cmp::Ordering::Less => SentimentLabel::Negative,
        std::cmp::Ordering::Equal => SentimentLabel::Neutral,
    }
}
