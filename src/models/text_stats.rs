//! Text statistics for the `analyze_text` tool.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Punctuation stripped from word boundaries before word-level statistics.
const WORD_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '"', '\'', '-',
];

fn sentence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        #[allow(clippy::expect_used)] // literal pattern, covered by unit tests
        Regex::new(r"[.!?]+").expect("sentence pattern is valid")
    })
}

/// Structured statistics about a text string.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TextStatistics {
    /// Total number of characters.
    pub character_count: usize,
    /// Total number of whitespace-separated words.
    pub word_count: usize,
    /// Total number of lines.
    pub line_count: usize,
    /// Approximate number of sentences (runs of `.`, `!`, `?`; minimum 1).
    pub sentence_count: usize,
    /// Average word length after stripping boundary punctuation, rounded
    /// to two decimal places.
    pub average_word_length: f64,
    /// The longest word in the text (empty when there are no words).
    pub longest_word: String,
    /// The shortest word in the text (empty when there are no words).
    pub shortest_word: String,
}

impl TextStatistics {
    /// Compute statistics over `text`.
    #[must_use]
    pub fn analyze(text: &str) -> Self {
        let character_count = text.chars().count();
        let line_count = text.split('\n').count();

        let words: Vec<&str> = text.split_whitespace().collect();
        let word_count = words.len();

        // Words that are only punctuation do not count toward word-level
        // statistics.
        let actual_words: Vec<&str> = words
            .iter()
            .map(|word| word.trim_matches(WORD_PUNCTUATION))
            .filter(|word| !word.is_empty())
            .collect();

        let (average_word_length, longest_word, shortest_word) = if actual_words.is_empty() {
            (0.0, String::new(), String::new())
        } else {
            let total_len: usize = actual_words.iter().map(|word| word.chars().count()).sum();
            #[allow(clippy::cast_precision_loss)] // word counts are far below 2^52
            let average = total_len as f64 / actual_words.len() as f64;

            // First-seen wins on ties, matching min/max over an ordered scan.
            let mut longest = actual_words[0];
            let mut shortest = actual_words[0];
            for word in &actual_words[1..] {
                if word.chars().count() > longest.chars().count() {
                    longest = word;
                }
                if word.chars().count() < shortest.chars().count() {
                    shortest = word;
                }
            }

            (
                (average * 100.0).round() / 100.0,
                longest.to_owned(),
                shortest.to_owned(),
            )
        };

        let endings = sentence_regex().find_iter(text).count();
        let sentence_count = if endings == 0 { 1 } else { endings };

        Self {
            character_count,
            word_count,
            line_count,
            sentence_count,
            average_word_length,
            longest_word,
            shortest_word,
        }
    }
}
