//! # Tokenizer
//!
//! Normalizes string leaf values into searchable tokens: the text is
//! lowercased, then split on maximal runs of non-word characters. Empty
//! pieces left by leading, trailing, or adjacent delimiters are dropped.
use regex::Regex;
use std::sync::LazyLock;

/// Runs of characters outside `[A-Za-z0-9_]`.
static ASCII_DELIMITERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9_]+").expect("hardcoded delimiter pattern")
});

/// Runs of characters outside the Unicode `\w` class.
static UNICODE_DELIMITERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\W+").expect("hardcoded delimiter pattern")
});

/// Which characters count as part of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordChars {
    /// ASCII letters, digits, and underscore. Any other character, including
    /// accented letters, separates words.
    #[default]
    Ascii,
    /// Unicode letters, marks, digits, and connector punctuation.
    Unicode,
}

/// Splits text into normalized tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    word_chars: WordChars,
}

impl Tokenizer {
    /// Construct a tokenizer using the given word-character class.
    #[must_use]
    pub const fn new(word_chars: WordChars) -> Self {
        Self { word_chars }
    }

    /// The word-character class this tokenizer splits on.
    #[must_use]
    pub const fn word_chars(&self) -> WordChars {
        self.word_chars
    }

    /// Lowercase `text` and split it into tokens.
    ///
    /// ```
    /// use jsonindex::tokenizer::Tokenizer;
    ///
    /// let tokens = Tokenizer::default().tokenize("Co-Pay: $20/visit");
    /// assert_eq!(tokens, vec!["co", "pay", "20", "visit"]);
    /// ```
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let delimiters = match self.word_chars {
            WordChars::Ascii => &*ASCII_DELIMITERS,
            WordChars::Unicode => &*UNICODE_DELIMITERS,
        };

        let lowered = text.to_lowercase();
        delimiters
            .split(&lowered)
            .filter(|piece| !piece.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// Tokenize `text` with the default (ASCII) word-character class.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}

/// Normalize a search term the way tokens are normalized at indexing time.
///
/// The term is treated as a single token: it is lowercased but not split, so
/// a multi-word term is looked up verbatim.
#[must_use]
pub fn normalize(term: &str) -> String {
    term.to_lowercase()
}
