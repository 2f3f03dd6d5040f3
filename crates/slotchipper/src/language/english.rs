//! # English Tokenizer

use crate::language::WordTokenizer;

/// Spelled out digits, used for numeral normalization.
pub const ENGLISH_DIGIT_WORDS: &[(&str, &str)] = &[
    ("zero", "0"),
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
];

/// English [`WordTokenizer`].
///
/// Keeps printable ASCII: letters, digits, space, and punctuation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EnglishTokenizer;

impl WordTokenizer for EnglishTokenizer {
    fn is_allowed_char(
        &self,
        c: char,
    ) -> bool {
        matches!(c, ' '..='~')
    }

    fn is_alphanumeric_char(
        &self,
        c: char,
    ) -> bool {
        c.is_ascii_alphanumeric()
    }

    fn digit_words(&self) -> &'static [(&'static str, &'static str)] {
        ENGLISH_DIGIT_WORDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        let tokenizer = EnglishTokenizer;

        assert_eq!(tokenizer.sanitize("  Hello World!  "), "hello world!");
        assert_eq!(tokenizer.sanitize("café\tau lait"), "cafau lait");
        assert_eq!(tokenizer.sanitize("1 + 2 = {3}"), "1 + 2 = {3}");
        assert_eq!(tokenizer.sanitize("\u{4f60}\u{597d}"), "");
    }

    #[test]
    fn test_alphanumeric() {
        let tokenizer = EnglishTokenizer;

        assert!(tokenizer.is_alphanumeric_word("ab12"));
        assert!(!tokenizer.is_alphanumeric_word("a-"));
        assert!(!tokenizer.is_alphanumeric_word("añ"));
    }
}
