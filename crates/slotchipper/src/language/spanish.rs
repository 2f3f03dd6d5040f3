//! # Spanish Tokenizer

use crate::language::WordTokenizer;

/// Spelled out digits, used for numeral normalization.
pub const SPANISH_DIGIT_WORDS: &[(&str, &str)] = &[
    ("cero", "0"),
    ("uno", "1"),
    ("dos", "2"),
    ("tres", "3"),
    ("cuatro", "4"),
    ("cinco", "5"),
    ("seis", "6"),
    ("siete", "7"),
    ("ocho", "8"),
    ("nueve", "9"),
];

/// Accented letters accepted on top of ASCII.
const SPANISH_EXTRA_LETTERS: &[char] = &[
    'á', 'é', 'í', 'ó', 'ú', 'ü', 'ñ', 'Á', 'É', 'Í', 'Ó', 'Ú', 'Ü', 'Ñ',
];

/// Spanish [`WordTokenizer`].
///
/// Keeps printable ASCII plus accented vowels and `ñ`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpanishTokenizer;

impl WordTokenizer for SpanishTokenizer {
    fn is_allowed_char(
        &self,
        c: char,
    ) -> bool {
        matches!(c, ' '..='~') || SPANISH_EXTRA_LETTERS.contains(&c)
    }

    fn is_alphanumeric_char(
        &self,
        c: char,
    ) -> bool {
        c.is_ascii_alphanumeric() || SPANISH_EXTRA_LETTERS.contains(&c)
    }

    fn digit_words(&self) -> &'static [(&'static str, &'static str)] {
        SPANISH_DIGIT_WORDS
    }
}
