//! # Language Selection

use core::str::FromStr;

use crate::{
    SCResult,
    SlotchipperError,
    language::{EnglishTokenizer, SpanishTokenizer, WordTokenizer},
};

/// Supported pipeline languages.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    /// English.
    #[default]
    #[strum(serialize = "en")]
    English,

    /// Spanish.
    #[strum(serialize = "es")]
    Spanish,
}

impl Language {
    /// Parse a language code, case-insensitively.
    ///
    /// ## Arguments
    /// * `code` - `"en"` or `"es"`, in any case.
    ///
    /// ## Returns
    /// The language, or [`SlotchipperError::UnsupportedLanguage`].
    pub fn from_code(code: &str) -> SCResult<Self> {
        Self::from_str(code).map_err(|_| SlotchipperError::UnsupportedLanguage {
            code: code.to_string(),
        })
    }

    /// The canonical lowercase code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    /// Build the tokenizer for this language.
    pub fn tokenizer(&self) -> LanguageTokenizer {
        match self {
            Language::English => LanguageTokenizer::English(EnglishTokenizer),
            Language::Spanish => LanguageTokenizer::Spanish(SpanishTokenizer),
        }
    }
}

/// The closed set of language tokenizers.
///
/// Selected once from a [`Language`]; dispatches by `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageTokenizer {
    /// See [`EnglishTokenizer`].
    English(EnglishTokenizer),

    /// See [`SpanishTokenizer`].
    Spanish(SpanishTokenizer),
}

impl LanguageTokenizer {
    /// The language of this tokenizer.
    pub fn language(&self) -> Language {
        match self {
            LanguageTokenizer::English(_) => Language::English,
            LanguageTokenizer::Spanish(_) => Language::Spanish,
        }
    }

    fn inner(&self) -> &dyn WordTokenizer {
        match self {
            LanguageTokenizer::English(t) => t,
            LanguageTokenizer::Spanish(t) => t,
        }
    }
}

impl TryFrom<String> for Language {
    type Error = SlotchipperError;

    fn try_from(code: String) -> SCResult<Self> {
        Self::from_code(&code)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code().to_string()
    }
}

impl From<Language> for LanguageTokenizer {
    fn from(language: Language) -> Self {
        language.tokenizer()
    }
}

impl WordTokenizer for LanguageTokenizer {
    fn is_allowed_char(
        &self,
        c: char,
    ) -> bool {
        self.inner().is_allowed_char(c)
    }

    fn is_alphanumeric_char(
        &self,
        c: char,
    ) -> bool {
        self.inner().is_alphanumeric_char(c)
    }

    fn digit_words(&self) -> &'static [(&'static str, &'static str)] {
        self.inner().digit_words()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("en").unwrap(), Language::English);
        assert_eq!(Language::from_code("EN").unwrap(), Language::English);
        assert_eq!(Language::from_code("Es").unwrap(), Language::Spanish);

        match Language::from_code("fr") {
            Err(SlotchipperError::UnsupportedLanguage { code }) => assert_eq!(code, "fr"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_code_roundtrip() {
        for language in Language::iter() {
            assert_eq!(language.to_string(), language.code());
            assert_eq!(Language::from_code(language.code()).unwrap(), language);
            assert_eq!(language.tokenizer().language(), language);
        }
    }

    #[test]
    fn test_dispatch() {
        let spanish = Language::Spanish.tokenizer();
        assert_eq!(spanish.sanitize("Niño"), "niño");

        let english = Language::English.tokenizer();
        assert_eq!(english.sanitize("Niño"), "nio");
    }

    #[test]
    fn test_serde() {
        let language: Language = serde_json::from_str("\"ES\"").unwrap();
        assert_eq!(language, Language::Spanish);
        assert!(serde_json::from_str::<Language>("\"de\"").is_err());
        assert_eq!(serde_json::to_string(&Language::English).unwrap(), "\"en\"");
    }
}
