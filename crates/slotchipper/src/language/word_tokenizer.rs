//! # Word Tokenizer Trait

/// The dictionary key standing in for an unknown ngram.
pub const UNKNOWN_NGRAM_KEY: &str = "__";

/// Characters which split words; each is kept as its own token.
pub const WORD_SEPARATORS: &[char] = &[' ', '.', ',', '%', '*', '-', '=', '+', ';', '|', '`', '~'];

/// Is `c` one of the [`WORD_SEPARATORS`]?
pub fn is_word_separator(c: char) -> bool {
    WORD_SEPARATORS.contains(&c)
}

/// Language specific sentence tokenization.
///
/// Implementors supply the character policy and the digit lexicon;
/// the splitting rules are shared by all languages.
pub trait WordTokenizer: Send + Sync {
    /// Is `c` kept by [`sanitize`](Self::sanitize)?
    ///
    /// Called on already lowercased characters.
    fn is_allowed_char(
        &self,
        c: char,
    ) -> bool;

    /// Is `c` a letter or digit of this language?
    fn is_alphanumeric_char(
        &self,
        c: char,
    ) -> bool;

    /// The `(word, digit)` lexicon used for numeral normalization.
    fn digit_words(&self) -> &'static [(&'static str, &'static str)];

    /// Lookup the digit symbol for a spelled out digit word.
    ///
    /// ## Arguments
    /// * `word` - the (sanitized) word.
    ///
    /// ## Returns
    /// The digit string, if `word` is a digit word.
    fn digit_for_word(
        &self,
        word: &str,
    ) -> Option<&'static str> {
        self.digit_words()
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, d)| *d)
    }

    /// Does `word` contain only letters and digits of this language?
    fn is_alphanumeric_word(
        &self,
        word: &str,
    ) -> bool {
        word.chars().all(|c| self.is_alphanumeric_char(c))
    }

    /// Trim, lowercase, and drop every character outside the allowed set.
    ///
    /// ## Arguments
    /// * `text` - the raw text.
    ///
    /// ## Returns
    /// The sanitized text.
    fn sanitize(
        &self,
        text: &str,
    ) -> String {
        text.trim()
            .to_lowercase()
            .chars()
            .filter(|&c| self.is_allowed_char(c))
            .collect()
    }

    /// Sanitize and split a sentence into word and separator tokens.
    ///
    /// Separators are kept as standalone tokens; whitespace-only
    /// tokens are removed.
    ///
    /// ## Arguments
    /// * `text` - the raw sentence.
    ///
    /// ## Returns
    /// The ordered tokens.
    fn split_to_words(
        &self,
        text: &str,
    ) -> Vec<String> {
        let sanitized = self.sanitize(text);

        let mut tokens: Vec<String> = Vec::new();
        let mut current = String::new();
        for c in sanitized.chars() {
            if is_word_separator(c) {
                if !current.is_empty() {
                    tokens.push(core::mem::take(&mut current));
                }
                tokens.push(c.to_string());
            } else {
                current.push(c);
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }

        tokens.retain(|t| !t.trim().is_empty());
        tokens
    }

    /// Split a word into overlapping 2-character windows.
    ///
    /// ## Arguments
    /// * `word` - the word.
    ///
    /// ## Returns
    /// The bigrams; empty when `word` has fewer than 2 characters.
    fn split_word_to_bigrams(
        &self,
        word: &str,
    ) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        chars.windows(2).map(|w| w.iter().collect()).collect()
    }

    /// Join words with a single space.
    fn join<S: AsRef<str>>(
        &self,
        words: &[S],
    ) -> String
    where
        Self: Sized,
    {
        words
            .iter()
            .map(|w| w.as_ref())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
