//! # Dictionary Filter
//!
//! Shrinks a full pretrained listing down to the lexical units the
//! encoder actually consults: single characters and bigrams.

use crate::{
    dictionary::PretrainedEntry,
    language::{UNKNOWN_NGRAM_KEY, WordTokenizer},
    types::SCHashMap,
};

/// Filter pretrained entries into a character/bigram dictionary listing.
///
/// Rules, applied per lowercased key in listing order:
/// * the unknown-ngram key is always kept;
/// * keys with characters outside the tokenizer's allowed set are dropped;
/// * digit words are kept, then registered under their digit symbol; the
///   digit takes the word's vector, keeping its position when already listed;
/// * single characters are kept;
/// * bigrams are kept only when alphanumeric;
/// * longer keys are dropped;
/// * the first entry for a key wins.
///
/// ## Arguments
/// * `entries` - the full pretrained listing.
/// * `tokenizer` - the language rules.
///
/// ## Returns
/// The filtered, ordered entries.
pub fn filter_pretrained_entries<I, W>(
    entries: I,
    tokenizer: &W,
) -> Vec<PretrainedEntry>
where
    I: IntoIterator<Item = PretrainedEntry>,
    W: WordTokenizer + ?Sized,
{
    let mut positions: SCHashMap<String, usize> = SCHashMap::default();
    let mut filtered: Vec<PretrainedEntry> = Vec::new();

    let mut keep = |key: String,
                    vector: Vec<f32>,
                    replace: bool,
                    filtered: &mut Vec<PretrainedEntry>| {
        match positions.get(&key) {
            Some(&pos) if replace => filtered[pos].1 = vector,
            Some(_) => {}
            None => {
                positions.insert(key.clone(), filtered.len());
                filtered.push((key, vector));
            }
        }
    };

    for (key, vector) in entries {
        if key == UNKNOWN_NGRAM_KEY {
            keep(key, vector, false, &mut filtered);
            continue;
        }

        let key = key.to_lowercase();
        if !key.chars().all(|c| tokenizer.is_allowed_char(c)) {
            continue;
        }

        if let Some(digit) = tokenizer.digit_for_word(&key) {
            keep(key, vector.clone(), false, &mut filtered);
            keep(digit.to_string(), vector, true, &mut filtered);
            continue;
        }

        match key.chars().count() {
            1 => keep(key, vector, false, &mut filtered),
            2 if tokenizer.is_alphanumeric_word(&key) => keep(key, vector, false, &mut filtered),
            _ => {}
        }
    }

    log::info!("filtered dictionary: {} entries kept", filtered.len());
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{EnglishTokenizer, SpanishTokenizer};

    fn entry(key: &str) -> PretrainedEntry {
        (key.to_string(), vec![key.len() as f32])
    }

    fn keys(entries: &[PretrainedEntry]) -> Vec<&str> {
        entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn test_filter_english() {
        let entries = vec![
            entry("__"),
            entry("A"),
            entry("a"),
            entry("ca"),
            entry("c-"),
            entry("cat"),
            entry("seven"),
            entry("ñ"),
            entry("!"),
        ];

        let filtered = filter_pretrained_entries(entries, &EnglishTokenizer);

        assert_eq!(keys(&filtered), vec!["__", "a", "ca", "seven", "7", "!"]);
        assert_eq!(filtered[4].1, vec![5.0]);
    }

    #[test]
    fn test_digit_word_replaces_digit_vector() {
        let entries = vec![
            ("7".to_string(), vec![1.0]),
            ("seven".to_string(), vec![7.0]),
            ("two".to_string(), vec![2.0]),
        ];

        let filtered = filter_pretrained_entries(entries, &EnglishTokenizer);

        assert_eq!(
            filtered,
            vec![
                ("7".to_string(), vec![7.0]),
                ("seven".to_string(), vec![7.0]),
                ("two".to_string(), vec![2.0]),
                ("2".to_string(), vec![2.0]),
            ]
        );
    }

    #[test]
    fn test_filter_spanish() {
        let entries = vec![entry("ñ"), entry("añ"), entry("siete"), entry("seven")];

        let filtered = filter_pretrained_entries(entries, &SpanishTokenizer);

        assert_eq!(keys(&filtered), vec!["ñ", "añ", "siete", "7"]);
    }
}
