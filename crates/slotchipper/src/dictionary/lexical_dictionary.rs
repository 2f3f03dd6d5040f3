//! # Lexical Dictionary ``{ String -> T }``

use crate::{
    SCResult,
    SlotchipperError,
    language::UNKNOWN_NGRAM_KEY,
    types::{IdType, SCHashMap, SCHashSet, hash_map_with_capacity},
};

/// Immutable map of lexical units (words, bigrams, characters) to ids.
///
/// Ids are assigned in insertion order of a pretrained vocabulary;
/// the dictionary is built once and shared read-only (`Arc`) by
/// every encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalDictionary<T: IdType> {
    /// Keys in insertion order, paired with their ids.
    entries: Vec<(String, T)>,

    /// Map of ``{ key -> id }``.
    key_to_id: SCHashMap<String, T>,
}

impl<T: IdType> Default for LexicalDictionary<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            key_to_id: SCHashMap::default(),
        }
    }
}

impl<T: IdType> LexicalDictionary<T> {
    /// Build a dictionary with dense ids, in key order.
    ///
    /// Repeated keys keep their first id; later repeats are skipped
    /// without consuming an id.
    ///
    /// ## Arguments
    /// * `keys` - the ordered vocabulary.
    ///
    /// ## Returns
    /// A `Result` containing the dictionary, or [`SlotchipperError::IdOverflow`].
    pub fn from_keys<I, S>(keys: I) -> SCResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys = keys.into_iter();
        let mut entries: Vec<(String, T)> = Vec::with_capacity(keys.size_hint().0);
        let mut key_to_id: SCHashMap<String, T> = hash_map_with_capacity(keys.size_hint().0);

        for key in keys {
            let key = key.into();
            if key_to_id.contains_key(&key) {
                log::debug!("skipping repeated dictionary key: {key:?}");
                continue;
            }
            let id = T::from_usize(entries.len()).ok_or(SlotchipperError::IdOverflow {
                size: entries.len() + 1,
            })?;
            key_to_id.insert(key.clone(), id);
            entries.push((key, id));
        }

        Ok(Self { entries, key_to_id })
    }

    /// Build a dictionary from explicit ``(key, id)`` pairs.
    ///
    /// ## Arguments
    /// * `pairs` - the entries; keys and ids must each be unique.
    ///
    /// ## Returns
    /// A `Result` containing the dictionary, or [`SlotchipperError::DictionaryConflict`].
    pub fn from_key_ids<I, S>(pairs: I) -> SCResult<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        let mut dictionary = Self::default();
        let mut seen_ids: SCHashSet<T> = SCHashSet::default();

        for (key, id) in pairs {
            let key = key.into();
            if dictionary.key_to_id.contains_key(&key) {
                return Err(SlotchipperError::DictionaryConflict(format!(
                    "repeated key {key:?}"
                )));
            }
            if !seen_ids.insert(id) {
                return Err(SlotchipperError::DictionaryConflict(format!(
                    "id {id} assigned to more than one key"
                )));
            }
            dictionary.key_to_id.insert(key.clone(), id);
            dictionary.entries.push((key, id));
        }

        Ok(dictionary)
    }

    /// The number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the dictionary empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookup the id of a key.
    pub fn get(
        &self,
        key: &str,
    ) -> Option<T> {
        self.key_to_id.get(key).copied()
    }

    /// Lookup the id of a single character.
    pub fn get_char(
        &self,
        c: char,
    ) -> Option<T> {
        let mut buf = [0u8; 4];
        self.get(c.encode_utf8(&mut buf))
    }

    /// Is the key present?
    pub fn contains(
        &self,
        key: &str,
    ) -> bool {
        self.key_to_id.contains_key(key)
    }

    /// The id of the unknown-ngram key ``"__"``, when present.
    pub fn unknown_id(&self) -> Option<T> {
        self.get(UNKNOWN_NGRAM_KEY)
    }

    /// Reverse lookup of the key for an id.
    ///
    /// Linear in the dictionary size.
    pub fn key_for(
        &self,
        id: T,
    ) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, v)| *v == id)
            .map(|(k, _)| k.as_str())
    }

    /// Iterate over ``(key, id)`` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> + '_ {
        self.entries.iter().map(|(k, id)| (k.as_str(), *id))
    }

    /// Iterate over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_keys() {
        type T = u32;

        let dictionary = LexicalDictionary::<T>::from_keys(["__", "a", "ca", "a", "at"]).unwrap();

        assert_eq!(dictionary.len(), 4);
        assert_eq!(dictionary.get("__"), Some(0));
        assert_eq!(dictionary.get("a"), Some(1));
        assert_eq!(dictionary.get("ca"), Some(2));
        assert_eq!(dictionary.get("at"), Some(3));
        assert_eq!(dictionary.get("cat"), None);
        assert_eq!(dictionary.get_char('a'), Some(1));
        assert_eq!(dictionary.unknown_id(), Some(0));
        assert_eq!(dictionary.key_for(2), Some("ca"));
        assert_eq!(dictionary.key_for(9), None);

        assert_eq!(
            dictionary.keys().collect::<Vec<_>>(),
            vec!["__", "a", "ca", "at"]
        );
    }

    #[test]
    fn test_from_keys_overflow() {
        type T = u8;

        let keys: Vec<String> = (0..300).map(|i| format!("k{i}")).collect();
        match LexicalDictionary::<T>::from_keys(keys) {
            Err(SlotchipperError::IdOverflow { size }) => assert_eq!(size, 257),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_from_key_ids() {
        type T = u32;

        let dictionary = LexicalDictionary::<T>::from_key_ids([("cat", 5), ("c", 1)]).unwrap();
        assert_eq!(dictionary.get("cat"), Some(5));
        assert_eq!(dictionary.get("c"), Some(1));
        assert_eq!(dictionary.unknown_id(), None);
        assert!(!dictionary.is_empty());

        assert!(LexicalDictionary::<T>::from_key_ids([("a", 1), ("a", 2)]).is_err());
        assert!(LexicalDictionary::<T>::from_key_ids([("a", 1), ("b", 1)]).is_err());
    }
}
