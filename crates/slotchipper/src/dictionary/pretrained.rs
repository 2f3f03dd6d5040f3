//! # Pretrained Dictionary Entries
//!
//! The dictionary input is an ordered list of ``(key, vector)`` pairs.
//! Only the key order matters to the encoder; the vectors belong to the
//! embedding model, and are carried here as an opaque row table.

use crate::{SCResult, SlotchipperError, dictionary::LexicalDictionary, types::IdType};

/// A single ``(key, vector)`` pretrained entry.
pub type PretrainedEntry = (String, Vec<f32>);

/// Row-major table of pretrained vectors, indexed by dictionary id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PretrainedVectors {
    dimensions: usize,
    data: Vec<f32>,
}

impl PretrainedVectors {
    /// The vector width.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// The number of rows.
    pub fn len(&self) -> usize {
        self.data.len().checked_div(self.dimensions).unwrap_or(0)
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The vector for a row id.
    pub fn vector<T: IdType>(
        &self,
        id: T,
    ) -> Option<&[f32]> {
        let row = id.to_usize()?;
        let start = row.checked_mul(self.dimensions)?;
        self.data.get(start..start + self.dimensions)
    }

    /// The flat row-major data.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

/// Split pretrained entries into a [`LexicalDictionary`] and its [`PretrainedVectors`].
///
/// Ids are dense, in entry order. Repeated keys keep their first entry.
///
/// ## Arguments
/// * `entries` - the ordered ``(key, vector)`` pairs; all vectors must share a width.
///
/// ## Returns
/// A `Result` containing the dictionary and the vector table.
pub fn split_pretrained_entries<T, I>(
    entries: I
) -> SCResult<(LexicalDictionary<T>, PretrainedVectors)>
where
    T: IdType,
    I: IntoIterator<Item = PretrainedEntry>,
{
    let mut keys: Vec<String> = Vec::new();
    let mut seen = crate::types::SCHashSet::default();
    let mut vectors = PretrainedVectors::default();

    for (idx, (key, vector)) in entries.into_iter().enumerate() {
        if idx == 0 {
            vectors.dimensions = vector.len();
        } else if vector.len() != vectors.dimensions {
            return Err(SlotchipperError::MismatchedLengths {
                name: "pretrained vector",
                expected: vectors.dimensions,
                actual: vector.len(),
            });
        }
        if !seen.insert(key.clone()) {
            continue;
        }
        vectors.data.extend_from_slice(&vector);
        keys.push(key);
    }

    let dictionary = LexicalDictionary::from_keys(keys)?;
    Ok((dictionary, vectors))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_entries() {
        type T = u32;

        let entries: Vec<PretrainedEntry> = vec![
            ("__".to_string(), vec![0.0, 0.0]),
            ("a".to_string(), vec![1.0, 2.0]),
            ("ca".to_string(), vec![3.0, 4.0]),
            ("a".to_string(), vec![9.0, 9.0]),
        ];

        let (dictionary, vectors) = split_pretrained_entries::<T, _>(entries).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.get("ca"), Some(2));
        assert_eq!(vectors.dimensions(), 2);
        assert_eq!(vectors.len(), 3);
        assert_eq!(vectors.vector(1u32), Some(&[1.0f32, 2.0][..]));
        assert_eq!(vectors.vector(3u32), None);
    }

    #[test]
    fn test_split_entries_width_mismatch() {
        type T = u32;

        let entries: Vec<PretrainedEntry> = vec![
            ("a".to_string(), vec![1.0, 2.0]),
            ("b".to_string(), vec![1.0]),
        ];

        assert!(matches!(
            split_pretrained_entries::<T, _>(entries),
            Err(SlotchipperError::MismatchedLengths { .. })
        ));
    }
}
