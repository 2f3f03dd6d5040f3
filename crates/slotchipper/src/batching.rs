//! # Batch Chunker
//!
//! Splits lists, and parallel lists of equal length, into fixed-size
//! batches. The final batch holds the remainder; order is preserved.

use crate::{SCResult, SlotchipperError};

fn check_batch_size(batch_size: usize) -> SCResult<()> {
    if batch_size == 0 {
        return Err(SlotchipperError::InvalidShape(
            "batch_size must be > 0".to_string(),
        ));
    }
    Ok(())
}

fn check_parallel_len(
    name: &'static str,
    expected: usize,
    actual: usize,
) -> SCResult<()> {
    if expected != actual {
        return Err(SlotchipperError::MismatchedLengths {
            name,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Split a list into batches of `batch_size`.
///
/// ## Arguments
/// * `items` - the list to split.
/// * `batch_size` - the batch size; must be > 0.
///
/// ## Returns
/// A `Result` containing the ordered batches.
pub fn chunk<E>(
    items: &[E],
    batch_size: usize,
) -> SCResult<Vec<&[E]>> {
    check_batch_size(batch_size)?;
    Ok(items.chunks(batch_size).collect())
}

/// Split two parallel lists into paired batches of `batch_size`.
///
/// ## Arguments
/// * `inputs` - the input list.
/// * `labels` - the label list; must match `inputs` in length.
/// * `batch_size` - the batch size; must be > 0.
///
/// ## Returns
/// A `Result` containing the ordered ``(inputs, labels)`` batches.
pub fn chunk_pairs<'a, A, B>(
    inputs: &'a [A],
    labels: &'a [B],
    batch_size: usize,
) -> SCResult<Vec<(&'a [A], &'a [B])>> {
    check_batch_size(batch_size)?;
    check_parallel_len("labels", inputs.len(), labels.len())?;
    Ok(inputs
        .chunks(batch_size)
        .zip(labels.chunks(batch_size))
        .collect())
}

/// Split three parallel lists into batches of `batch_size`.
///
/// Used for ``(sentences, intents, tags)`` training and test sets.
///
/// ## Arguments
/// * `inputs` - the input list.
/// * `first` - the first label list; must match `inputs` in length.
/// * `second` - the second label list; must match `inputs` in length.
/// * `batch_size` - the batch size; must be > 0.
///
/// ## Returns
/// A `Result` containing the ordered batches.
#[allow(clippy::type_complexity)]
pub fn chunk_triples<'a, A, B, C>(
    inputs: &'a [A],
    first: &'a [B],
    second: &'a [C],
    batch_size: usize,
) -> SCResult<Vec<(&'a [A], &'a [B], &'a [C])>> {
    check_batch_size(batch_size)?;
    check_parallel_len("first labels", inputs.len(), first.len())?;
    check_parallel_len("second labels", inputs.len(), second.len())?;
    Ok(inputs
        .chunks(batch_size)
        .zip(first.chunks(batch_size))
        .zip(second.chunks(batch_size))
        .map(|((a, b), c)| (a, b, c))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk() {
        let items = [1, 2, 3, 4, 5];
        let batches = chunk(&items, 2).unwrap();

        assert_eq!(batches.iter().map(|b| b.len()).collect::<Vec<_>>(), vec![2, 2, 1]);
        assert_eq!(batches.concat(), items.to_vec());

        assert!(chunk(&items, 7).unwrap().len() == 1);
        assert!(chunk::<u8>(&[], 3).unwrap().is_empty());
        assert!(matches!(
            chunk(&items, 0),
            Err(SlotchipperError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_chunk_pairs() {
        let inputs = ["a", "b", "c", "d", "e"];
        let labels = [0, 1, 2, 3, 4];

        let batches = chunk_pairs(&inputs, &labels, 2).unwrap();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[1], (&inputs[2..4], &labels[2..4]));
        assert_eq!(batches[2], (&inputs[4..], &labels[4..]));

        assert!(matches!(
            chunk_pairs(&inputs, &labels[..4], 2),
            Err(SlotchipperError::MismatchedLengths {
                expected: 5,
                actual: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_chunk_triples() {
        let inputs = ["a", "b", "c"];
        let intents = ["x", "y", "z"];
        let tags = [vec![0], vec![1], vec![2]];

        let batches = chunk_triples(&inputs, &intents, &tags, 2).unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[1].0, &["c"]);
        assert_eq!(batches[1].1, &["z"]);
        assert_eq!(batches[1].2, &[vec![2]]);

        assert!(chunk_triples(&inputs, &intents, &tags[..1], 2).is_err());
    }
}
