//! # fastText ``.vec`` IO
//!
//! The text format is an optional ``"<count> <dimensions>"`` header line,
//! followed by one ``key v1 v2 ...`` line per entry.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    SCResult,
    SlotchipperError,
    dictionary::{LexicalDictionary, PretrainedEntry, PretrainedVectors, split_pretrained_entries},
    language::UNKNOWN_NGRAM_KEY,
    types::IdType,
};

/// Parse a header line of the form ``"<count> <dimensions>"``.
fn parse_header(line: &str) -> Option<(usize, usize)> {
    let mut fields = line.split_whitespace();
    let count = fields.next()?.parse().ok()?;
    let dimensions = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((count, dimensions))
}

/// Read pretrained entries from a fastText ``.vec`` stream.
///
/// When the header line is present, an all-zero ``"__"`` entry is
/// inserted first, so the unknown-ngram key takes id 0.
///
/// ## Arguments
/// * `reader` - the line reader.
///
/// ## Returns
/// A `Result` containing the ordered entries.
pub fn read_fasttext_entries<R: BufRead>(reader: R) -> SCResult<Vec<PretrainedEntry>> {
    let mut entries: Vec<PretrainedEntry> = Vec::new();
    let mut seen_first = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.trim().is_empty() {
            continue;
        }

        let first = !seen_first;
        seen_first = true;

        if first && let Some((count, dimensions)) = parse_header(line) {
            log::info!("fastText header: {count} entries / {dimensions} dimensions");
            entries.push((UNKNOWN_NGRAM_KEY.to_string(), vec![0.0; dimensions]));
            continue;
        }

        let mut fields = line.split(' ');
        let key = fields.next().unwrap_or_default().to_string();
        let vector = fields
            .filter(|f| !f.is_empty())
            .map(|f| {
                f.parse::<f32>().map_err(|e| {
                    SlotchipperError::Parse(format!("line {}: {f:?}: {e}", idx + 1))
                })
            })
            .collect::<SCResult<Vec<f32>>>()?;

        entries.push((key, vector));
    }

    Ok(entries)
}

/// Load pretrained entries from a fastText ``.vec`` file.
///
/// ## Arguments
/// * `path` - the path to the file.
pub fn load_fasttext_entries_path<P: AsRef<Path>>(path: P) -> SCResult<Vec<PretrainedEntry>> {
    let reader = BufReader::new(File::open(path)?);
    read_fasttext_entries(reader)
}

/// Load a [`LexicalDictionary`] and its [`PretrainedVectors`] from a fastText ``.vec`` file.
///
/// ## Arguments
/// * `path` - the path to the file.
pub fn load_fasttext_dictionary_path<T, P>(
    path: P
) -> SCResult<(LexicalDictionary<T>, PretrainedVectors)>
where
    T: IdType,
    P: AsRef<Path>,
{
    let entries = load_fasttext_entries_path(path)?;
    let (dictionary, vectors) = split_pretrained_entries(entries)?;
    log::info!(
        "loaded dictionary: {} keys, {} dimensions",
        dictionary.len(),
        vectors.dimensions()
    );
    Ok((dictionary, vectors))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = "3 2\na 0.5 -1\nca 1e-3 2\nat 3 4 \n";

    #[test]
    fn test_read_with_header() {
        let entries = read_fasttext_entries(SAMPLE.as_bytes()).unwrap();

        assert_eq!(
            entries,
            vec![
                ("__".to_string(), vec![0.0, 0.0]),
                ("a".to_string(), vec![0.5, -1.0]),
                ("ca".to_string(), vec![0.001, 2.0]),
                ("at".to_string(), vec![3.0, 4.0]),
            ]
        );
    }

    #[test]
    fn test_read_without_header() {
        let entries = read_fasttext_entries("x 1 2\n\ny 3 4\n".as_bytes()).unwrap();

        assert_eq!(
            entries.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
            vec!["x", "y"]
        );
    }

    #[test]
    fn test_read_header_after_blank_lines() {
        let entries = read_fasttext_entries("\n  \n1 2\nx 1 2\n".as_bytes()).unwrap();

        assert_eq!(
            entries,
            vec![
                ("__".to_string(), vec![0.0, 0.0]),
                ("x".to_string(), vec![1.0, 2.0]),
            ]
        );
    }

    #[test]
    fn test_read_bad_float() {
        match read_fasttext_entries("x 1 nope\n".as_bytes()) {
            Err(SlotchipperError::Parse(msg)) => assert!(msg.contains("line 1")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_load_dictionary_path() {
        type T = u32;

        tempdir::TempDir::new("fasttext_test")
            .and_then(|dir| {
                let path = dir.path().join("dict.vec");
                File::create(&path)?.write_all(SAMPLE.as_bytes())?;

                let (dictionary, vectors) = load_fasttext_dictionary_path::<T, _>(&path).unwrap();
                assert_eq!(dictionary.unknown_id(), Some(0));
                assert_eq!(dictionary.get("at"), Some(3));
                assert_eq!(vectors.vector(2u32), Some(&[0.001f32, 2.0][..]));

                Ok(())
            })
            .unwrap();
    }
}
