//! # Key List IO
//!
//! One dictionary key per line, in id order.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{SCResult, dictionary::LexicalDictionary, types::IdType};

/// Read a [`LexicalDictionary`] from a key list stream.
///
/// Empty lines are skipped; ids are dense in line order.
pub fn read_key_list<T, R>(reader: R) -> SCResult<LexicalDictionary<T>>
where
    T: IdType,
    R: BufRead,
{
    let mut keys: Vec<String> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let key = line.trim_end_matches(['\r', '\n']);
        if key.is_empty() {
            continue;
        }
        keys.push(key.to_string());
    }
    LexicalDictionary::from_keys(keys)
}

/// Load a [`LexicalDictionary`] from a key list file.
///
/// ## Arguments
/// * `path` - the path to the key list.
pub fn load_key_list_path<T, P>(path: P) -> SCResult<LexicalDictionary<T>>
where
    T: IdType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_key_list(reader)
}

/// Write the keys of a [`LexicalDictionary`], in insertion order.
pub fn write_key_list<T, W>(
    dictionary: &LexicalDictionary<T>,
    writer: &mut W,
) -> SCResult<()>
where
    T: IdType,
    W: Write,
{
    for key in dictionary.keys() {
        writeln!(writer, "{key}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Save the keys of a [`LexicalDictionary`] to a file.
///
/// ## Arguments
/// * `dictionary` - the dictionary to save.
/// * `path` - the path to save the key list to.
pub fn save_key_list_path<T, P>(
    dictionary: &LexicalDictionary<T>,
    path: P,
) -> SCResult<()>
where
    T: IdType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_key_list(dictionary, &mut writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_key_list() {
        type T = u32;

        let dictionary = LexicalDictionary::<T>::from_keys(["__", "a", "ca", "at", "cat"]).unwrap();

        tempdir::TempDir::new("key_list_test")
            .and_then(|dir| {
                let path = dir.path().join("dict.txt");

                save_key_list_path(&dictionary, &path).expect("Failed to save keys");

                let loaded: LexicalDictionary<T> =
                    load_key_list_path(&path).expect("Failed to load keys");

                assert_eq!(&loaded, &dictionary);

                Ok(())
            })
            .unwrap();
    }
}
