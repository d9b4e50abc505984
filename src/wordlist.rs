//! Loading a word list from disk.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::WordscanError;

/// Read one word per line from `path`, skipping empty lines.
///
/// A trailing `\r` is stripped so CRLF files load the same as LF files.
/// A file with no words is an [`WordscanError::EmptyWordList`] error.
pub fn load_words(path: impl AsRef<Path>) -> Result<Vec<String>, WordscanError> {
    let path = path.as_ref();
    let io_err = |source| WordscanError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let mut words = Vec::new();

    for line in BufReader::new(file).lines() {
        let mut line = line.map_err(io_err)?;
        if line.ends_with('\r') {
            line.pop();
        }
        if !line.is_empty() {
            words.push(line);
        }
    }

    if words.is_empty() {
        return Err(WordscanError::EmptyWordList(path.to_path_buf()));
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn skips_blank_lines_and_strips_cr() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "alpha\r\n\r\nbeta\n\ngamma").unwrap();

        let words = load_words(&path).unwrap();
        assert_eq!(words, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn empty_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "\n\n").unwrap();

        let err = load_words(&path).unwrap_err();
        assert!(matches!(err, WordscanError::EmptyWordList(_)));
        assert_eq!(err.path(), Some(&path));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = load_words(&path).unwrap_err();
        assert!(matches!(err, WordscanError::Io { .. }));
        assert!(!err.is_fatal());
    }
}
