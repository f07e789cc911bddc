//! Word list loading utilities
//!
//! Converts embedded string slices or word files into `Word`s, dropping
//! entries that cannot be played.

use crate::core::Word;
use log::{debug, warn};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and lines that are not words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_variants::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary5.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("{}: skipping '{line}': {e}", path.display());
                None
            }
        })
        .collect();

    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_variants::wordlists::loader::words_from_slice;
/// use wordle_variants::wordlists::CLASSIC;
///
/// let words = words_from_slice(CLASSIC);
/// assert_eq!(words.len(), CLASSIC.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Words of exactly `length` letters, first occurrence only
///
/// Entries of any other length are skipped with a warning naming `list`, so
/// a mixed list cannot produce an unplayable puzzle.
#[must_use]
pub fn words_of_length(slice: &[&str], length: usize, list: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::with_capacity(slice.len());

    for &entry in slice {
        match Word::new(entry) {
            Ok(word) if word.len() == length => {
                if seen.insert(word.clone()) {
                    words.push(word);
                } else {
                    debug!("{list}: duplicate '{entry}'");
                }
            }
            Ok(word) => warn!(
                "{list}: skipping '{entry}', {} letters instead of {length}",
                word.len()
            ),
            Err(e) => warn!("{list}: skipping '{entry}': {e}"),
        }
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "to0long", "", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_of_length_filters_and_dedupes() {
        let input = &["flow", "smart", "deliver", "smart", "eman", "lever"];
        let words = words_of_length(input, 5, "test");

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["smart", "lever"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("data/does-not-exist.txt").is_err());
    }

    #[test]
    fn load_from_data_file() {
        let words = load_from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/data/classic.txt"))
            .unwrap();
        assert_eq!(words.len(), crate::wordlists::CLASSIC_COUNT);
    }
}
