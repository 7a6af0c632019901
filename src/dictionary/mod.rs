//! Word list lookup.
//!
//! A [`Dictionary`] is built once, then shared read-only between every game
//! through a [`SharedDictionary`] handle. Nothing can mutate it after
//! construction, so concurrent lookups need no locking.
//!
//! Besides whole words it stores every word prefix, which lets the computer
//! player abandon a partial word as soon as no dictionary word starts with it.
//!
//! ```
//! use rust_scrabble::dictionary::Dictionary;
//!
//! let dict = Dictionary::from_words(["cat", "cats", "at"]);
//! assert!(dict.is_valid_word("CAT"));
//! assert!(dict.is_prefix("CA"));
//! assert!(!dict.is_valid_word("CA"));
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use rustc_hash::FxHashSet;

/// Cheap, clonable handle to a process-wide dictionary.
pub type SharedDictionary = Arc<Dictionary>;

/// Immutable set of valid words (upper-case ASCII).
#[derive(Debug, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
    prefixes: FxHashSet<String>,
}

impl Dictionary {
    /// Build from any list of words.
    ///
    /// Entries are trimmed and upper-cased; blank lines and entries with
    /// non-alphabetic characters are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            let upper = word.to_ascii_uppercase();
            for end in 1..upper.len() {
                dict.prefixes.insert(upper[..end].to_string());
            }
            dict.prefixes.insert(upper.clone());
            dict.words.insert(upper);
        }
        dict
    }

    /// Read a word list, one word per line.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
        Ok(Self::from_words(lines))
    }

    /// Load a word list file, one word per line.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let dict = Self::from_reader(BufReader::new(File::open(path)?))?;
        tracing::info!(words = dict.len(), path = %path.display(), "loaded dictionary");
        Ok(dict)
    }

    /// Create an empty dictionary (for testing).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap into a shareable handle.
    #[must_use]
    pub fn shared(self) -> SharedDictionary {
        Arc::new(self)
    }

    /// Is this sequence of letters a valid word? Case-insensitive.
    #[must_use]
    pub fn is_valid_word(&self, letters: &str) -> bool {
        if letters.bytes().all(|b| b.is_ascii_uppercase()) {
            self.words.contains(letters)
        } else {
            self.words.contains(&letters.to_ascii_uppercase())
        }
    }

    /// Does at least one word start with `letters`? Whole words count.
    #[must_use]
    pub fn is_prefix(&self, letters: &str) -> bool {
        if letters.is_empty() {
            return !self.words.is_empty();
        }
        if letters.bytes().all(|b| b.is_ascii_uppercase()) {
            self.prefixes.contains(letters)
        } else {
            self.prefixes.contains(&letters.to_ascii_uppercase())
        }
    }

    /// Get the number of words in the dictionary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::empty();
        assert!(dict.is_empty());
        assert!(!dict.is_valid_word("TEST"));
        assert!(!dict.is_prefix(""));
    }

    #[test]
    fn test_case_insensitive() {
        let dict = Dictionary::from_words(["Hello", " world "]);
        assert!(dict.is_valid_word("hello"));
        assert!(dict.is_valid_word("HELLO"));
        assert!(dict.is_valid_word("World"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_skips_junk_lines() {
        let dict = Dictionary::from_words(["", "it's", "co-op", "ok"]);
        assert_eq!(dict.len(), 1);
        assert!(dict.is_valid_word("OK"));
    }

    #[test]
    fn test_prefixes() {
        let dict = Dictionary::from_words(["QUIT", "QUITS"]);
        assert!(dict.is_prefix("Q"));
        assert!(dict.is_prefix("qui"));
        assert!(dict.is_prefix("QUITS"));
        assert!(!dict.is_prefix("QUITE"));
        assert!(!dict.is_valid_word("QUI"));
    }

    #[test]
    fn test_from_reader() {
        let input = "cat\ndog\n\nbird\n";
        let dict = Dictionary::from_reader(input.as_bytes()).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.is_valid_word("BIRD"));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Dictionary::load("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn test_shared_handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        let shared = Dictionary::from_words(["A"]).shared();
        assert_send_sync(&shared);
        let clone = Arc::clone(&shared);
        assert!(clone.is_valid_word("a"));
    }
}
