//! Wordlists and phrase text handling
//!
//! A [`Wordlist`] is the encoding alphabet: an ordered, duplicate-free list of
//! at least two symbols. The word-to-index lookup is built once when the list
//! is constructed, so decoding never rebuilds it.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::bitpack::bit_length;
use crate::error::{Error, Result};

/// Ordered bijection between `0..len` and words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
    index: HashMap<String, usize>,
}

impl Wordlist {
    /// Build a wordlist, rejecting lists that cannot decode unambiguously
    pub fn new(words: Vec<String>) -> Result<Self> {
        if words.len() < 2 {
            return Err(Error::WordlistTooSmall { len: words.len() });
        }

        let mut index = HashMap::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            if let Some(first) = index.insert(word.clone(), i) {
                return Err(Error::DuplicateWord {
                    word: word.clone(),
                    first: first + 1,
                    second: i + 1,
                });
            }
        }

        Ok(Self { words, index })
    }

    /// Parse newline-delimited text, one entry per line.
    ///
    /// Lines are trimmed and blank lines are skipped. Lists that contain
    /// blank lines therefore index differently here than in tools that count
    /// every line as an entry, and phrases made with such tools will not
    /// decode against them.
    pub fn parse(text: &str) -> Result<Self> {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self::new(words)
    }

    /// Load a wordlist file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let wordlist = Self::parse(&text)?;
        debug!(
            path = %path.display(),
            entries = wordlist.len(),
            bits_per_word = wordlist.bit_width(),
            "Loaded wordlist"
        );
        Ok(wordlist)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed wordlist
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Bits carried by each word
    pub fn bit_width(&self) -> u32 {
        bit_length(self.words.len())
    }

    /// Word at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Index of `word`
    pub fn position(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Split phrase text on any whitespace
pub fn parse_phrase(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Write words one per line, each followed by a newline
pub fn save_words<S: AsRef<str>>(words: &[S], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::File::create(path).map_err(io_err)?;
    for word in words {
        writeln!(file, "{}", word.as_ref()).map_err(io_err)?;
    }
    file.flush().map_err(io_err)?;

    debug!(path = %path.display(), words = words.len(), "Saved phrase");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let wordlist = Wordlist::parse("  alpha\nbeta  \n\n\tgamma\ndelta\n").unwrap();
        assert_eq!(wordlist.len(), 4);
        assert_eq!(wordlist.get(0), Some("alpha"));
        assert_eq!(wordlist.get(2), Some("gamma"));
        assert_eq!(wordlist.position("delta"), Some(3));
        assert_eq!(wordlist.bit_width(), 2);
    }

    #[test]
    fn test_rejects_small_lists() {
        assert!(matches!(
            Wordlist::parse("only\n"),
            Err(Error::WordlistTooSmall { len: 1 })
        ));
        assert!(matches!(
            Wordlist::new(Vec::new()),
            Err(Error::WordlistTooSmall { len: 0 })
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = Wordlist::parse("a\nb\nc\nb\n").unwrap_err();
        match err {
            Error::DuplicateWord {
                word,
                first,
                second,
            } => {
                assert_eq!(word, "b");
                assert_eq!(first, 2);
                assert_eq!(second, 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let list_path = dir.path().join("words.txt");
        fs::write(&list_path, "one\ntwo\nthree\nfour\n").unwrap();

        let wordlist = Wordlist::load(&list_path).unwrap();
        assert_eq!(wordlist.len(), 4);

        let out_path = dir.path().join("phrase.txt");
        save_words(&["two", "four"], &out_path).unwrap();
        assert_eq!(fs::read_to_string(&out_path).unwrap(), "two\nfour\n");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Wordlist::load("/nonexistent/keyphrase/words.txt").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_parse_phrase() {
        let words = parse_phrase("  abandon\tability \n able  ");
        assert_eq!(words, vec!["abandon", "ability", "able"]);
        assert!(parse_phrase("   ").is_empty());
    }
}
