//! Error types for the keyphrase codec

use std::path::PathBuf;

use thiserror::Error;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while encoding or decoding a secret.
///
/// Every variant is terminal: no operation returns partial output alongside
/// an error. None of the variants carry secret material.
#[derive(Debug, Error)]
pub enum Error {
    /// The native key string could not be parsed by the key-format library
    #[error("Invalid {format} key: {reason}")]
    InvalidKeyFormat { format: &'static str, reason: String },

    /// The parsed secret does not have the format's fixed length
    #[error("Unexpected key length: expected {expected} bytes, got {actual}")]
    UnexpectedKeyLength { expected: usize, actual: usize },

    /// The wordlist bit width does not divide the payload bit length
    #[error(
        "Wordlist size {wordlist_len} incompatible: {total_bits} bits not divisible by {bits_per_word} bits/word"
    )]
    IncompatibleWordlist {
        wordlist_len: usize,
        total_bits: usize,
        bits_per_word: u32,
    },

    /// A phrase word is not in the wordlist (position is 1-based)
    #[error("Word #{position} not in wordlist: {word:?}")]
    WordNotFound { word: String, position: usize },

    /// A packed chunk has no wordlist entry (position is 1-based)
    #[error("Chunk #{position} has value {index} outside wordlist of {wordlist_len} entries")]
    SymbolOutOfRange {
        position: usize,
        index: usize,
        wordlist_len: usize,
    },

    /// The phrase carries a different number of bits than the payload
    #[error(
        "Invalid number of words: got {word_count} at {bits_per_word} bits/word, expected {expected_len} bytes"
    )]
    LengthMismatch {
        word_count: usize,
        bits_per_word: u32,
        expected_len: usize,
    },

    /// The recomputed checksum does not match the decoded one
    #[error("Checksum mismatch - wordlist or word order may be wrong")]
    ChecksumMismatch,

    /// The raw secret could not be serialized back into the native format
    #[error("Failed to serialize {format} key: {reason}")]
    SerializationError { format: &'static str, reason: String },

    /// A wordlist needs at least two entries to carry any bits
    #[error("Wordlist too small: {len} entries, need at least 2")]
    WordlistTooSmall { len: usize },

    /// A wordlist entry appears twice (positions are 1-based)
    #[error("Duplicate wordlist entry {word:?} at lines {first} and {second}")]
    DuplicateWord {
        word: String,
        first: usize,
        second: usize,
    },

    /// Requested checksum is longer than the digest
    #[error("Checksum length {requested} exceeds digest size {max}")]
    ChecksumLength { requested: usize, max: usize },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this error means the phrase itself is damaged rather than the
    /// inputs around it being misconfigured.
    pub fn is_transcription_error(&self) -> bool {
        matches!(
            self,
            Self::WordNotFound { .. } | Self::LengthMismatch { .. } | Self::ChecksumMismatch
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_not_found_message() {
        let err = Error::WordNotFound {
            word: "zebra".to_string(),
            position: 3,
        };
        assert_eq!(err.to_string(), "Word #3 not in wordlist: \"zebra\"");
        assert!(err.is_transcription_error());
    }

    #[test]
    fn test_incompatible_message() {
        let err = Error::IncompatibleWordlist {
            wordlist_len: 2048,
            total_bits: 288,
            bits_per_word: 11,
        };
        assert!(err.to_string().contains("288 bits not divisible by 11"));
        assert!(!err.is_transcription_error());
    }
}
