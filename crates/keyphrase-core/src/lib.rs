//! Keyphrase Core - word-phrase codec for fixed-length secrets
//!
//! This crate turns a fixed-length secret into a sequence of words from a
//! wordlist and back, with a truncated SHA-256 checksum that catches
//! transcription errors. The wordlist size does not have to be a power of
//! two; the payload is bit-packed through an arbitrary-precision integer.
//!
//! Key formats are plugged in through [`KeyCodec`]. Everything here is pure
//! and in-memory: no global state, no I/O outside [`Wordlist::load`] and
//! [`save_words`].

pub mod bitpack;
pub mod checksum;
pub mod codec;
pub mod error;
pub mod wordlist;

pub use bitpack::{bit_length, bytes_to_words, words_to_bytes};
pub use checksum::{checksum, equal_bytes, DEFAULT_CHECKSUM_LEN, SHA256_LEN};
pub use codec::{KeyCodec, PayloadLayout};
pub use error::{Error, Result};
pub use wordlist::{parse_phrase, save_words, Wordlist};
