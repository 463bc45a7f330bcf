//! Key-codec adapter protocol
//!
//! A key format plugs into the codec by implementing [`KeyCodec`]: it only
//! has to turn its native text into raw secret bytes and back. Checksumming,
//! bit-packing and verification are provided by the trait and are identical
//! for every format.
//!
//! ```text
//! native key ──extract_secret──► secret (L) ──seal──► secret ‖ checksum (L+C)
//!                                                        │
//!                                                 bytes_to_words
//!                                                        ▼
//! native key ◄─restore_secret─── secret (L) ◄─open─── words
//! ```

use tracing::{debug, instrument};
use zeroize::Zeroizing;

use crate::bitpack::{bytes_to_words, words_to_bytes};
use crate::checksum::{checksum, equal_bytes, DEFAULT_CHECKSUM_LEN};
use crate::error::{Error, Result};
use crate::wordlist::Wordlist;

/// Byte layout of a sealed payload: `secret ‖ checksum`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayloadLayout {
    /// Secret length in bytes (`L`)
    pub secret_len: usize,
    /// Checksum length in bytes (`C`)
    pub checksum_len: usize,
}

impl PayloadLayout {
    pub const fn new(secret_len: usize, checksum_len: usize) -> Self {
        Self {
            secret_len,
            checksum_len,
        }
    }

    /// `L + C`
    pub const fn total_len(&self) -> usize {
        self.secret_len + self.checksum_len
    }

    pub const fn total_bits(&self) -> usize {
        self.total_len() * 8
    }

    /// Number of words a payload encodes to with `wordlist`
    pub fn word_count(&self, wordlist: &Wordlist) -> Result<usize> {
        let bits_per_word = wordlist.bit_width();
        let total_bits = self.total_bits();
        if total_bits % bits_per_word as usize != 0 {
            return Err(Error::IncompatibleWordlist {
                wordlist_len: wordlist.len(),
                total_bits,
                bits_per_word,
            });
        }
        Ok(total_bits / bits_per_word as usize)
    }

    pub fn is_compatible(&self, wordlist: &Wordlist) -> bool {
        self.word_count(wordlist).is_ok()
    }

    /// Append the checksum to `secret`
    pub fn seal(&self, secret: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        if secret.len() != self.secret_len {
            return Err(Error::UnexpectedKeyLength {
                expected: self.secret_len,
                actual: secret.len(),
            });
        }

        let check = checksum(secret, self.checksum_len)?;
        let mut payload = Zeroizing::new(Vec::with_capacity(self.total_len()));
        payload.extend_from_slice(secret);
        payload.extend_from_slice(&check);
        Ok(payload)
    }

    /// Split a payload and verify its checksum, returning the secret
    pub fn open(&self, payload: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        if payload.len() != self.total_len() {
            return Err(Error::UnexpectedKeyLength {
                expected: self.total_len(),
                actual: payload.len(),
            });
        }

        let (secret, check) = payload.split_at(self.secret_len);
        let expected = checksum(secret, self.checksum_len)?;
        if !equal_bytes(check, &expected) {
            return Err(Error::ChecksumMismatch);
        }
        Ok(Zeroizing::new(secret.to_vec()))
    }
}

/// A key format that can be written as a word phrase
pub trait KeyCodec {
    /// Human-readable format name, used in errors and logs
    const NAME: &'static str;

    /// Raw secret length in bytes
    const SECRET_LEN: usize;

    /// Checksum length in bytes
    const CHECKSUM_LEN: usize = DEFAULT_CHECKSUM_LEN;

    /// Parse native key text into raw secret bytes.
    ///
    /// Parse failures are reported as [`Error::InvalidKeyFormat`].
    fn extract_secret(&self, native: &str) -> Result<Zeroizing<Vec<u8>>>;

    /// Serialize raw secret bytes back into native key text.
    ///
    /// Failures are reported as [`Error::SerializationError`].
    fn restore_secret(&self, secret: &[u8]) -> Result<String>;

    fn layout(&self) -> PayloadLayout {
        PayloadLayout::new(Self::SECRET_LEN, Self::CHECKSUM_LEN)
    }

    /// Encode a native key as words from `wordlist`
    #[instrument(skip_all, fields(format = Self::NAME))]
    fn encode(&self, native: &str, wordlist: &Wordlist) -> Result<Vec<String>> {
        let secret = self.extract_secret(native)?;
        let payload = self.layout().seal(&secret)?;
        let words = bytes_to_words(&payload, wordlist)?;

        debug!(words = words.len(), "Encoded key");
        Ok(words.into_iter().map(str::to_string).collect())
    }

    /// Decode words back into the native key
    #[instrument(skip_all, fields(format = Self::NAME))]
    fn decode<S: AsRef<str>>(&self, words: &[S], wordlist: &Wordlist) -> Result<String> {
        let secret = self.recover_secret(words, wordlist)?;
        let native = self.restore_secret(&secret)?;

        debug!(words = words.len(), "Decoded key");
        Ok(native)
    }

    /// Check that a phrase decodes and its checksum holds
    fn verify<S: AsRef<str>>(&self, words: &[S], wordlist: &Wordlist) -> Result<()> {
        self.recover_secret(words, wordlist).map(|_| ())
    }

    /// Unpack and verify a phrase without serializing the key
    fn recover_secret<S: AsRef<str>>(
        &self,
        words: &[S],
        wordlist: &Wordlist,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let layout = self.layout();
        let payload = Zeroizing::new(words_to_bytes(words, wordlist, layout.total_len())?);
        layout.open(&payload)
    }
}
