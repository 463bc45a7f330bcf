//! Bit-packing between byte strings and wordlist indices
//!
//! The payload is read as one big-endian unsigned integer of exactly
//! `8 * len` bits and cut into `b`-bit chunks, most significant chunk first,
//! where `b` is the smallest width that can index every wordlist entry. The
//! wordlist size does not need to be a power of two, and chunks do not need to
//! line up with byte boundaries.
//!
//! ```text
//! bytes:   |  0xA5  |  0x3C  |  0x0F  |            (24 bits)
//! b = 6:   |101001|010011|110000|001111|          (4 words)
//! ```

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::{Error, Result};
use crate::wordlist::Wordlist;

/// Smallest `b` such that `2^b >= n`.
///
/// Returns 0 for `n <= 1`; such lists carry no information and are rejected
/// by [`Wordlist::new`].
pub fn bit_length(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}

/// Encode `data` as a sequence of wordlist entries
pub fn bytes_to_words<'w>(data: &[u8], wordlist: &'w Wordlist) -> Result<Vec<&'w str>> {
    let bits_per_word = wordlist.bit_width();
    let bits = bits_per_word as usize;
    let total_bits = data.len() * 8;

    if total_bits % bits != 0 {
        return Err(Error::IncompatibleWordlist {
            wordlist_len: wordlist.len(),
            total_bits,
            bits_per_word,
        });
    }

    let count = total_bits / bits;
    let value = BigUint::from_bytes_be(data);
    let mask = (BigUint::one() << bits) - BigUint::one();

    let mut words = Vec::with_capacity(count);
    for i in 0..count {
        let shift = total_bits - (i + 1) * bits;
        let chunk = (&value >> shift) & &mask;
        // A chunk is at most `bits` wide, and `bits` never exceeds usize::BITS.
        let index = chunk.to_usize().unwrap_or(usize::MAX);

        let word = wordlist.get(index).ok_or(Error::SymbolOutOfRange {
            position: i + 1,
            index,
            wordlist_len: wordlist.len(),
        })?;
        words.push(word);
    }

    Ok(words)
}

/// Decode a word sequence back into exactly `expected_len` bytes
pub fn words_to_bytes<S: AsRef<str>>(
    words: &[S],
    wordlist: &Wordlist,
    expected_len: usize,
) -> Result<Vec<u8>> {
    let bits_per_word = wordlist.bit_width();
    let bits = bits_per_word as usize;

    let phrase_bits = words.len().checked_mul(bits);
    let payload_bits = expected_len.checked_mul(8);
    if phrase_bits.is_none() || phrase_bits != payload_bits {
        return Err(Error::LengthMismatch {
            word_count: words.len(),
            bits_per_word,
            expected_len,
        });
    }

    let mut value = BigUint::zero();
    for (i, word) in words.iter().enumerate() {
        let word = word.as_ref();
        let index = wordlist.position(word).ok_or_else(|| Error::WordNotFound {
            word: word.to_string(),
            position: i + 1,
        })?;
        value = (value << bits) | BigUint::from(index);
    }

    // `to_bytes_be` is minimal (and yields [0] for zero), so strip any
    // leading zeros and right-align into the fixed-size output.
    let minimal = value.to_bytes_be();
    let significant = match minimal.iter().position(|&b| b != 0) {
        Some(start) => &minimal[start..],
        None => &[][..],
    };

    let mut bytes = vec![0u8; expected_len];
    bytes[expected_len - significant.len()..].copy_from_slice(significant);
    Ok(bytes)
}
