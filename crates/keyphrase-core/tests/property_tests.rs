//! Property-based tests for keyphrase-core using proptest
//!
//! These tests verify invariants that should hold for all valid inputs.

use proptest::prelude::*;
use zeroize::Zeroizing;

use keyphrase_core::{
    bit_length, bytes_to_words, words_to_bytes, Error, KeyCodec, Result, Wordlist,
};

// ============================================
// Helpers
// ============================================

/// 32-byte key as 64 hex digits, 4-byte checksum
struct HexKey;

impl KeyCodec for HexKey {
    const NAME: &'static str = "hex";
    const SECRET_LEN: usize = 32;

    fn extract_secret(&self, native: &str) -> Result<Zeroizing<Vec<u8>>> {
        hex::decode(native)
            .map(Zeroizing::new)
            .map_err(|e| Error::InvalidKeyFormat {
                format: Self::NAME,
                reason: e.to_string(),
            })
    }

    fn restore_secret(&self, secret: &[u8]) -> Result<String> {
        Ok(hex::encode(secret))
    }
}

fn numbered_wordlist(n: usize) -> Wordlist {
    Wordlist::new((0..n).map(|i| format!("word{i:04}")).collect()).unwrap()
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Smallest byte length whose bit count is a multiple of `bits`
fn byte_unit(bits: usize) -> usize {
    bits / gcd(bits, 8)
}

// ============================================
// Arbitrary Implementations
// ============================================

/// Power-of-two wordlist size and a compatible payload
fn arb_pow2_payload() -> impl Strategy<Value = (usize, Vec<u8>)> {
    (1u32..=12, 1usize..=4).prop_flat_map(|(bits, units)| {
        let len = byte_unit(bits as usize) * units;
        (Just(1usize << bits), prop::collection::vec(any::<u8>(), len))
    })
}

/// Arbitrary wordlist size and a phrase of valid indices that fills whole bytes
fn arb_index_phrase() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (2usize..=5000, 1usize..=3).prop_flat_map(|(n, units)| {
        let bits = bit_length(n) as usize;
        let count = byte_unit(bits) * 8 / bits * units;
        (Just(n), prop::collection::vec(0..n, count))
    })
}

fn arb_secret() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>()
}

// ============================================
// Property Tests
// ============================================

proptest! {
    // ----------------------------------------
    // Bit-Packing Properties
    // ----------------------------------------

    #[test]
    fn bytes_roundtrip_pow2_wordlists((n, data) in arb_pow2_payload()) {
        let wordlist = numbered_wordlist(n);
        let words = bytes_to_words(&data, &wordlist).unwrap();
        prop_assert_eq!(words.len() * bit_length(n) as usize, data.len() * 8);

        let recovered = words_to_bytes(&words, &wordlist, data.len()).unwrap();
        prop_assert_eq!(recovered, data);
    }

    #[test]
    fn words_roundtrip_any_wordlist((n, indices) in arb_index_phrase()) {
        let wordlist = numbered_wordlist(n);
        let words: Vec<&str> = indices.iter().map(|&i| wordlist.get(i).unwrap()).collect();
        let len = words.len() * bit_length(n) as usize / 8;

        let bytes = words_to_bytes(&words, &wordlist, len).unwrap();
        prop_assert_eq!(bytes.len(), len);

        let again = bytes_to_words(&bytes, &wordlist).unwrap();
        prop_assert_eq!(again, words);
    }

    #[test]
    fn incompatible_bit_length_rejected(n in 2usize..=5000, len in 1usize..=64) {
        let bits = bit_length(n) as usize;
        prop_assume!((len * 8) % bits != 0);

        let wordlist = numbered_wordlist(n);
        let result = bytes_to_words(&vec![0u8; len], &wordlist);
        let is_incompatible = matches!(result, Err(Error::IncompatibleWordlist { .. }));
        prop_assert!(is_incompatible);
    }

    #[test]
    fn wrong_word_count_rejected(secret in arb_secret(), extra in 1usize..=5, drop in prop::bool::ANY) {
        let wordlist = numbered_wordlist(4096);
        let mut words = HexKey.encode(&hex::encode(secret), &wordlist).unwrap();
        if drop {
            words.truncate(words.len() - extra);
        } else {
            words.extend(std::iter::repeat("word0000".to_string()).take(extra));
        }

        let is_mismatch = matches!(
            HexKey.decode(&words, &wordlist),
            Err(Error::LengthMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }

    // ----------------------------------------
    // Codec Properties
    // ----------------------------------------

    #[test]
    fn codec_roundtrip(secret in arb_secret()) {
        let wordlist = numbered_wordlist(4096);
        let native = hex::encode(secret);
        let words = HexKey.encode(&native, &wordlist).unwrap();
        prop_assert_eq!(words.len(), 24);
        prop_assert_eq!(HexKey.decode(&words, &wordlist).unwrap(), native);
    }

    #[test]
    fn codec_is_deterministic(secret in arb_secret()) {
        let wordlist = numbered_wordlist(512);
        let native = hex::encode(secret);
        let first = HexKey.encode(&native, &wordlist).unwrap();
        let second = HexKey.encode(&native, &wordlist).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            HexKey.decode(&first, &wordlist).unwrap(),
            HexKey.decode(&second, &wordlist).unwrap()
        );
    }

    #[test]
    fn single_byte_corruption_detected(
        secret in arb_secret(),
        position in 0usize..32,
        flip in 1u8..=255,
    ) {
        let wordlist = numbered_wordlist(4096);
        let layout = HexKey.layout();
        let mut payload = layout.seal(&secret).unwrap().to_vec();
        payload[position] ^= flip;

        let words = bytes_to_words(&payload, &wordlist).unwrap();
        let is_mismatch = matches!(
            HexKey.decode(&words, &wordlist),
            Err(Error::ChecksumMismatch)
        );
        prop_assert!(is_mismatch);
    }

    #[test]
    fn word_substitution_never_returns_original(
        secret in arb_secret(),
        position in 0usize..24,
        replacement in 0usize..4096,
    ) {
        let wordlist = numbered_wordlist(4096);
        let native = hex::encode(secret);
        let mut words = HexKey.encode(&native, &wordlist).unwrap();

        let substitute = wordlist.get(replacement).unwrap();
        prop_assume!(words[position] != substitute);
        words[position] = substitute.to_string();

        match HexKey.decode(&words, &wordlist) {
            Err(Error::ChecksumMismatch) => {}
            Ok(decoded) => prop_assert_ne!(decoded, native),
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_word_reports_position(secret in arb_secret(), position in 0usize..24) {
        let wordlist = numbered_wordlist(4096);
        let mut words = HexKey.encode(&hex::encode(secret), &wordlist).unwrap();
        words[position] = "notaword".to_string();

        match HexKey.decode(&words, &wordlist) {
            Err(Error::WordNotFound { word, position: reported }) => {
                prop_assert_eq!(word, "notaword");
                prop_assert_eq!(reported, position + 1);
            }
            other => prop_assert!(false, "unexpected result: {other:?}"),
        }
    }
}

// ============================================
// Concrete Scenarios
// ============================================

#[test]
fn bip39_sized_wordlist_rejects_36_byte_payload() {
    let wordlist = numbered_wordlist(2048);
    let err = HexKey.encode(&"11".repeat(32), &wordlist).unwrap_err();
    assert!(matches!(
        err,
        Error::IncompatibleWordlist {
            wordlist_len: 2048,
            total_bits: 288,
            bits_per_word: 11,
        }
    ));
}

#[test]
fn bip39_sized_wordlist_fits_33_bytes() {
    let wordlist = numbered_wordlist(2048);
    let data = [0x5Au8; 33];
    let words = bytes_to_words(&data, &wordlist).unwrap();
    assert_eq!(words.len(), 24);
    assert_eq!(words_to_bytes(&words, &wordlist, 33).unwrap(), data);
}

#[test]
fn compatible_wordlist_sizes_for_36_bytes() {
    let layout = HexKey.layout();
    for (n, expected) in [(2usize, 288usize), (16, 72), (256, 36), (512, 32), (4096, 24)] {
        let wordlist = numbered_wordlist(n);
        assert_eq!(layout.word_count(&wordlist).unwrap(), expected, "n = {n}");
    }
    for n in [32usize, 128, 1024, 2048, 8192] {
        assert!(!layout.is_compatible(&numbered_wordlist(n)), "n = {n}");
    }
}
