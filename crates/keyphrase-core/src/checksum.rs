//! Truncated SHA-256 checksums

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// SHA-256 output size in bytes
pub const SHA256_LEN: usize = 32;

/// Checksum bytes appended to a secret unless a format asks otherwise
pub const DEFAULT_CHECKSUM_LEN: usize = 4;

/// First `length` bytes of SHA-256 over `data`
pub fn checksum(data: &[u8], length: usize) -> Result<Vec<u8>> {
    if length > SHA256_LEN {
        return Err(Error::ChecksumLength {
            requested: length,
            max: SHA256_LEN,
        });
    }

    let digest = Sha256::digest(data);
    Ok(digest[..length].to_vec())
}

/// Compare two byte strings without exiting early on the first difference
pub fn equal_bytes(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        // SHA-256("abc") = ba7816bf 8f01cfea ...
        let sum = checksum(b"abc", 4).unwrap();
        assert_eq!(hex::encode(sum), "ba7816bf");

        let full = checksum(b"abc", SHA256_LEN).unwrap();
        assert_eq!(
            hex::encode(full),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_zero_length() {
        assert!(checksum(b"anything", 0).unwrap().is_empty());
    }

    #[test]
    fn test_length_past_digest() {
        assert!(matches!(
            checksum(b"abc", 33),
            Err(Error::ChecksumLength {
                requested: 33,
                max: 32
            })
        ));
    }

    #[test]
    fn test_deterministic() {
        let data = [0x42u8; 32];
        assert_eq!(checksum(&data, 4).unwrap(), checksum(&data, 4).unwrap());
    }

    #[test]
    fn test_equal_bytes() {
        assert!(equal_bytes(&[], &[]));
        assert!(equal_bytes(&[1, 2, 3], &[1, 2, 3]));
        assert!(!equal_bytes(&[1, 2, 3], &[1, 2, 4]));
        assert!(!equal_bytes(&[1, 2, 3], &[1, 2]));
        assert!(!equal_bytes(&[0], &[]));
    }
}
