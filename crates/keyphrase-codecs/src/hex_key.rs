//! Raw secp256k1 private keys as hex (Ethereum style)

use k256::SecretKey;
use keyphrase_core::{Error, KeyCodec, Result};
use zeroize::Zeroizing;

/// 32-byte secp256k1 scalar written as 64 hex digits, `0x` prefix optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EthereumKey;

impl EthereumKey {
    fn strip_prefix(native: &str) -> &str {
        let trimmed = native.trim();
        trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed)
    }
}

impl KeyCodec for EthereumKey {
    const NAME: &'static str = "ethereum";
    const SECRET_LEN: usize = 32;
    const CHECKSUM_LEN: usize = 4;

    fn extract_secret(&self, native: &str) -> Result<Zeroizing<Vec<u8>>> {
        let bytes = Zeroizing::new(hex::decode(Self::strip_prefix(native)).map_err(|e| {
            Error::InvalidKeyFormat {
                format: Self::NAME,
                reason: e.to_string(),
            }
        })?);

        // Wrong lengths are reported by the payload layout
        if bytes.len() == Self::SECRET_LEN {
            SecretKey::from_slice(&bytes).map_err(|_| Error::InvalidKeyFormat {
                format: Self::NAME,
                reason: "not a valid secp256k1 scalar".to_string(),
            })?;
        }

        Ok(bytes)
    }

    fn restore_secret(&self, secret: &[u8]) -> Result<String> {
        if secret.len() != Self::SECRET_LEN {
            return Err(Error::SerializationError {
                format: Self::NAME,
                reason: format!("expected {} bytes, got {}", Self::SECRET_LEN, secret.len()),
            });
        }

        let key = SecretKey::from_slice(secret).map_err(|_| Error::SerializationError {
            format: Self::NAME,
            reason: "not a valid secp256k1 scalar".to_string(),
        })?;
        Ok(format!("0x{}", hex::encode(key.to_bytes())))
    }
}
