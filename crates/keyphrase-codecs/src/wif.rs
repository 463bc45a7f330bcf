//! Bitcoin Wallet Import Format keys
//!
//! Parsing and serialization are delegated to the `bitcoin` crate. Only the
//! 32-byte scalar travels through the phrase; network and compression flags
//! come from the [`BitcoinWif`] settings when the key is restored.

use bitcoin::secp256k1::SecretKey;
use bitcoin::{NetworkKind, PrivateKey};
use keyphrase_core::{Error, KeyCodec, Result};
use tracing::warn;
use zeroize::Zeroizing;

/// Bitcoin WIF adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitcoinWif {
    /// Network the restored WIF is serialized for
    pub network: NetworkKind,
    /// Whether the restored WIF marks the key as compressed
    pub compressed: bool,
}

impl BitcoinWif {
    pub fn new(network: NetworkKind, compressed: bool) -> Self {
        Self {
            network,
            compressed,
        }
    }

    /// Mainnet, compressed
    pub fn mainnet() -> Self {
        Self::new(NetworkKind::Main, true)
    }

    /// Testnet/regtest/signet, compressed
    pub fn testnet() -> Self {
        Self::new(NetworkKind::Test, true)
    }
}

impl Default for BitcoinWif {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl KeyCodec for BitcoinWif {
    const NAME: &'static str = "bitcoin";
    const SECRET_LEN: usize = 32;
    const CHECKSUM_LEN: usize = 4;

    fn extract_secret(&self, native: &str) -> Result<Zeroizing<Vec<u8>>> {
        let key = PrivateKey::from_wif(native.trim()).map_err(|e| Error::InvalidKeyFormat {
            format: Self::NAME,
            reason: e.to_string(),
        })?;

        if key.network != self.network || key.compressed != self.compressed {
            warn!(
                wif_network = ?key.network,
                wif_compressed = key.compressed,
                restore_network = ?self.network,
                restore_compressed = self.compressed,
                "WIF flags are not stored in the phrase and will differ after decoding"
            );
        }

        Ok(Zeroizing::new(key.inner.secret_bytes().to_vec()))
    }

    fn restore_secret(&self, secret: &[u8]) -> Result<String> {
        let inner = SecretKey::from_slice(secret).map_err(|e| Error::SerializationError {
            format: Self::NAME,
            reason: e.to_string(),
        })?;

        let key = PrivateKey {
            compressed: self.compressed,
            network: self.network,
            inner,
        };
        Ok(key.to_wif())
    }
}
