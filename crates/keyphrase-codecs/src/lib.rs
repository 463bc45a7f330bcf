//! # Keyphrase Codecs
//!
//! Key-format adapters for the keyphrase word codec:
//! - **bitcoin**: Wallet Import Format strings, via the `bitcoin` crate
//! - **ethereum**: raw secp256k1 scalars as hex, validated with `k256`
//!
//! Each adapter implements [`KeyCodec`] and only maps between its native
//! text and the 32 raw secret bytes. [`KeyFormat`] and [`FormatCodec`] pick an
//! adapter at runtime, for front ends that take the format as user input.

use std::fmt;
use std::str::FromStr;

use keyphrase_core::{KeyCodec, PayloadLayout, Result, Wordlist};
use serde::{Deserialize, Serialize};

#[cfg(feature = "ethereum")]
pub mod hex_key;

#[cfg(feature = "bitcoin")]
pub mod wif;

#[cfg(feature = "ethereum")]
pub use hex_key::EthereumKey;

#[cfg(feature = "bitcoin")]
pub use wif::BitcoinWif;

#[cfg(feature = "bitcoin")]
pub use bitcoin::NetworkKind;

/// Supported key formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyFormat {
    /// Bitcoin Wallet Import Format
    #[cfg(feature = "bitcoin")]
    Bitcoin,
    /// 0x-prefixed hex secp256k1 key
    #[cfg(feature = "ethereum")]
    Ethereum,
}

impl KeyFormat {
    /// All formats compiled into this build
    pub const ALL: &'static [KeyFormat] = &[
        #[cfg(feature = "bitcoin")]
        KeyFormat::Bitcoin,
        #[cfg(feature = "ethereum")]
        KeyFormat::Ethereum,
    ];

    /// Identifier used on the command line and in config files
    pub fn name(&self) -> &'static str {
        match *self {
            #[cfg(feature = "bitcoin")]
            Self::Bitcoin => BitcoinWif::NAME,
            #[cfg(feature = "ethereum")]
            Self::Ethereum => EthereumKey::NAME,
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match *self {
            #[cfg(feature = "bitcoin")]
            Self::Bitcoin => "Bitcoin WIF private key",
            #[cfg(feature = "ethereum")]
            Self::Ethereum => "hex secp256k1 private key (Ethereum style)",
        }
    }

    /// Adapter with default settings
    pub fn codec(&self) -> FormatCodec {
        match *self {
            #[cfg(feature = "bitcoin")]
            Self::Bitcoin => FormatCodec::Bitcoin(BitcoinWif::default()),
            #[cfg(feature = "ethereum")]
            Self::Ethereum => FormatCodec::Ethereum(EthereumKey),
        }
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for unrecognized format names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key format {0:?} (expected one of: {})", known_formats())]
pub struct UnknownFormat(pub String);

fn known_formats() -> String {
    let known: Vec<&str> = KeyFormat::ALL.iter().map(KeyFormat::name).collect();
    known.join(", ")
}

impl FromStr for KeyFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        KeyFormat::ALL
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// A configured adapter, chosen at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCodec {
    #[cfg(feature = "bitcoin")]
    Bitcoin(BitcoinWif),
    #[cfg(feature = "ethereum")]
    Ethereum(EthereumKey),
}

impl FormatCodec {
    pub fn format(&self) -> KeyFormat {
        match self {
            #[cfg(feature = "bitcoin")]
            Self::Bitcoin(_) => KeyFormat::Bitcoin,
            #[cfg(feature = "ethereum")]
            Self::Ethereum(_) => KeyFormat::Ethereum,
        }
    }

    pub fn layout(&self) -> PayloadLayout {
        match self {
            #[cfg(feature = "bitcoin")]
            Self::Bitcoin(codec) => codec.layout(),
            #[cfg(feature = "ethereum")]
            Self::Ethereum(codec) => codec.layout(),
        }
    }

    pub fn encode(&self, native: &str, wordlist: &Wordlist) -> Result<Vec<String>> {
        match self {
            #[cfg(feature = "bitcoin")]
            Self::Bitcoin(codec) => codec.encode(native, wordlist),
            #[cfg(feature = "ethereum")]
            Self::Ethereum(codec) => codec.encode(native, wordlist),
        }
    }

    pub fn decode<S: AsRef<str>>(&self, words: &[S], wordlist: &Wordlist) -> Result<String> {
        match self {
            #[cfg(feature = "bitcoin")]
            Self::Bitcoin(codec) => codec.decode(words, wordlist),
            #[cfg(feature = "ethereum")]
            Self::Ethereum(codec) => codec.decode(words, wordlist),
        }
    }

    pub fn verify<S: AsRef<str>>(&self, words: &[S], wordlist: &Wordlist) -> Result<()> {
        match self {
            #[cfg(feature = "bitcoin")]
            Self::Bitcoin(codec) => codec.verify(words, wordlist),
            #[cfg(feature = "ethereum")]
            Self::Ethereum(codec) => codec.verify(words, wordlist),
        }
    }
}

impl From<KeyFormat> for FormatCodec {
    fn from(format: KeyFormat) -> Self {
        format.codec()
    }
}
