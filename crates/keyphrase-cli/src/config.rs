//! Configuration file handling
//!
//! An optional TOML file supplies defaults for the wordlist path, the key
//! format and the Bitcoin restore settings. Command-line flags override it.
//!
//! ```toml
//! wordlist = "/usr/share/keyphrase/words-4096.txt"
//! format = "bitcoin"
//!
//! [bitcoin]
//! network = "main"
//! compressed = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use keyphrase_codecs::{BitcoinWif, FormatCodec, KeyFormat, NetworkKind};
use serde::{Deserialize, Serialize};

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "keyphrase";

/// Format used when neither the command line nor the config names one
pub const DEFAULT_FORMAT: KeyFormat = KeyFormat::Bitcoin;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default wordlist file
    pub wordlist: Option<PathBuf>,

    /// Default key format
    pub format: Option<KeyFormat>,

    /// Settings for restoring Bitcoin WIF keys
    pub bitcoin: BitcoinConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BitcoinConfig {
    pub network: WifNetwork,
    pub compressed: bool,
}

impl Default for BitcoinConfig {
    fn default() -> Self {
        Self {
            network: WifNetwork::Main,
            compressed: true,
        }
    }
}

/// Serializable network kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WifNetwork {
    #[default]
    Main,
    /// Testnet, signet and regtest share one WIF prefix
    Test,
}

impl From<WifNetwork> for NetworkKind {
    fn from(network: WifNetwork) -> Self {
        match network {
            WifNetwork::Main => NetworkKind::Main,
            WifNetwork::Test => NetworkKind::Test,
        }
    }
}

impl Config {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
        }
        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the default
    /// location is tried and a missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    tracing::debug!("No config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config: Config = toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: Some(path.clone()),
            message: e.to_string(),
        })?;

        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Format to use, preferring the command-line choice
    pub fn resolve_format(&self, flag: Option<KeyFormat>) -> KeyFormat {
        flag.or(self.format).unwrap_or(DEFAULT_FORMAT)
    }

    /// Wordlist path to use, preferring the command-line choice
    pub fn resolve_wordlist(&self, flag: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
        flag.or_else(|| self.wordlist.clone())
            .ok_or(ConfigError::NoWordlist)
    }

    /// Adapter for `format` carrying the configured settings
    pub fn codec(&self, format: KeyFormat) -> FormatCodec {
        match format {
            KeyFormat::Bitcoin => FormatCodec::Bitcoin(BitcoinWif::new(
                self.bitcoin.network.into(),
                self.bitcoin.compressed,
            )),
            other => other.codec(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config{}: {message}", describe(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("No wordlist given: pass --wordlist or set `wordlist` in the config file")]
    NoWordlist,
}

fn describe(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {p:?}"))
        .unwrap_or_default()
}
