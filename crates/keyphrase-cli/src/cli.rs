//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use keyphrase_codecs::KeyFormat;

#[derive(Debug, Parser)]
#[command(name = "keyphrase")]
#[command(about = "Write private keys as checksummed word phrases and read them back", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/keyphrase/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Wordlist and format selection shared by every subcommand
#[derive(Debug, Clone, Default, Args)]
pub struct CodecArgs {
    /// Key format (bitcoin, ethereum)
    #[arg(short, long)]
    pub format: Option<KeyFormat>,

    /// Wordlist file, one word per line
    #[arg(short, long)]
    pub wordlist: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Encode a private key as words
    Encode {
        /// Private key in the native format (read from stdin if omitted)
        key: Option<String>,

        #[command(flatten)]
        codec: CodecArgs,

        /// Write the words to this file, one per line
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode words back into the private key
    Decode {
        /// Phrase words (read from --input or stdin if omitted)
        words: Vec<String>,

        /// File holding the phrase
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        codec: CodecArgs,
    },

    /// Check a phrase's checksum without printing the key
    Verify {
        /// Phrase words (read from --input or stdin if omitted)
        words: Vec<String>,

        /// File holding the phrase
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        codec: CodecArgs,
    },

    /// Show how a wordlist fits a key format
    Inspect {
        #[command(flatten)]
        codec: CodecArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_encode() {
        let cli = Cli::try_parse_from([
            "keyphrase",
            "encode",
            "KxFC1jmwwCoACiCAWZ3eXa96mBM6tb3TYzGmf6YwgdGWZgawvrtJ",
            "--wordlist",
            "words.txt",
            "-o",
            "phrase.txt",
        ])
        .unwrap();

        match cli.command {
            Commands::Encode { key, codec, output } => {
                assert_eq!(
                    key.as_deref(),
                    Some("KxFC1jmwwCoACiCAWZ3eXa96mBM6tb3TYzGmf6YwgdGWZgawvrtJ")
                );
                assert_eq!(codec.wordlist, Some(PathBuf::from("words.txt")));
                assert_eq!(codec.format, None);
                assert_eq!(output, Some(PathBuf::from("phrase.txt")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_decode_with_globals() {
        let cli = Cli::try_parse_from([
            "keyphrase",
            "decode",
            "-f",
            "ethereum",
            "alpha",
            "beta",
            "--config",
            "custom.toml",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        match cli.command {
            Commands::Decode {
                words,
                input,
                codec,
            } => {
                assert_eq!(words, vec!["alpha", "beta"]);
                assert!(input.is_none());
                assert_eq!(codec.format, Some(KeyFormat::Ethereum));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = Cli::try_parse_from(["keyphrase", "inspect", "--format", "monero"]);
        assert!(result.is_err());
    }
}
