//! Subcommand handlers
//!
//! Handlers write results to the supplied writer and log progress through
//! `tracing`, so stdout only ever carries words or keys.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use keyphrase_codecs::FormatCodec;
use keyphrase_core::{bit_length, parse_phrase, save_words, Error as CodecError, Wordlist};
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::cli::{CodecArgs, Commands};
use crate::config::Config;

/// Wordlist and adapter resolved from flags and config
pub struct Session {
    pub wordlist: Wordlist,
    pub codec: FormatCodec,
}

impl Session {
    pub fn open(args: &CodecArgs, config: &Config) -> Result<Self> {
        let format = config.resolve_format(args.format);
        let path = config.resolve_wordlist(args.wordlist.clone())?;
        let wordlist = Wordlist::load(&path)
            .with_context(|| format!("Failed to load wordlist {}", path.display()))?;

        debug!(
            %format,
            wordlist = %path.display(),
            entries = wordlist.len(),
            "Resolved codec"
        );

        Ok(Self {
            wordlist,
            codec: config.codec(format),
        })
    }
}

/// Run one subcommand, writing its result to `out`
pub fn run(command: Commands, config: &Config, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Encode { key, codec, output } => {
            let session = Session::open(&codec, config)?;
            let key = match key {
                Some(key) => Zeroizing::new(key),
                None => read_key_from_stdin()?,
            };
            encode(&session, &key, output.as_deref(), out)
        }

        Commands::Decode {
            words,
            input,
            codec,
        } => {
            let session = Session::open(&codec, config)?;
            let words = collect_words(words, input.as_deref())?;
            decode(&session, &words, out)
        }

        Commands::Verify {
            words,
            input,
            codec,
        } => {
            let session = Session::open(&codec, config)?;
            let words = collect_words(words, input.as_deref())?;
            verify(&session, &words, out)
        }

        Commands::Inspect { codec } => {
            let session = Session::open(&codec, config)?;
            inspect(&session, out)
        }
    }
}

pub fn encode(
    session: &Session,
    key: &str,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let format = session.codec.format();
    let words = session
        .codec
        .encode(key, &session.wordlist)
        .with_context(|| format!("Failed to encode {format} key"))?;

    match output {
        Some(path) => {
            save_words(&words, path)?;
            info!("Wrote {} words to {}", words.len(), path.display());
        }
        None => writeln!(out, "{}", words.join(" "))?,
    }
    Ok(())
}

pub fn decode<S: AsRef<str>>(session: &Session, words: &[S], out: &mut impl Write) -> Result<()> {
    let format = session.codec.format();
    let key = Zeroizing::new(
        session
            .codec
            .decode(words, &session.wordlist)
            .with_context(|| format!("Failed to decode {format} key"))?,
    );
    writeln!(out, "{}", key.as_str())?;
    Ok(())
}

pub fn verify<S: AsRef<str>>(session: &Session, words: &[S], out: &mut impl Write) -> Result<()> {
    match session.codec.verify(words, &session.wordlist) {
        Ok(()) => {
            writeln!(out, "OK: {} words, checksum valid", words.len())?;
            Ok(())
        }
        Err(e) if e.is_transcription_error() => {
            Err(anyhow::Error::new(e).context("Phrase failed verification"))
        }
        Err(e) => Err(e.into()),
    }
}

pub fn inspect(session: &Session, out: &mut impl Write) -> Result<()> {
    let wordlist = &session.wordlist;
    let layout = session.codec.layout();

    let format = session.codec.format();
    writeln!(out, "Format:          {format} ({})", format.description())?;
    writeln!(out, "Wordlist size:   {}", wordlist.len())?;
    writeln!(out, "Bits per word:   {}", wordlist.bit_width())?;
    writeln!(
        out,
        "Payload:         {} bytes secret + {} bytes checksum = {} bits",
        layout.secret_len,
        layout.checksum_len,
        layout.total_bits()
    )?;

    match layout.word_count(wordlist) {
        Ok(count) => writeln!(out, "Phrase length:   {count} words")?,
        Err(CodecError::IncompatibleWordlist { .. }) => {
            writeln!(
                out,
                "Phrase length:   incompatible ({} bits not divisible by {})",
                layout.total_bits(),
                wordlist.bit_width()
            )?;
            let sizes: Vec<String> = compatible_bit_widths(layout.total_bits())
                .map(|bits| format!("{}", 1usize << bits))
                .collect();
            writeln!(out, "Compatible sizes (powers of two): {}", sizes.join(", "))?;
        }
        Err(e) => return Err(e.into()),
    }

    if !wordlist.len().is_power_of_two() {
        let unused = (1usize << bit_length(wordlist.len())) - wordlist.len();
        writeln!(
            out,
            "Note:            {unused} chunk values have no word; some keys cannot be encoded"
        )?;
    }
    Ok(())
}

/// Bit widths from 1 to 16 that divide `total_bits`
fn compatible_bit_widths(total_bits: usize) -> impl Iterator<Item = u32> {
    (1u32..=16).filter(move |bits| total_bits % *bits as usize == 0)
}

fn collect_words(words: Vec<String>, input: Option<&Path>) -> Result<Vec<String>> {
    if !words.is_empty() {
        // Accept a single quoted argument holding the whole phrase
        return Ok(words.iter().flat_map(|w| parse_phrase(w)).collect());
    }

    let text = match input {
        Some(path) => read_phrase_file(path)?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read phrase from stdin")?;
            text
        }
    };
    Ok(parse_phrase(&text))
}

fn read_phrase_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read phrase file {}", path.display()))
}

fn read_key_from_stdin() -> Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read key from stdin")?;
    let key = Zeroizing::new(line.trim().to_string());
    if key.is_empty() {
        anyhow::bail!("No key given on the command line or stdin");
    }
    Ok(key)
}
