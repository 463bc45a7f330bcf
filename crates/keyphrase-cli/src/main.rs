//! keyphrase - write private keys as checksummed word phrases

use std::io;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keyphrase_cli::{commands, Cli, Config};

/// Log filter for a given `-v` count, used when RUST_LOG is unset
fn default_filter(verbose: u8) -> String {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("warn,keyphrase_cli={level},keyphrase_core={level},keyphrase_codecs={level}")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only words and keys
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(cli.verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::load(cli.config.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(cli.command, &config, &mut out)
}
