//! wordprint CLI
//!
//! Converts hex fingerprints to PGP word list words for reading aloud, and
//! spoken words back to hex for verification.

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordprint_cli::{format_fingerprint, parse_fingerprint};
use wordprint_core::WordCodec;

#[derive(Parser, Debug)]
#[command(name = "wordprint")]
#[command(version, about = "Verbalize binary fingerprints with the PGP word list", long_about = None)]
struct Cli {
    /// Emit structured JSON log lines instead of the human-readable format
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a hex fingerprint (e.g. "aa:bb:cc") into words
    Encode {
        /// Hex pairs, with or without ':' separators
        fingerprint: String,
    },
    /// Convert words back into a colon-separated hex fingerprint
    Decode {
        /// Words in listening order; any casing
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn init_tracing(log_json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "wordprint=warn".into()),
    );
    if log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[allow(clippy::print_stdout)]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let codec = WordCodec::new();
    match cli.command {
        Command::Encode { fingerprint } => {
            let bytes = parse_fingerprint(&fingerprint)?;
            debug!(len = bytes.len(), "parsed fingerprint");
            println!("{}", codec.encode(&bytes).join(" "));
        }
        Command::Decode { words } => {
            let bytes = codec.decode(&words)?;
            debug!(len = bytes.len(), "decoded words");
            println!("{}", format_fingerprint(&bytes));
        }
    }
    Ok(())
}
