mod config;
mod handlers;

use basex::{AlphabetRegistry, EncodingMode};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "basex")]
#[command(version)]
#[command(about = "Encode and decode binary data with RFC 4648 and arbitrary base-N alphabets", long_about = None)]
pub struct Cli {
    /// Named alphabet to use (see --list)
    #[arg(short, long, value_name = "NAME")]
    pub alphabet: Option<String>,

    /// Use these characters as the alphabet instead of a named one
    #[arg(long, value_name = "CHARS", conflicts_with = "alphabet")]
    pub chars: Option<String>,

    /// Encoding mode for --chars: numeric (default) or bitwise
    #[arg(short, long, requires = "chars")]
    pub mode: Option<EncodingMode>,

    /// Decode instead of encode
    #[arg(short, long)]
    pub decode: bool,

    /// List available alphabets
    #[arg(short, long)]
    pub list: bool,

    /// Print the worst-case encoded size, in bytes, of this many input bytes
    #[arg(long, value_name = "BYTES")]
    pub max_length: Option<usize>,

    /// File to encode/decode (if not provided, reads from stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load alphabets configuration with user overrides
    let registry = AlphabetRegistry::load_with_overrides()?;

    if cli.list {
        handlers::list::handle(&registry);
        return Ok(());
    }

    let encoder = config::resolve_encoder(&cli, &registry)?;

    if let Some(byte_count) = cli.max_length {
        println!("{}", encoder.max_encoded_length(byte_count));
        return Ok(());
    }

    if cli.decode {
        handlers::decode::handle(&encoder, cli.file.as_deref())
    } else {
        handlers::encode::handle(&encoder, cli.file.as_deref())
    }
}
