use basex::{AlphabetRegistry, Encoder};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use super::Cli;

/// Picks the encoder from `--chars`, `--alphabet`, or the configured default.
pub fn resolve_encoder(
    cli: &Cli,
    registry: &AlphabetRegistry,
) -> Result<Encoder, Box<dyn std::error::Error>> {
    if let Some(chars) = &cli.chars {
        return Encoder::new(chars, cli.mode.unwrap_or_default()).map_err(|e| e.into());
    }

    let name = cli
        .alphabet
        .as_deref()
        .or(registry.settings.default_alphabet.as_deref())
        .ok_or("No alphabet given. Use --alphabet NAME or --chars CHARS.")?;

    registry.encoder(name)
}

/// Reads the whole input from a file, or stdin when no file is given.
pub fn read_input(file: Option<&Path>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}
