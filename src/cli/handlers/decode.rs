use crate::cli::config::read_input;
use basex::Encoder;
use std::io::{self, Write};
use std::path::Path;

pub fn handle(encoder: &Encoder, file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(file)?;

    // Encoded text usually arrives with a trailing newline
    let decoded = encoder.decode_bytes(input.trim_ascii())?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&decoded)?;
    stdout.flush()?;
    Ok(())
}
