use crate::cli::config::read_input;
use basex::Encoder;
use std::path::Path;

pub fn handle(encoder: &Encoder, file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(file)?;
    let encoded = encoder.encode(&data)?;
    println!("{}", encoded);
    Ok(())
}
