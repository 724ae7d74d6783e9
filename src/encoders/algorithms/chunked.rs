use crate::core::alphabet::Alphabet;
use std::iter;

use super::errors::Error;

/// Pad symbol appended to base64- and base32-width output.
pub const PADDING: char = '=';

/// Bits carried by one symbol of a power-of-two alphabet.
pub fn bits_per_symbol(base: usize) -> Result<u32, Error> {
    if base.is_power_of_two() {
        Ok(base.trailing_zeros())
    } else {
        Err(Error::InvalidMode { base })
    }
}

/// Symbol-count multiple that padded output is rounded up to.
///
/// Only the RFC 4648 block widths pad: 24-bit blocks for base64, 40-bit
/// blocks for base32.
pub fn padding_block(bits_per_symbol: u32) -> Option<usize> {
    match bits_per_symbol {
        6 => Some(4),
        5 => Some(8),
        _ => None,
    }
}

/// Number of symbols (padding included) that `byte_count` bytes encode to.
pub fn encoded_symbols(byte_count: usize, bits_per_symbol: u32) -> usize {
    let symbols = byte_count
        .saturating_mul(8)
        .div_ceil(bits_per_symbol as usize);
    match padding_block(bits_per_symbol) {
        Some(block) => symbols.div_ceil(block) * block,
        None => symbols,
    }
}

pub fn encode_chunked(data: &[u8], alphabet: &Alphabet) -> Result<String, Error> {
    if data.is_empty() {
        return Ok(String::new());
    }

    let bits = bits_per_symbol(alphabet.base())?;
    let symbols = alphabet.chars();
    let mask = (1u64 << bits) - 1;

    let padded_len = encoded_symbols(data.len(), bits);
    let mut result = String::with_capacity(padded_len * alphabet.max_symbol_width());
    let mut written = 0;

    let mut bit_buffer = 0u64;
    let mut bits_in_buffer = 0u32;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | u64::from(byte);
        bits_in_buffer += 8;

        while bits_in_buffer >= bits {
            bits_in_buffer -= bits;
            let index = ((bit_buffer >> bits_in_buffer) & mask) as usize;
            result.push(symbols[index]);
            written += 1;
        }
        bit_buffer &= (1u64 << bits_in_buffer) - 1;
    }

    // Zero-fill the last group
    if bits_in_buffer > 0 {
        let index = ((bit_buffer << (bits - bits_in_buffer)) & mask) as usize;
        result.push(symbols[index]);
        written += 1;
    }

    result.extend(iter::repeat_n(PADDING, padded_len - written));
    Ok(result)
}

pub fn decode_chunked(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, Error> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let bits = bits_per_symbol(alphabet.base())?;

    // Any number of trailing pad symbols is accepted
    let payload = match padding_block(bits) {
        Some(_) => encoded.trim_end_matches(PADDING),
        None => encoded,
    };

    let mut result = Vec::with_capacity(payload.len() * bits as usize / 8);
    let mut bit_buffer = 0u64;
    let mut bits_in_buffer = 0u32;

    for (position, c) in payload.chars().enumerate() {
        let digit = alphabet
            .index_of(c)
            .ok_or_else(|| Error::invalid_symbol(c, position))?;

        bit_buffer = (bit_buffer << bits) | u64::from(digit);
        bits_in_buffer += bits;

        while bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push((bit_buffer >> bits_in_buffer) as u8);
        }
        bit_buffer &= (1u64 << bits_in_buffer) - 1;
    }

    // Leftover bits are the encoder's zero fill and are dropped unchecked
    Ok(result)
}
