//! Base-N encoding with arbitrary alphabets.
//!
//! Two strategies share one [`Encoder`]:
//!
//! - [`EncodingMode::Numeric`] reads the input as one big-endian integer and
//!   rewrites it in the alphabet's radix. Any alphabet size works; leading
//!   zero bytes survive as leading zero symbols (base58 and friends).
//! - [`EncodingMode::Bitwise`] slices the input into fixed-width bit groups,
//!   RFC 4648 style, padding base64 and base32 output with `=`. Needs a
//!   power-of-two alphabet.
//!
//! # Example
//!
//! ```
//! use basex::{EncodingMode, decode, encode};
//!
//! let alphabet = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
//! let encoded = encode("Hello World!", alphabet, EncodingMode::Numeric).unwrap();
//! assert_eq!(encoded, "2NEpo7TZRRrLZSi2U");
//! assert_eq!(decode(&encoded, alphabet, EncodingMode::Numeric).unwrap(), b"Hello World!");
//! ```

mod core;
mod encoder;
mod encoders;

pub mod prelude;
pub mod presets;

pub use crate::core::alphabet::Alphabet;
pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, EncodingMode, Settings};
pub use encoder::Encoder;
pub use encoders::algorithms::{
    AlphabetError, AlphabetNotFoundError, Error, errors::should_use_color, find_closest_alphabet,
};
pub use encoders::chunked::PADDING;

/// Builds an encoder; same as [`Encoder::new`].
pub fn init(alphabet: &str, mode: EncodingMode) -> Result<Encoder, Error> {
    Encoder::new(alphabet, mode)
}

/// One-shot encode: builds an encoder for `alphabet` and encodes `data`.
pub fn encode(
    data: impl AsRef<[u8]>,
    alphabet: &str,
    mode: EncodingMode,
) -> Result<String, Error> {
    Encoder::new(alphabet, mode)?.encode(data)
}

/// One-shot decode: builds an encoder for `alphabet` and decodes `encoded`.
pub fn decode(encoded: &str, alphabet: &str, mode: EncodingMode) -> Result<Vec<u8>, Error> {
    Encoder::new(alphabet, mode)?.decode(encoded)
}
