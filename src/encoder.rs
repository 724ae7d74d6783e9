use std::str::FromStr;

use crate::core::alphabet::Alphabet;
use crate::core::config::EncodingMode;
use crate::encoders::algorithms::errors::{AlphabetError, Error};
use crate::encoders::{chunked, radix};

/// An alphabet bound to a conversion strategy.
///
/// Read-only after construction, so one instance can serve any number of
/// threads at once. Every call returns a freshly allocated buffer.
///
/// # Example
///
/// ```
/// use basex::{Encoder, EncodingMode};
///
/// let b64 = Encoder::new(
///     "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
///     EncodingMode::Bitwise,
/// )
/// .unwrap();
/// assert_eq!(b64.encode("foo").unwrap(), "Zm9v");
/// assert_eq!(b64.decode("Zm9v").unwrap(), b"foo");
/// ```
#[derive(Debug, Clone)]
pub struct Encoder {
    alphabet: Alphabet,
    mode: EncodingMode,
}

impl Encoder {
    /// Builds an encoder from a string of unique symbols.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidAlphabet`] for an empty, single-symbol or repeating
    /// alphabet. A bitwise alphabet whose size is not a power of two is
    /// accepted here and rejected with [`Error::InvalidMode`] on first use.
    pub fn new(alphabet: &str, mode: EncodingMode) -> Result<Self, Error> {
        Self::with_alphabet(Alphabet::from_str(alphabet)?, mode)
    }

    /// Builds an encoder around an already validated alphabet.
    pub fn with_alphabet(alphabet: Alphabet, mode: EncodingMode) -> Result<Self, Error> {
        if mode == EncodingMode::Bitwise && alphabet.contains(chunked::PADDING) {
            let pads = chunked::bits_per_symbol(alphabet.base())
                .ok()
                .and_then(chunked::padding_block)
                .is_some();
            if pads {
                return Err(AlphabetError::PaddingCollision {
                    symbol: chunked::PADDING,
                }
                .into());
            }
        }

        Ok(Encoder { alphabet, mode })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of symbols in the alphabet.
    pub fn base(&self) -> usize {
        self.alphabet.base()
    }

    pub fn mode(&self) -> EncodingMode {
        self.mode
    }

    /// Encodes bytes, or text as its UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidMode`] when a bitwise encoder has a non-power-of-two base.
    pub fn encode(&self, data: impl AsRef<[u8]>) -> Result<String, Error> {
        let data = data.as_ref();
        match self.mode {
            EncodingMode::Numeric => Ok(radix::encode(data, &self.alphabet)),
            EncodingMode::Bitwise => chunked::encode_chunked(data, &self.alphabet),
        }
    }

    /// Decodes text produced by [`Encoder::encode`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSymbol`] naming the first symbol outside the alphabet,
    /// or [`Error::InvalidMode`] as for `encode`.
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, Error> {
        match self.mode {
            EncodingMode::Numeric => radix::decode(encoded, &self.alphabet),
            EncodingMode::Bitwise => chunked::decode_chunked(encoded, &self.alphabet),
        }
    }

    /// Decodes raw input that must hold UTF-8 text.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] when `encoded` is not valid UTF-8, otherwise as
    /// for [`Encoder::decode`].
    pub fn decode_bytes(&self, encoded: &[u8]) -> Result<Vec<u8>, Error> {
        let text = std::str::from_utf8(encoded).map_err(|_| Error::TypeMismatch {
            expected: "UTF-8 text",
            found: "non-UTF-8 bytes",
        })?;
        self.decode(text)
    }

    /// Worst-case length, in UTF-8 bytes, of encoding `byte_count` bytes.
    ///
    /// Numeric mode assumes all-0xFF input plus one zero symbol per byte.
    /// Bitwise mode counts bit groups and padding.
    pub fn max_encoded_length(&self, byte_count: usize) -> usize {
        if byte_count == 0 {
            return 0;
        }

        let base = self.alphabet.base();
        let symbols = match self.mode {
            EncodingMode::Numeric => {
                let digits = (byte_count as f64 * 256f64.ln() / (base as f64).ln()).ceil();
                (digits as usize).saturating_add(byte_count)
            }
            EncodingMode::Bitwise => {
                // Floor of log2 overestimates for bases that cannot encode anyway
                chunked::encoded_symbols(byte_count, base.ilog2())
            }
        };

        symbols.saturating_mul(self.alphabet.max_symbol_width())
    }
}
