use std::collections::HashMap;
use std::str::FromStr;

use crate::encoders::algorithms::errors::{AlphabetError, Error};

/// An ordered set of unique symbols and the reverse lookup from symbol to digit.
///
/// ASCII symbols resolve through a flat table; anything wider goes through a
/// hash map. Immutable once built.
#[derive(Debug, Clone)]
pub struct Alphabet {
    chars: Vec<char>,
    ascii_index: [Option<u32>; 128],
    char_to_index: HashMap<char, u32>,
    max_width: usize,
}

impl Alphabet {
    /// Creates an alphabet from its symbols in digit order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAlphabet`] if the alphabet is empty, has fewer
    /// than two symbols, or repeats a symbol.
    pub fn new(chars: Vec<char>) -> Result<Self, Error> {
        if chars.is_empty() {
            return Err(AlphabetError::Empty.into());
        }
        if chars.len() < 2 {
            return Err(AlphabetError::TooShort { len: chars.len() }.into());
        }

        let mut ascii_index = [None; 128];
        let mut char_to_index = HashMap::new();
        let mut max_width = 0;

        for (i, &c) in chars.iter().enumerate() {
            let previous = if c.is_ascii() {
                ascii_index[c as usize].replace(i as u32)
            } else {
                char_to_index.insert(c, i as u32)
            };
            if let Some(first) = previous {
                return Err(AlphabetError::DuplicateSymbol {
                    symbol: c,
                    first: first as usize,
                    second: i,
                }
                .into());
            }
            max_width = max_width.max(c.len_utf8());
        }

        Ok(Alphabet {
            chars,
            ascii_index,
            char_to_index,
            max_width,
        })
    }

    /// Returns the base (radix) of the alphabet.
    pub fn base(&self) -> usize {
        self.chars.len()
    }

    /// Returns the symbols in digit order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The symbol for digit 0, used for leading-zero bytes.
    pub fn zero(&self) -> char {
        self.chars[0]
    }

    /// Encodes a digit (0 to base-1) as a symbol.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn symbol(&self, digit: usize) -> Option<char> {
        self.chars.get(digit).copied()
    }

    /// Decodes a symbol back to its digit value.
    ///
    /// Returns `None` if the symbol is not in the alphabet.
    #[inline]
    pub fn index_of(&self, c: char) -> Option<u32> {
        if c.is_ascii() {
            self.ascii_index[c as usize]
        } else {
            self.char_to_index.get(&c).copied()
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.index_of(c).is_some()
    }

    /// Widest UTF-8 serialization of any symbol, in bytes.
    pub fn max_symbol_width(&self) -> usize {
        self.max_width
    }

    /// UTF-8 width of the first symbol, in bytes.
    pub fn first_symbol_width(&self) -> usize {
        self.chars[0].len_utf8()
    }

    /// Maps every symbol of `encoded` to its digit, failing on the first
    /// symbol outside the alphabet.
    pub(crate) fn digits(&self, encoded: &str) -> Result<Vec<u32>, Error> {
        encoded
            .chars()
            .enumerate()
            .map(|(position, c)| {
                self.index_of(c)
                    .ok_or_else(|| Error::invalid_symbol(c, position))
            })
            .collect()
    }
}

/// Parses an alphabet from a string of symbols.
impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alphabet::new(s.chars().collect())
    }
}
