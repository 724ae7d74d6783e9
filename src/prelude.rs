//! Convenient re-exports for common usage.
//!
//! ```
//! use basex::prelude::*;
//!
//! let b16 = init("0123456789ABCDEF", EncodingMode::Bitwise).unwrap();
//! assert_eq!(b16.encode("foo").unwrap(), "666F6F");
//! assert_eq!(B58.decode("2g").unwrap(), b"a");
//! ```

pub use crate::{
    Alphabet,
    AlphabetRegistry,
    EncodingMode,

    // Core encoding/decoding
    Encoder,
    Error,
    decode,
    encode,
    init,

    // Shared instances
    presets::{B16, B32, B56, B57, B58, B64},
};
