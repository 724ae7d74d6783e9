//! Ready-made encoders for the common alphabets.
//!
//! Each preset is built once, on first use, and shared by the whole process.
//!
//! ```
//! use basex::presets::{B58, B64};
//!
//! assert_eq!(B64.encode("foo").unwrap(), "Zm9v");
//! assert_eq!(B58.encode("Hello World!").unwrap(), "2NEpo7TZRRrLZSi2U");
//! ```

use std::sync::LazyLock;

use crate::core::config::EncodingMode;
use crate::encoder::Encoder;

/// RFC 4648 base64.
pub const BASE64_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
/// RFC 4648 base32.
pub const BASE32_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
/// RFC 4648 base16, uppercase.
pub const BASE16_ALPHABET: &str = "0123456789ABCDEF";
/// Bitcoin base58: no `0`, `O`, `I` or `l`.
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
/// Base58 without `1`.
pub const BASE57_ALPHABET: &str = "23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
/// Base58 without `1` and `o`.
pub const BASE56_ALPHABET: &str = "23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz";

fn preset(alphabet: &'static str, mode: EncodingMode) -> Encoder {
    match Encoder::new(alphabet, mode) {
        Ok(encoder) => encoder,
        Err(e) => panic!("built-in alphabet rejected: {}", e),
    }
}

pub static B64: LazyLock<Encoder> =
    LazyLock::new(|| preset(BASE64_ALPHABET, EncodingMode::Bitwise));
pub static B32: LazyLock<Encoder> =
    LazyLock::new(|| preset(BASE32_ALPHABET, EncodingMode::Bitwise));
pub static B16: LazyLock<Encoder> =
    LazyLock::new(|| preset(BASE16_ALPHABET, EncodingMode::Bitwise));
pub static B58: LazyLock<Encoder> =
    LazyLock::new(|| preset(BASE58_ALPHABET, EncodingMode::Numeric));
pub static B57: LazyLock<Encoder> =
    LazyLock::new(|| preset(BASE57_ALPHABET, EncodingMode::Numeric));
pub static B56: LazyLock<Encoder> =
    LazyLock::new(|| preset(BASE56_ALPHABET, EncodingMode::Numeric));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AlphabetRegistry;

    #[test]
    fn test_presets() {
        assert_eq!(B64.encode("foo").unwrap(), "Zm9v");
        assert_eq!(B64.decode("Zm9v").unwrap(), b"foo");
        assert_eq!(B32.encode("foo").unwrap(), "MZXW6===");
        assert_eq!(B32.decode("MZXW6===").unwrap(), b"foo");
        assert_eq!(B16.encode("foo").unwrap(), "666F6F");
        assert_eq!(B16.decode("666F6F").unwrap(), b"foo");
        assert_eq!(B58.encode("Hello World!").unwrap(), "2NEpo7TZRRrLZSi2U");
        assert_eq!(B58.decode("2NEpo7TZRRrLZSi2U").unwrap(), b"Hello World!");
    }

    #[test]
    fn test_human_readable_variants() {
        assert_eq!(B57.encode("Hello World!").unwrap(), "3orqLftwyK9mqMwUd");
        assert_eq!(B57.encode("test").unwrap(), "5FziFy");
        assert_eq!(B56.encode("Hello World!").unwrap(), "4Q9SNpVv4JrdwvjKj");
        assert_eq!(B56.encode("test").unwrap(), "5YZjvE");
        assert_eq!(B57.decode("5FziFy").unwrap(), b"test");
        assert_eq!(B56.decode("5YZjvE").unwrap(), b"test");
    }

    #[test]
    fn test_registry_agrees_with_constants() {
        let registry = AlphabetRegistry::load_default().unwrap();
        let pairs = [
            ("base64", BASE64_ALPHABET, &*B64),
            ("base32", BASE32_ALPHABET, &*B32),
            ("base16", BASE16_ALPHABET, &*B16),
            ("base58", BASE58_ALPHABET, &*B58),
            ("base57", BASE57_ALPHABET, &*B57),
            ("base56", BASE56_ALPHABET, &*B56),
        ];
        for (name, chars, encoder) in pairs {
            let config = registry.get_alphabet(name).unwrap();
            assert_eq!(config.chars, chars, "{}", name);
            assert_eq!(config.effective_mode(), encoder.mode(), "{}", name);
        }
    }

    #[test]
    fn test_shared_across_threads() {
        let handles: Vec<_> = (0..4u8)
            .map(|i| {
                std::thread::spawn(move || {
                    let data = vec![i; 64];
                    let encoded = B58.encode(&data).unwrap();
                    assert_eq!(B58.decode(&encoded).unwrap(), data);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
