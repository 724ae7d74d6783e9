use crate::core::alphabet::Alphabet;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use std::iter;

use super::errors::Error;

/// Largest radix `BigUint`'s built-in digit conversions accept.
const NATIVE_RADIX_LIMIT: usize = 256;

pub fn encode(data: &[u8], alphabet: &Alphabet) -> String {
    if data.is_empty() {
        return String::new();
    }

    let zero = alphabet.zero();
    let leading_zeros = data.iter().take_while(|&&b| b == 0).count();

    // All zeros: one zero symbol per byte, nothing left to convert
    if leading_zeros == data.len() {
        return iter::repeat_n(zero, data.len()).collect();
    }

    let num = BigUint::from_bytes_be(&data[leading_zeros..]);
    let digits = to_digits(num, alphabet.base());

    let symbols = alphabet.chars();
    let mut result =
        String::with_capacity((leading_zeros + digits.len()) * alphabet.max_symbol_width());
    result.extend(iter::repeat_n(zero, leading_zeros));
    result.extend(digits.into_iter().map(|d| symbols[d as usize]));
    result
}

pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, Error> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let digits = alphabet.digits(encoded)?;

    // Leading zero symbols map to zero bytes one for one. The rest starts with
    // a non-zero digit, so its minimal serialization never adds another zero.
    let leading_zeros = digits.iter().take_while(|&&d| d == 0).count();
    let significant = &digits[leading_zeros..];

    let mut result = vec![0u8; leading_zeros];
    if significant.is_empty() {
        return Ok(result);
    }

    let num = from_digits(significant, alphabet.base());
    result.extend_from_slice(&num.to_bytes_be());
    Ok(result)
}

/// Expands `num` into base-`base` digits, most significant first.
fn to_digits(num: BigUint, base: usize) -> Vec<u32> {
    if base <= NATIVE_RADIX_LIMIT {
        return num
            .to_radix_be(base as u32)
            .into_iter()
            .map(u32::from)
            .collect();
    }

    let base_big = BigUint::from(base);
    let mut num = num;
    let mut digits = Vec::new();
    while !num.is_zero() {
        let (quotient, remainder) = num.div_rem(&base_big);
        digits.push(remainder.to_u32_digits().first().copied().unwrap_or(0));
        num = quotient;
    }
    digits.reverse();
    digits
}

/// Folds base-`base` digits, most significant first, into one integer.
fn from_digits(digits: &[u32], base: usize) -> BigUint {
    if base <= NATIVE_RADIX_LIMIT {
        let narrow: Vec<u8> = digits.iter().map(|&d| d as u8).collect();
        if let Some(num) = BigUint::from_radix_be(&narrow, base as u32) {
            return num;
        }
    }

    let base_big = BigUint::from(base);
    let mut num = BigUint::zero();
    for &digit in digits {
        num *= &base_big;
        num += digit;
    }
    num
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const BASE58: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

    fn base58() -> Alphabet {
        Alphabet::from_str(BASE58).unwrap()
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode(b"", &base58()), "");
        assert_eq!(decode("", &base58()).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_vectors() {
        let alphabet = base58();
        let vectors: &[(&[u8], &str)] = &[
            (b"a", "2g"),
            (b"bbb", "a3gV"),
            (b"simply a long string", "2cFupjhnEsSn59qHXstmK2ffpLv2"),
            (b"Hello World!", "2NEpo7TZRRrLZSi2U"),
            (&[0x00, 0x00, 0x28, 0x7f, 0xb4, 0xcd], "11233QC4"),
            (&[0x51, 0x6b, 0x6f, 0xcd, 0x0f], "ABnLTmg"),
            (&[0x10, 0xc8, 0x51, 0x1e], "Rt5zm"),
            (
                &[
                    0x00, 0xeb, 0x15, 0x23, 0x1d, 0xfc, 0xeb, 0x60, 0x92, 0x58, 0x86, 0xb6, 0x7d,
                    0x06, 0x52, 0x99, 0x92, 0x59, 0x15, 0xae, 0xb1, 0x72, 0xc0, 0x66, 0x47,
                ],
                "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L",
            ),
        ];

        for (data, expected) in vectors {
            assert_eq!(encode(data, &alphabet), *expected);
            assert_eq!(decode(expected, &alphabet).unwrap(), *data);
        }
    }

    #[test]
    fn test_all_zero_input() {
        let alphabet = base58();
        assert_eq!(encode(&[0], &alphabet), "1");
        assert_eq!(encode(&[0; 10], &alphabet), "1111111111");
        assert_eq!(decode("1", &alphabet).unwrap(), vec![0]);
        assert_eq!(decode("1111111111", &alphabet).unwrap(), vec![0; 10]);
    }

    #[test]
    fn test_leading_zeros_preserved() {
        let alphabet = base58();
        let encoded = encode(&[0, 0, 3], &alphabet);
        assert_eq!(encoded, "114");
        assert_eq!(decode(&encoded, &alphabet).unwrap(), vec![0, 0, 3]);
    }

    #[test]
    fn test_large_base_uses_division_path() {
        // 300 symbols, all outside ASCII
        let chars: Vec<char> = (0x4E00u32..0x4E00 + 300)
            .filter_map(char::from_u32)
            .collect();
        let alphabet = Alphabet::new(chars).unwrap();

        let data = [0u8, 0xFF, 0x00, 0x12, 0x34, 0x56, 0x78, 0x9A];
        let encoded = encode(&data, &alphabet);
        assert!(encoded.starts_with(alphabet.zero()));
        assert_eq!(decode(&encoded, &alphabet).unwrap(), data);

        // 299 = one digit below the base
        assert_eq!(encode(&[0x01, 0x2B], &alphabet), alphabet.symbol(299).unwrap().to_string());
        assert_eq!(
            encode(&[0x01, 0x2C], &alphabet),
            [alphabet.symbol(1).unwrap(), alphabet.zero()]
                .iter()
                .collect::<String>()
        );
    }

    #[test]
    fn test_binary_alphabet() {
        let alphabet = Alphabet::from_str("01").unwrap();
        assert_eq!(encode(&[0b101], &alphabet), "101");
        assert_eq!(encode(&[0, 1], &alphabet), "01");
        assert_eq!(decode("01", &alphabet).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_invalid_symbol() {
        assert_eq!(
            decode("0OIl", &base58()).unwrap_err(),
            Error::InvalidSymbol {
                symbol: '0',
                position: 0
            }
        );
        assert_eq!(
            decode("2NEp0", &base58()).unwrap_err(),
            Error::InvalidSymbol {
                symbol: '0',
                position: 4
            }
        );
    }
}
