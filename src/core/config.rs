use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::encoder::Encoder;
use crate::encoders::algorithms::errors::{AlphabetNotFoundError, find_closest_alphabet};

/// Conversion strategy between bytes and symbols.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum EncodingMode {
    /// Treats the input as one big-endian integer and converts it to the
    /// alphabet's radix. Works with any alphabet size.
    #[default]
    #[serde(alias = "radix", alias = "default")]
    Numeric,
    /// Fixed-width bit groups per RFC 4648, with `=` padding for base32 and
    /// base64 widths. Requires a power-of-two alphabet size.
    #[serde(alias = "rfc4648", alias = "chunked")]
    Bitwise,
}

impl EncodingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingMode::Numeric => "numeric",
            EncodingMode::Bitwise => "bitwise",
        }
    }
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "numeric" | "radix" | "default" => Ok(EncodingMode::Numeric),
            "bitwise" | "rfc4648" | "chunked" => Ok(EncodingMode::Bitwise),
            other => Err(format!(
                "unknown mode '{}', expected 'numeric' or 'bitwise'",
                other
            )),
        }
    }
}

/// Configuration for a single named alphabet loaded from TOML.
#[derive(Debug, Deserialize, Clone)]
pub struct AlphabetConfig {
    /// The symbols comprising the alphabet, in digit order
    pub chars: String,
    /// The encoding mode to use (auto-detected if not specified)
    #[serde(default)]
    pub mode: Option<EncodingMode>,
}

impl AlphabetConfig {
    /// Returns the effective encoding mode, auto-detecting if not explicitly set.
    ///
    /// Power-of-two alphabets default to bitwise, everything else to numeric.
    pub fn effective_mode(&self) -> EncodingMode {
        if let Some(mode) = self.mode {
            return mode;
        }

        let len = self.chars.chars().count();
        if len > 1 && len.is_power_of_two() {
            EncodingMode::Bitwise
        } else {
            EncodingMode::Numeric
        }
    }
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Alphabet used when the CLI is given neither `--alphabet` nor `--chars`
    #[serde(default)]
    pub default_alphabet: Option<String>,
}

/// Collection of named alphabets loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    pub alphabets: HashMap<String, AlphabetConfig>,
    #[serde(default)]
    pub settings: Settings,
}

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in alphabets bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets (from library)
    /// 2. `~/.config/basex/alphabets.toml` (user overrides)
    /// 3. `./alphabets.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching alphabet names.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            config.merge_file(&config_dir.join("basex").join("alphabets.toml"));
        }
        config.merge_file(Path::new("alphabets.toml"));

        Ok(config)
    }

    fn merge_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(overrides) => self.merge(overrides),
            Err(e) => {
                eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` override alphabets with the same name in `self`.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        self.alphabets.extend(other.alphabets);
        if other.settings.default_alphabet.is_some() {
            self.settings.default_alphabet = other.settings.default_alphabet;
        }
    }

    /// Retrieves an alphabet configuration by name.
    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Alphabet names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.alphabets.keys().cloned().collect();
        names.sort();
        names
    }

    /// Builds an encoder for a named alphabet.
    ///
    /// Unknown names fail with [`AlphabetNotFoundError`] carrying the closest
    /// known name, if any.
    pub fn encoder(&self, name: &str) -> Result<Encoder, Box<dyn std::error::Error>> {
        let config = self.get_alphabet(name).ok_or_else(|| {
            let suggestion = find_closest_alphabet(name, &self.names());
            AlphabetNotFoundError::new(name, suggestion)
        })?;

        Ok(Encoder::new(&config.chars, config.effective_mode())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(chars: &str, mode: Option<EncodingMode>) -> AlphabetConfig {
        AlphabetConfig {
            chars: chars.to_string(),
            mode,
        }
    }

    #[test]
    fn test_load_default_config() {
        let registry = AlphabetRegistry::load_default().unwrap();
        for name in ["base64", "base32", "base16", "base58", "base57", "base56"] {
            assert!(registry.alphabets.contains_key(name), "missing {}", name);
        }
    }

    #[test]
    fn test_base64_bitwise_mode() {
        let registry = AlphabetRegistry::load_default().unwrap();
        let base64 = registry.get_alphabet("base64").unwrap();
        assert_eq!(base64.effective_mode(), EncodingMode::Bitwise);
        assert_eq!(base64.chars.chars().count(), 64);
    }

    #[test]
    fn test_base64_numeric_variant() {
        let registry = AlphabetRegistry::load_default().unwrap();
        let base64_radix = registry.get_alphabet("base64_radix").unwrap();
        assert_eq!(base64_radix.effective_mode(), EncodingMode::Numeric);
    }

    #[test]
    fn test_auto_detection_power_of_two() {
        assert_eq!(config("ABCD", None).effective_mode(), EncodingMode::Bitwise);
        assert_eq!(config("ABC", None).effective_mode(), EncodingMode::Numeric);
    }

    #[test]
    fn test_explicit_mode_override() {
        assert_eq!(
            config("ABCD", Some(EncodingMode::Numeric)).effective_mode(),
            EncodingMode::Numeric
        );
    }

    #[test]
    fn test_merge_configs() {
        let mut config1 = AlphabetRegistry {
            alphabets: HashMap::new(),
            settings: Settings::default(),
        };
        config1
            .alphabets
            .insert("test1".to_string(), config("ABC", None));

        let mut config2 = AlphabetRegistry {
            alphabets: HashMap::new(),
            settings: Settings {
                default_alphabet: Some("test2".to_string()),
            },
        };
        config2
            .alphabets
            .insert("test2".to_string(), config("XYZ", None));
        config2
            .alphabets
            .insert("test1".to_string(), config("DEF", None));

        config1.merge(config2);

        assert_eq!(config1.alphabets.len(), 2);
        assert_eq!(config1.get_alphabet("test1").unwrap().chars, "DEF");
        assert_eq!(config1.get_alphabet("test2").unwrap().chars, "XYZ");
        assert_eq!(config1.settings.default_alphabet.as_deref(), Some("test2"));
    }

    #[test]
    fn test_load_from_toml_string() {
        let toml_content = r#"
[alphabets.custom]
chars = "0123456789"
mode = "radix"

[alphabets.quad]
chars = "ACGT"
mode = "rfc4648"
"#;
        let registry = AlphabetRegistry::from_toml(toml_content).unwrap();
        let custom = registry.get_alphabet("custom").unwrap();
        assert_eq!(custom.chars, "0123456789");
        assert_eq!(custom.mode, Some(EncodingMode::Numeric));
        assert_eq!(
            registry.get_alphabet("quad").unwrap().mode,
            Some(EncodingMode::Bitwise)
        );
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("numeric".parse(), Ok(EncodingMode::Numeric));
        assert_eq!("RFC4648".parse(), Ok(EncodingMode::Bitwise));
        assert!("base64".parse::<EncodingMode>().is_err());
    }

    #[test]
    fn test_encoder_lookup() {
        let registry = AlphabetRegistry::load_default().unwrap();
        let b58 = registry.encoder("base58").unwrap();
        assert_eq!(b58.encode("Hello World!").unwrap(), "2NEpo7TZRRrLZSi2U");

        let err = registry.encoder("bas58").unwrap_err();
        let not_found = err.downcast_ref::<AlphabetNotFoundError>().unwrap();
        assert_eq!(not_found.suggestion.as_deref(), Some("base58"));
    }
}
