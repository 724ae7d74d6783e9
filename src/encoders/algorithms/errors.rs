use std::fmt;

/// Errors raised while building an encoder or converting data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The alphabet cannot back an encoder.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(#[from] AlphabetError),
    /// Bitwise mode was requested for a base that is not a power of two.
    #[error("bitwise mode requires a power-of-two alphabet size, got {base}")]
    InvalidMode { base: usize },
    /// Decode input contains a symbol outside the alphabet.
    #[error("invalid character '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
    /// Input was not of the kind the operation accepts.
    #[error("expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// The specific reason an alphabet was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    #[error("alphabet cannot be empty")]
    Empty,
    #[error("alphabet must contain at least 2 characters, got {len}")]
    TooShort { len: usize },
    #[error("alphabet contains duplicate character '{symbol}' at positions {first} and {second}")]
    DuplicateSymbol {
        symbol: char,
        first: usize,
        second: usize,
    },
    #[error("padding character '{symbol}' cannot also be an alphabet symbol")]
    PaddingCollision { symbol: char },
}

impl Error {
    pub(crate) fn invalid_symbol(symbol: char, position: usize) -> Self {
        Error::InvalidSymbol { symbol, position }
    }
}

/// Check if colored output should be used
pub fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a named alphabet is not in the registry
#[derive(Debug)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if should_use_color() {
            writeln!(
                f,
                "\x1b[1;31merror:\x1b[0m alphabet '{}' not found",
                self.name
            )?;
        } else {
            writeln!(f, "error: alphabet '{}' not found", self.name)?;
        }

        if let Some(suggestion) = &self.suggestion {
            writeln!(f, "hint: did you mean '{}'?", suggestion)?;
        }

        write!(f, "      run `basex --list` to see all alphabets")
    }
}

impl std::error::Error for AlphabetNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();
    if s1.is_empty() {
        return len2;
    }
    if len2 == 0 {
        return s1.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    // 1-2 character typos for short names, up to 3 for longer ones
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
        .map(|(_, candidate)| candidate.clone())
}
