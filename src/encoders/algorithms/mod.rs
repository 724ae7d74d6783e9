pub mod chunked;
pub mod errors;
pub mod radix;

// Re-export error types for public API
pub use errors::{AlphabetError, AlphabetNotFoundError, Error, find_closest_alphabet};
