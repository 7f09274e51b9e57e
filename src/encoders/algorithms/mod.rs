pub mod chunked;
pub mod errors;

// Re-export error types for public API
pub use errors::{AlphabetError, CodecError, ConfigError, ErrorKind, TextError};
