//! Padded base64 codec.
//!
//! Bytes are packed three at a time into a 24-bit accumulator and emitted as
//! four 6-bit segments, each mapped through a 64-symbol alphabet. A short
//! final group is closed with one or two pad symbols. Decoding reverses the
//! transform and drops the bytes the pad symbols stand for.
//!
//! # Example
//!
//! ```
//! let encoded = sextet::encode(b"Man");
//! assert_eq!(encoded, "TWFu");
//! assert_eq!(sextet::decode("TQ==").unwrap(), b"M");
//! ```

mod core;
mod encoders;

pub mod prelude;
pub mod text;

pub use crate::core::alphabet::{ALPHABET_SIZE, Alphabet, STANDARD_PADDING, STANDARD_SYMBOLS};
pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, DEFAULT_ALPHABET, Settings};
pub use crate::encoders::algorithms::chunked::{Padding, encoded_len};
pub use crate::encoders::algorithms::errors::{
    AlphabetError, CodecError, ConfigError, ErrorKind, TextError,
};
pub use crate::encoders::codec::Codec;

/// Encodes `data` with the standard alphabet.
pub fn encode(data: &[u8]) -> String {
    Codec::standard().encode(data)
}

/// Decodes `encoded` with the standard alphabet.
pub fn decode(encoded: &str) -> Result<Vec<u8>, CodecError> {
    Codec::standard().decode(encoded)
}
