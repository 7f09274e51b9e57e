//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use sextet::prelude::*;
//!
//! let codec = Codec::standard();
//! let encoded = codec.encode(b"Ma");
//! assert_eq!(decode(&encoded).unwrap(), b"Ma");
//! ```

pub use crate::{
    Alphabet,
    AlphabetRegistry,
    Codec,
    CodecError,
    ErrorKind,

    // Core encoding/decoding
    decode,
    encode,

    // Text adaptation
    text::{from_code_unit_bytes, to_code_unit_bytes},
};
