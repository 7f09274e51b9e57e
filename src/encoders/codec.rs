use std::sync::OnceLock;

use crate::core::alphabet::Alphabet;
use crate::encoders::algorithms::chunked::{decode_chunked, encode_chunked};
use crate::encoders::algorithms::errors::CodecError;

static STANDARD: OnceLock<Codec> = OnceLock::new();

/// Base64 encoder and decoder bound to one alphabet.
///
/// Both directions read the same immutable [`Alphabet`], so the symbol table
/// and its reverse lookup are shared. A `Codec` holds no other state and can
/// be used from many threads at once.
///
/// # Example
///
/// ```
/// use sextet::Codec;
///
/// let codec = Codec::standard();
/// assert_eq!(codec.encode(b"Man"), "TWFu");
/// assert_eq!(codec.decode("TWE=").unwrap(), b"Ma");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    alphabet: Alphabet,
}

impl Codec {
    pub fn new(alphabet: Alphabet) -> Self {
        Codec { alphabet }
    }

    /// The process-wide codec over the standard alphabet, built on first use.
    pub fn standard() -> &'static Codec {
        STANDARD.get_or_init(|| Codec::new(Alphabet::standard()))
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encodes `data`, padding the final group with the pad symbol.
    ///
    /// Never fails. The output holds `4 * ceil(data.len() / 3)` symbols.
    pub fn encode(&self, data: &[u8]) -> String {
        encode_chunked(data, &self.alphabet)
    }

    /// Decodes `encoded` back into bytes.
    ///
    /// # Errors
    ///
    /// Returns an invalid-parameter error if the symbol count is not a
    /// multiple of 4, if a symbol is outside the alphabet, or if pad symbols
    /// appear anywhere but the tail of the final group. No partial output is
    /// returned.
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, CodecError> {
        decode_chunked(encoded, &self.alphabet)
    }
}
