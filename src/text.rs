//! Routing text through the byte codec as UTF-16 code units.
//!
//! Each code unit becomes two little-endian bytes. These helpers sit outside
//! the codec: they only fix the byte layout, and round trips are exact only
//! for bytes produced by [`to_code_unit_bytes`].

use crate::encoders::algorithms::errors::TextError;

/// Splits every UTF-16 code unit of `text` into two little-endian bytes.
pub fn to_code_unit_bytes(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Rebuilds text from little-endian UTF-16 code-unit bytes.
///
/// # Errors
///
/// Returns [`TextError::OddLength`] if `bytes` cannot be split into whole
/// code units, and [`TextError::InvalidUtf16`] for unpaired surrogates.
pub fn from_code_unit_bytes(bytes: &[u8]) -> Result<String, TextError> {
    if bytes.len() % 2 != 0 {
        return Err(TextError::OddLength { len: bytes.len() });
    }

    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    String::from_utf16(&units).map_err(|_| TextError::InvalidUtf16)
}
