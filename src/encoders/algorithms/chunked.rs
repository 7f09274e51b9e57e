use crate::core::alphabet::Alphabet;

pub use super::errors::CodecError;

/// Raw bytes per group.
pub const GROUP_BYTES: usize = 3;
/// Symbols per group.
pub const GROUP_SYMBOLS: usize = 4;

const SEGMENT_MASK: u32 = 0x3F;
const SEGMENT_SHIFTS: [u32; GROUP_SYMBOLS] = [18, 12, 6, 0];

/// How many pad symbols close the final group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    #[default]
    None,
    One,
    Two,
}

impl Padding {
    /// Padding needed to encode `len` bytes: the number of zero bytes that
    /// would round `len` up to a multiple of 3.
    pub fn for_input_len(len: usize) -> Self {
        match len % GROUP_BYTES {
            0 => Padding::None,
            1 => Padding::Two,
            _ => Padding::One,
        }
    }

    pub fn count(self) -> usize {
        match self {
            Padding::None => 0,
            Padding::One => 1,
            Padding::Two => 2,
        }
    }
}

impl TryFrom<usize> for Padding {
    type Error = CodecError;

    fn try_from(pads: usize) -> Result<Self, Self::Error> {
        match pads {
            0 => Ok(Padding::None),
            1 => Ok(Padding::One),
            2 => Ok(Padding::Two),
            _ => Err(CodecError::InvalidState { pads }),
        }
    }
}

/// Encoded length of `len` bytes: `4 * ceil(len / 3)`.
pub fn encoded_len(len: usize) -> usize {
    len.div_ceil(GROUP_BYTES) * GROUP_SYMBOLS
}

pub fn encode_chunked(data: &[u8], alphabet: &Alphabet) -> String {
    let padding = Padding::for_input_len(data.len());
    let mut result = String::with_capacity(encoded_len(data.len()));

    let chunks = data.chunks_exact(GROUP_BYTES);
    let remainder = chunks.remainder();

    for chunk in chunks {
        push_segments(&mut result, pack_group(chunk), Padding::None, alphabet);
    }

    // Only a short final group is padded
    if !remainder.is_empty() {
        push_segments(&mut result, pack_group(remainder), padding, alphabet);
    }

    result
}

/// Packs up to three bytes into a 24-bit accumulator, zero-filling missing
/// low bytes.
fn pack_group(chunk: &[u8]) -> u32 {
    let mut group = [0u8; GROUP_BYTES];
    group[..chunk.len()].copy_from_slice(chunk);
    (u32::from(group[0]) << 16) | (u32::from(group[1]) << 8) | u32::from(group[2])
}

/// Emits four symbols for a 24-bit accumulator. The trailing `padding`
/// segments were built from virtual zero bytes and are replaced by the pad
/// symbol.
fn push_segments(result: &mut String, accumulator: u32, padding: Padding, alphabet: &Alphabet) {
    let kept = GROUP_SYMBOLS - padding.count();

    for (index, shift) in SEGMENT_SHIFTS.into_iter().enumerate() {
        if index < kept {
            let segment = ((accumulator >> shift) & SEGMENT_MASK) as u8;
            result.push(alphabet.symbol(segment));
        } else {
            result.push(alphabet.padding());
        }
    }
}

pub fn decode_chunked(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, CodecError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    // Length is measured in symbols so multi-byte alphabets decode correctly
    let symbols: Vec<char> = encoded.chars().collect();
    if symbols.len() % GROUP_SYMBOLS != 0 {
        return Err(CodecError::InvalidLength {
            actual: symbols.len(),
        });
    }

    let padding = count_padding(&symbols, alphabet)?;
    let groups = symbols.len() / GROUP_SYMBOLS;
    log::trace!(
        "decoding {} groups with {} pad symbols",
        groups,
        padding.count()
    );

    let mut result = Vec::with_capacity(groups * GROUP_BYTES - padding.count());

    for (index, group) in symbols.chunks_exact(GROUP_SYMBOLS).enumerate() {
        let accumulator = unpack_group(group, index * GROUP_SYMBOLS, alphabet)?;
        let group_padding = if index + 1 == groups {
            padding
        } else {
            Padding::None
        };
        push_bytes(&mut result, accumulator, group_padding);
    }

    Ok(result)
}

/// Counts pad symbols across the whole input and checks they only close the
/// final group: at most two, and nothing but pad symbols after the first.
fn count_padding(symbols: &[char], alphabet: &Alphabet) -> Result<Padding, CodecError> {
    let Some(first) = symbols.iter().position(|&c| alphabet.is_padding(c)) else {
        return Ok(Padding::None);
    };

    let pads = symbols.iter().filter(|&&c| alphabet.is_padding(c)).count();
    let trailing = symbols.len() - first;

    if trailing > 2 || pads != trailing {
        return Err(CodecError::InvalidPadding { position: first });
    }

    Padding::try_from(pads)
}

/// Folds four symbols into a 24-bit accumulator, six bits at a time.
fn unpack_group(
    group: &[char],
    offset: usize,
    alphabet: &Alphabet,
) -> Result<u32, CodecError> {
    group
        .iter()
        .enumerate()
        .try_fold(0u32, |accumulator, (index, &c)| {
            let value = alphabet.value_of(c).ok_or(CodecError::InvalidCharacter {
                char: c,
                position: offset + index,
            })?;
            Ok((accumulator << 6) | u32::from(value))
        })
}

/// Emits the bytes of a 24-bit accumulator, dropping one per pad symbol.
fn push_bytes(result: &mut Vec<u8>, accumulator: u32, padding: Padding) {
    let bytes = [
        (accumulator >> 16) as u8,
        (accumulator >> 8) as u8,
        accumulator as u8,
    ];
    result.extend_from_slice(&bytes[..GROUP_BYTES - padding.count()]);
}
