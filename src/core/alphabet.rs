use std::collections::{HashMap, HashSet};

use crate::encoders::algorithms::errors::AlphabetError;

/// Number of symbols every alphabet must carry (one per 6-bit value).
pub const ALPHABET_SIZE: usize = 64;

/// The RFC 4648 base64 symbol set.
pub const STANDARD_SYMBOLS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// The conventional pad symbol.
pub const STANDARD_PADDING: char = '=';

/// A 64-symbol alphabet together with its pad symbol and reverse lookup.
///
/// The reverse lookup is derived from the symbol list when the alphabet is
/// built, so the two tables can never drift apart. The pad symbol is part of
/// the lookup with value 0; it never contributes data bits, the codec
/// truncates the bytes it stands for.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    lookup: HashMap<char, u8>,
    padding: char,
}

impl Alphabet {
    /// Creates an alphabet from exactly 64 distinct symbols and a pad symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `symbols` does not hold exactly 64 characters
    /// - a symbol or the pad symbol is a control or whitespace character
    /// - a symbol appears twice
    /// - the pad symbol is also one of the 64 symbols
    pub fn new(symbols: Vec<char>, padding: char) -> Result<Self, AlphabetError> {
        validate(&symbols, padding)?;

        Ok(Alphabet {
            lookup: build_lookup(&symbols, padding),
            symbols,
            padding,
        })
    }

    /// Creates an alphabet from a string of symbols.
    pub fn from_chars(symbols: &str, padding: char) -> Result<Self, AlphabetError> {
        Self::new(symbols.chars().collect(), padding)
    }

    /// The standard base64 alphabet with `=` padding.
    pub fn standard() -> Self {
        let symbols: Vec<char> = STANDARD_SYMBOLS.chars().collect();

        Alphabet {
            lookup: build_lookup(&symbols, STANDARD_PADDING),
            symbols,
            padding: STANDARD_PADDING,
        }
    }

    /// Maps a 6-bit value to its symbol. Bits above the low six are ignored.
    pub fn symbol(&self, value: u8) -> char {
        self.symbols[usize::from(value & 0x3F)]
    }

    /// Maps a symbol back to its 6-bit value.
    ///
    /// The pad symbol maps to 0. Returns `None` for anything else outside the
    /// alphabet.
    pub fn value_of(&self, symbol: char) -> Option<u8> {
        self.lookup.get(&symbol).copied()
    }

    pub fn padding(&self) -> char {
        self.padding
    }

    pub fn is_padding(&self, symbol: char) -> bool {
        symbol == self.padding
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols && self.padding == other.padding
    }
}

impl Eq for Alphabet {}

fn is_printable(symbol: char) -> bool {
    !symbol.is_control() && !symbol.is_whitespace()
}

fn validate(symbols: &[char], padding: char) -> Result<(), AlphabetError> {
    if symbols.len() != ALPHABET_SIZE {
        return Err(AlphabetError::InvalidLength {
            actual: symbols.len(),
        });
    }

    if let Some(&symbol) = symbols
        .iter()
        .chain(std::iter::once(&padding))
        .find(|&&c| !is_printable(c))
    {
        return Err(AlphabetError::NonPrintableSymbol(symbol));
    }

    let mut seen = HashSet::with_capacity(ALPHABET_SIZE);
    for &symbol in symbols {
        if !seen.insert(symbol) {
            return Err(AlphabetError::DuplicateSymbol(symbol));
        }
    }

    if seen.contains(&padding) {
        return Err(AlphabetError::PaddingInAlphabet(padding));
    }

    Ok(())
}

/// Reverse lookup: each symbol to its index, the pad symbol to 0.
fn build_lookup(symbols: &[char], padding: char) -> HashMap<char, u8> {
    (0u8..)
        .zip(symbols.iter().copied())
        .map(|(value, symbol)| (symbol, value))
        .chain(std::iter::once((padding, 0)))
        .collect()
}
