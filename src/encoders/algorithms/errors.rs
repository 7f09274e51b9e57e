use thiserror::Error;

/// Broad classes of codec failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller handed over malformed input.
    InvalidParameter,
    /// The codec reached a state its own arithmetic rules out. Not recoverable.
    InvalidState,
    /// The requested operation is not available.
    NotImplemented,
}

/// Errors that can occur while encoding or decoding.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Input is not made of whole 4-symbol groups
    #[error("invalid length: input is {actual} symbols, expected a multiple of 4")]
    InvalidLength { actual: usize },

    /// The input contains a symbol that is neither in the alphabet nor the pad symbol
    #[error("invalid character '{char}' at position {position}")]
    InvalidCharacter { char: char, position: usize },

    /// A pad symbol sits somewhere other than the tail of the final group
    #[error("invalid padding at position {position}")]
    InvalidPadding { position: usize },

    /// A padding count outside {0, 1, 2}
    #[error("internal state error: padding count {pads} is out of range")]
    InvalidState { pads: usize },

    #[error("{operation} is not implemented")]
    NotImplemented { operation: &'static str },
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::InvalidLength { .. }
            | CodecError::InvalidCharacter { .. }
            | CodecError::InvalidPadding { .. } => ErrorKind::InvalidParameter,
            CodecError::InvalidState { .. } => ErrorKind::InvalidState,
            CodecError::NotImplemented { .. } => ErrorKind::NotImplemented,
        }
    }
}

/// Errors raised while building an alphabet.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("alphabet must have exactly 64 symbols, got {actual}")]
    InvalidLength { actual: usize },

    #[error("symbol {0:?} is a control or whitespace character")]
    NonPrintableSymbol(char),

    #[error("duplicate symbol in alphabet: '{0}'")]
    DuplicateSymbol(char),

    #[error("padding symbol '{0}' is also an alphabet symbol")]
    PaddingInAlphabet(char),

    /// Padding given in configuration is not a single character
    #[error("padding must be a single character, got {0:?}")]
    InvalidPadding(String),
}

/// Errors raised while turning code-unit bytes back into text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TextError {
    #[error("code-unit buffer has odd length {len}")]
    OddLength { len: usize },

    #[error("code units are not valid UTF-16")]
    InvalidUtf16,
}

/// Errors raised while loading alphabet configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("alphabet '{name}' not found{}", did_you_mean(.suggestion))]
    AlphabetNotFound {
        name: String,
        suggestion: Option<String>,
    },

    #[error("alphabet '{name}' is invalid: {source}")]
    InvalidAlphabet {
        name: String,
        #[source]
        source: AlphabetError,
    },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(", did you mean '{name}'?"),
        None => String::new(),
    }
}
