use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Alphabet to encode with (defaults to the configured default)
    #[arg(short = 'a', long)]
    pub alphabet: Option<String>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Treat input as text and encode its UTF-16 code units
    #[arg(long)]
    pub utf16: bool,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Alphabet to decode from (defaults to the configured default)
    #[arg(short = 'a', long)]
    pub alphabet: Option<String>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Render decoded bytes as UTF-16 code units
    #[arg(long)]
    pub utf16: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List configured alphabets
    List,
    /// Show the symbols and padding of one alphabet
    Show {
        /// Alphabet name
        alphabet: String,
    },
}
