use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::core::alphabet::{Alphabet, STANDARD_PADDING};
use crate::encoders::algorithms::errors::{AlphabetError, ConfigError};
use crate::encoders::codec::Codec;

/// Name used when configuration does not pick a default alphabet.
pub const DEFAULT_ALPHABET: &str = "base64";

/// Configuration for a single alphabet loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The 64 symbols, in value order
    pub chars: String,
    /// Pad symbol (a single character)
    #[serde(default = "default_padding")]
    pub padding: String,
}

fn default_padding() -> String {
    STANDARD_PADDING.to_string()
}

impl AlphabetConfig {
    /// Validates the configuration and builds the alphabet it describes.
    pub fn build(&self) -> Result<Alphabet, AlphabetError> {
        let mut padding = self.padding.chars();
        let pad = match (padding.next(), padding.next()) {
            (Some(pad), None) => pad,
            _ => return Err(AlphabetError::InvalidPadding(self.padding.clone())),
        };

        Alphabet::from_chars(&self.chars, pad)
    }
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Alphabet used when none is named explicitly
    #[serde(default)]
    pub default_alphabet: Option<String>,
}

/// Collection of alphabet configurations loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
    #[serde(default)]
    pub settings: Settings,
}

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the alphabets bundled with the library.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_toml(include_str!("../../alphabets.toml"))
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets (from library)
    /// 2. `~/.config/sextet/alphabets.toml` (user overrides)
    /// 3. `./alphabets.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching alphabet names.
    /// Override files that fail to load are logged and skipped.
    pub fn load_with_overrides() -> Result<Self, ConfigError> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            config.merge_file(&config_dir.join("sextet").join("alphabets.toml"));
        }
        config.merge_file(Path::new("alphabets.toml"));

        Ok(config)
    }

    fn merge_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }

        match Self::load_from_file(path) {
            Ok(overrides) => {
                log::debug!("loaded alphabet overrides from {}", path.display());
                self.merge(overrides);
            }
            Err(e) => {
                log::warn!("failed to load config from {}: {}", path.display(), e);
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` replace alphabets with the same name in `self`.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        self.alphabets.extend(other.alphabets);
        if other.settings.default_alphabet.is_some() {
            self.settings.default_alphabet = other.settings.default_alphabet;
        }
    }

    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    pub fn default_alphabet_name(&self) -> &str {
        self.settings
            .default_alphabet
            .as_deref()
            .unwrap_or(DEFAULT_ALPHABET)
    }

    /// Alphabet names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.alphabets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Builds a codec for the named alphabet.
    pub fn codec(&self, name: &str) -> Result<Codec, ConfigError> {
        let config = self
            .get_alphabet(name)
            .ok_or_else(|| ConfigError::AlphabetNotFound {
                name: name.to_string(),
                suggestion: find_closest_alphabet(name, &self.names()),
            })?;

        let alphabet = config.build().map_err(|source| ConfigError::InvalidAlphabet {
            name: name.to_string(),
            source,
        })?;

        Ok(Codec::new(alphabet))
    }
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name, if any is within a typo or two.
fn find_closest_alphabet(name: &str, available: &[&str]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), *candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string())
}
