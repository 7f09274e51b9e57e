use sextet::{AlphabetRegistry, Codec};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Builds the codec for `name`, or for the configured default alphabet.
pub fn resolve_codec(
    config: &AlphabetRegistry,
    name: Option<&str>,
) -> Result<Codec, Box<dyn std::error::Error>> {
    let name = name.unwrap_or_else(|| config.default_alphabet_name());
    log::debug!("using alphabet '{}'", name);
    Ok(config.codec(name)?)
}

/// Reads the whole input from a file, or from stdin when no file is given.
pub fn read_input(file: Option<&Path>) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Writes output to a file, or to stdout when no file is given.
pub fn write_output(
    output: Option<&Path>,
    data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, data)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
