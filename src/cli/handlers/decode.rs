use crate::cli::{
    args::DecodeArgs,
    commands::{read_input, resolve_codec, write_output},
};
use sextet::{AlphabetRegistry, text::from_code_unit_bytes};

pub fn handle(
    args: DecodeArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = resolve_codec(config, args.alphabet.as_deref())?;
    let input_data = read_input(args.file.as_deref())?;

    let input_str =
        String::from_utf8(input_data).map_err(|_| "Input must be valid UTF-8 for decoding")?;
    let decoded = codec.decode(input_str.trim())?;

    if args.utf16 {
        let text = from_code_unit_bytes(&decoded)?;
        write_output(args.output.as_deref(), text.as_bytes())
    } else {
        write_output(args.output.as_deref(), &decoded)
    }
}
