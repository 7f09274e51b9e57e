use crate::cli::{
    args::EncodeArgs,
    commands::{read_input, resolve_codec, write_output},
};
use sextet::{AlphabetRegistry, text::to_code_unit_bytes};

pub fn handle(
    args: EncodeArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = resolve_codec(config, args.alphabet.as_deref())?;
    let input_data = read_input(args.file.as_deref())?;

    let data = if args.utf16 {
        let text = String::from_utf8(input_data)
            .map_err(|_| "Input must be valid UTF-8 when using --utf16")?;
        to_code_unit_bytes(&text)
    } else {
        input_data
    };

    let mut encoded = codec.encode(&data);
    encoded.push('\n');
    write_output(args.output.as_deref(), encoded.as_bytes())
}
