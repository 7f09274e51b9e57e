use crate::cli::args::ConfigAction;
use sextet::AlphabetRegistry;

pub fn handle(
    action: ConfigAction,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List => {
            let default = config.default_alphabet_name();
            for name in config.names() {
                let marker = if name == default { " (default)" } else { "" };
                println!("{}{}", name, marker);
            }
        }
        ConfigAction::Show { alphabet } => {
            let codec = config.codec(&alphabet)?;
            let symbols: String = codec.alphabet().symbols().iter().collect();
            println!("name:    {}", alphabet);
            println!("symbols: {}", symbols);
            println!("padding: {}", codec.alphabet().padding());
        }
    }
    Ok(())
}
