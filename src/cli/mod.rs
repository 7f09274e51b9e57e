mod args;
mod commands;
mod handlers;

use args::{ConfigAction, DecodeArgs, EncodeArgs};
use clap::{Parser, Subcommand};
use sextet::AlphabetRegistry;

#[derive(Parser)]
#[command(name = "sextet")]
#[command(version)]
#[command(about = "Encode and decode binary data as padded base64", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode bytes to base64 text
    Encode(EncodeArgs),
    /// Decode base64 text to bytes
    Decode(DecodeArgs),
    /// Inspect alphabet configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load alphabets configuration with user overrides
    let config = AlphabetRegistry::load_with_overrides()?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &config),
        Commands::Decode(args) => handlers::decode::handle(args, &config),
        Commands::Config { action } => handlers::config::handle(action, &config),
    }
}
