use clap::{Parser, Subcommand};

mod commands;

use commands::{copy, generate, platform, random};
use toolbelt::console;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "toolbelt")]
#[command(version = VERSION)]
#[command(about = "Personal developer utilities")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a cryptographically secure random string
    #[command(visible_aliases = ["rand", "randomstring"])]
    Random(random::RandomArgs),
    /// Copy a file or directory
    Copy(copy::CopyArgs),
    /// Generate a config file from a built-in template
    Generate(generate::GenerateArgs),
    /// Show detected platform and architecture
    Platform(platform::PlatformArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let result = match &cli.command {
        None => {
            println!("...but the people who know their God shall be strong... — Daniel 11:32");
            Ok(())
        }
        Some(Commands::Random(args)) => random::run(args),
        Some(Commands::Copy(args)) => copy::run(args),
        Some(Commands::Generate(args)) => generate::run(args),
        Some(Commands::Platform(args)) => platform::run(args),
    };

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            if err.is_abort() {
                console::warn(&err.to_string());
            } else {
                console::error(&format!("Error: {}", err));
            }
            std::process::ExitCode::FAILURE
        }
    }
}
