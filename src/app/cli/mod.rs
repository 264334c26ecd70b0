//! CLI Adapter.

mod components;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::app::logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "sdkc")]
#[command(version)]
#[command(about = "Inspect SDK components and their installation status", long_about = None)]
struct Cli {
    /// SDK installation root (defaults to current directory)
    #[arg(long, global = true, value_name = "PATH")]
    sdk_root: Option<PathBuf>,
    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Component catalog commands
    #[clap(visible_alias = "c")]
    Components {
        #[command(subcommand)]
        command: components::ComponentsCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<(), AppError> = sdk_root(cli.sdk_root).and_then(|root| match cli.command {
        Commands::Components { command } => components::run_components(&root, command),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn sdk_root(explicit: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(std::env::current_dir()?),
    }
}
