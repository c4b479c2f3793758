mod app;
mod cli;
mod clock;
mod config;
mod display;
mod error;
mod logging;
mod models;
mod profile;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "moodtracker")]
#[command(about = "Record timestamped mood entries from an interactive menu", long_about = None)]
struct Cli {
    /// Run a menu option directly (1 = add entry, 2 = overview, 3 = customize)
    #[arg(short = 'm', value_name = "N", num_args = 0..=1, allow_negative_numbers = true)]
    menu: Option<Option<String>>,

    /// Path to config file (defaults to moodtracker.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize moodtracker.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Init { path } => cli::config::init(path.or(cli.config)),
        },
        None => cli::run::run(cli.config, cli.menu.into()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
