#[cfg(feature = "trace")]
use std::path::Path;

use clap::{Parser, Subcommand};

use boggle_cli::commands::check_ops::{self, CheckOptions};
use boggle_cli::commands::config_ops;
use boggle_cli::commands::solve_ops::{self, SolveOptions};
#[cfg(feature = "trace")]
use boggle_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "boggletool", about = "Boggle board solver and answer checker")]
struct Cli {
    /// Path to a custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write a JSON-lines trace into this directory
    #[cfg(feature = "trace")]
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every dictionary word found on a board
    Solve {
        /// Board letters, row-major; rows may be separated by spaces
        letters: String,
        /// Path to the dictionary (one word per line)
        #[arg(long)]
        dict: String,
        /// Board width (default: row length, or [board] settings)
        #[arg(long)]
        width: Option<usize>,
        /// Board height (default: row count, or [board] settings)
        #[arg(long)]
        height: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Solve a puzzle file and compare against its expected answers
    Check {
        /// Puzzle file: board, answers and dictionary sections
        file: String,
        /// Board width (default: row length, or [board] settings)
        #[arg(long)]
        width: Option<usize>,
        /// Board height (default: row count, or [board] settings)
        #[arg(long)]
        height: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show prefix-index statistics for a dictionary
    Info {
        /// Path to the dictionary (one word per line)
        #[arg(long)]
        dict: String,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to the settings file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "trace")]
    init_tracing(cli.trace_dir.as_deref().map(Path::new));
    if let Some(file) = &cli.settings {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Solve {
            letters,
            dict,
            width,
            height,
            json,
        } => {
            let opts = SolveOptions {
                width,
                height,
                json,
            };
            solve_ops::solve(&dict, &letters, &opts);
        }
        Command::Check {
            file,
            width,
            height,
            json,
        } => {
            let opts = CheckOptions {
                width,
                height,
                json,
            };
            check_ops::check(&file, &opts);
        }
        Command::Info { dict } => solve_ops::info(&dict),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
