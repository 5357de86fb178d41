//! CLI adapter.

mod categories;
mod form;
mod generate;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "sunogen")]
#[command(version)]
#[command(
    about = "Assemble structured Suno AI music prompts and translate them to English",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a prompt from category selections and a song description
    #[clap(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: generate::GenerateArgs,
    },
    /// List the creative categories and their options
    #[clap(visible_alias = "ls")]
    Categories {
        /// Show a single category (e.g. genre, vocal-style)
        category: Option<String>,
        /// Include per-option explanations
        #[arg(short, long)]
        explain: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { args } => generate::run_generate(args),
        Commands::Categories { category, explain } => {
            categories::run_categories(category.as_deref(), explain)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
