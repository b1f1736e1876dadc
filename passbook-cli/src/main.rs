//! Passbook CLI - a toy bank account in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

/// Passbook - a toy bank account in your terminal
#[derive(Parser)]
#[command(name = "pb", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted account demo
    Demo,

    /// Apply a sequence of operations to a fresh account
    Run {
        /// Opening balance for the account
        #[arg(long, default_value = "0")]
        initial: String,
        /// Operations to apply, e.g. deposit:500 withdraw:300
        #[arg(value_name = "OP", required = true)]
        operations: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Demo => commands::demo::run(),
        Commands::Run {
            initial,
            operations,
            json,
        } => commands::run::run(&initial, &operations, json),
    }
}
