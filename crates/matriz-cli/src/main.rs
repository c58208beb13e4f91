//! matriz - Matrix text toolkit CLI
//!
//! Usage:
//!   matriz show "(1, 2), (3, 4)"                  # Parse and describe a matrix
//!   matriz add "(1, 2), (3, 4)" "(5, 6), (7, 8)"  # Elementwise sum
//!   matriz sub "(5, 6), (7, 8)" "(1, 2), (3, 4)"  # Elementwise difference
//!   matriz mul "(1, 2), (3, 4)" "(5, 6), (7, 8)"  # Matrix product

use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::process::ExitCode;

mod commands;
mod error;
mod output;

use commands::{ops, show};

/// matriz - Matrix text toolkit
///
/// Parse, validate, and combine integer matrices written in
/// row-group notation.
#[derive(Parser)]
#[command(name = "matriz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a matrix and report its shape, validity, and rendering
    Show {
        /// Matrix in row-group notation, e.g. "(1, 2), (3, 4)"
        #[arg(value_name = "MATRIX")]
        matrix: String,
    },

    /// Add two matrices elementwise
    Add {
        /// First operand
        #[arg(value_name = "A")]
        a: String,

        /// Second operand
        #[arg(value_name = "B")]
        b: String,
    },

    /// Subtract the second matrix from the first elementwise
    Sub {
        /// First operand
        #[arg(value_name = "A")]
        a: String,

        /// Second operand
        #[arg(value_name = "B")]
        b: String,
    },

    /// Multiply two matrices
    Mul {
        /// First operand
        #[arg(value_name = "A")]
        a: String,

        /// Second operand
        #[arg(value_name = "B")]
        b: String,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATRIZ_LOG", "error"))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { matrix } => show::run(&matrix),
        Commands::Add { a, b } => ops::run(ops::BinaryOp::Add, &a, &b),
        Commands::Sub { a, b } => ops::run(ops::BinaryOp::Sub, &a, &b),
        Commands::Mul { a, b } => ops::run(ops::BinaryOp::Mul, &a, &b),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
