//! Show command implementation
//!
//! Parses a matrix and reports what came out, including inputs the
//! arithmetic commands would reject.

use crate::error::Result;
use crate::output;
use colored::Colorize;
use matriz::Matrix;

/// Run the show command
pub(crate) fn run(input: &str) -> Result<()> {
    let matrix = Matrix::parse(input);
    log::debug!("parsed {} rows from {} bytes", matrix.n_rows(), input.len());

    output::section("Matrix");
    let (rows, cols) = matrix.shape();
    output::kv("Shape", format!("{rows}x{cols}"));

    let status = if matrix.is_valid() {
        "valid".green().to_string()
    } else if matrix.is_empty() {
        "empty".yellow().to_string()
    } else {
        "ragged".red().to_string()
    };
    output::kv("Status", status);

    if !matrix.is_empty() {
        println!();
        print!("{matrix}");
    }

    Ok(())
}
