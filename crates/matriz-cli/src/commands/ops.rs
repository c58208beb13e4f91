//! Binary arithmetic commands
//!
//! Each operand must parse to a well-formed matrix before the operation
//! runs; empty and ragged inputs are rejected up front.

use crate::error::{CliError, Result};
use matriz::Matrix;

/// Which combining operation to run
#[derive(Clone, Copy, Debug)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
}

/// Run a binary arithmetic command
pub(crate) fn run(op: BinaryOp, a: &str, b: &str) -> Result<()> {
    let lhs = parse_operand("first", a)?;
    let rhs = parse_operand("second", b)?;
    log::debug!("{op:?}: {:?} by {:?}", lhs.shape(), rhs.shape());

    let result = match op {
        BinaryOp::Add => lhs.add(&rhs)?,
        BinaryOp::Sub => lhs.sub(&rhs)?,
        BinaryOp::Mul => lhs.matmul(&rhs)?,
    };

    print!("{result}");
    Ok(())
}

fn parse_operand(which: &str, input: &str) -> Result<Matrix> {
    let matrix = Matrix::parse(input);
    if matrix.is_empty() {
        return Err(CliError::InvalidMatrix(format!(
            "{which} operand contains no row groups"
        )));
    }
    if matrix.is_ragged() {
        return Err(CliError::InvalidMatrix(format!(
            "{which} operand has rows of unequal length"
        )));
    }
    Ok(matrix)
}
