//! Matrix type for 2D integer data parsed from text.

use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D matrix of `i64` values with an explicit validity flag.
///
/// Rows are stored as parsed, so a matrix can hold a ragged grid (rows of
/// differing lengths). Raggedness is not an error: it is tracked by the
/// cached validity flag and queried through [`Matrix::is_valid`]. Arithmetic
/// uses wrapping 64-bit two's-complement operations, so overflow wraps
/// silently instead of panicking.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::parse("(1,2,3),(4,5,6)");
/// assert!(m.is_valid());
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix {
    rows: Vec<Vec<i64>>,
    valid: bool,
}

impl Matrix {
    /// Parses a matrix from its textual encoding.
    ///
    /// The grammar is a sequence of parenthesized groups, each holding a
    /// comma-or-whitespace-separated list of integers:
    ///
    /// ```text
    /// (1,2,3),(4,5,6)
    /// ```
    ///
    /// Characters outside parentheses are delimiters and are skipped, so the
    /// groups may be separated by anything. Parsing is lenient and never
    /// fails: a malformed integer token (including one that overflows `i64`)
    /// silently truncates the row it appears in, and scanning resumes at the
    /// next `(`. An input with zero groups yields a zero-row matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// let m = Matrix::parse("(1, -2) (3, 4)");
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m.get(1, 0), Some(3));
    ///
    /// // Ragged input is stored as parsed but flagged invalid.
    /// let ragged = Matrix::parse("(1,2),(3)");
    /// assert!(!ragged.is_valid());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut rows = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'(' {
                let (row, next) = scan_row(bytes, i + 1);
                rows.push(row);
                i = next;
            } else {
                i += 1;
            }
        }
        Self::from_rows(rows)
    }

    /// Creates a matrix directly from rows, computing the validity flag.
    ///
    /// Never fails: ragged rows are stored as given and flagged invalid.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Self {
        let valid = match rows.first() {
            Some(first) => rows.iter().all(|row| row.len() == first.len()),
            None => false,
        };
        Self { rows, valid }
    }

    /// Creates a matrix from a flat vector of data in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if `data.len()` doesn't
    /// equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<i64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{rows}x{cols} = {} elements", rows * cols),
                actual: format!("{} elements", data.len()),
            });
        }
        let grid = if cols == 0 {
            vec![Vec::new(); rows]
        } else {
            data.chunks(cols).map(<[i64]>::to_vec).collect()
        };
        Ok(Self::from_rows(grid))
    }

    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_rows(vec![vec![0; cols]; rows])
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut rows = vec![vec![0; n]; n];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 1;
        }
        Self::from_rows(rows)
    }

    /// Returns the shape as (rows, cols).
    ///
    /// For a ragged matrix the column count is the first row's length, the
    /// dimension the compatibility checks use; for an empty matrix it is 0.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the nominal number of columns (first-row length).
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns true iff at least one row exists and all rows share one length.
    ///
    /// Computed once at construction; O(1) here.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns true iff the matrix has zero rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns true iff rows exist and at least two differ in length.
    #[must_use]
    pub fn is_ragged(&self) -> bool {
        !self.rows.is_empty() && !self.valid
    }

    /// Gets element at (row, col), or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns a row as a slice, or `None` if out of bounds.
    #[must_use]
    pub fn row(&self, idx: usize) -> Option<&[i64]> {
        self.rows.get(idx).map(Vec::as_slice)
    }

    /// Returns a mutable handle to the element at (row, col).
    ///
    /// Writing through the handle mutates the stored value in place; the
    /// matrix shape cannot change through this accessor.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] if the coordinates fall
    /// outside the stored rows.
    pub fn at(&mut self, row: usize, col: usize) -> Result<&mut i64> {
        let (rows, cols) = self.shape();
        self.rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(MatrizError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            })
    }

    /// Sets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] if the coordinates fall
    /// outside the stored rows.
    pub fn set(&mut self, row: usize, col: usize, value: i64) -> Result<()> {
        *self.at(row, col)? = value;
        Ok(())
    }

    /// Adds another matrix element-wise (wrapping on overflow).
    ///
    /// Compatibility is checked against row counts and first-row lengths
    /// only; callers are expected to gate ragged operands on
    /// [`Matrix::is_valid`] first.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if row counts or first-row
    /// lengths differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        Ok(self.zip_with(other, i64::wrapping_add))
    }

    /// Subtracts another matrix element-wise (wrapping on overflow).
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if row counts or first-row
    /// lengths differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        Ok(self.zip_with(other, i64::wrapping_sub))
    }

    /// Matrix-matrix multiplication (wrapping on overflow).
    ///
    /// Standard triple-loop product: the result has `self.n_rows()` rows and
    /// `other.n_cols()` columns, with element `(i, j)` the sum over `k` of
    /// `self[i][k] * other[k][j]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if `self.n_cols()` differs
    /// from `other.n_rows()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// // [[1, 2],   [[5, 6],   [[19, 22],
    /// //  [3, 4]] ×  [7, 8]] =  [43, 50]]
    /// let a = Matrix::parse("(1,2),(3,4)");
    /// let b = Matrix::parse("(5,6),(7,8)");
    /// let c = a.matmul(&b).unwrap();
    /// assert_eq!(c.get(0, 0), Some(19));
    /// assert_eq!(c.get(1, 1), Some(50));
    /// ```
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.n_cols() != other.n_rows() {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("inner dimension {}", self.n_cols()),
                actual: format!("{} rows", other.n_rows()),
            });
        }

        let cols = other.n_cols();
        let mut rows = Vec::with_capacity(self.n_rows());
        for lhs_row in &self.rows {
            let mut out = Vec::with_capacity(cols);
            for j in 0..cols {
                let mut acc: i64 = 0;
                // The zip bounds k by the row's real length, so ragged
                // operands that pass the first-row check stay in bounds.
                for (a, rhs_row) in lhs_row.iter().zip(&other.rows) {
                    if let Some(b) = rhs_row.get(j) {
                        acc = acc.wrapping_add(a.wrapping_mul(*b));
                    }
                }
                out.push(acc);
            }
            rows.push(out);
        }
        Ok(Self::from_rows(rows))
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.n_rows() != other.n_rows() || self.n_cols() != other.n_cols() {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{}x{}", self.n_rows(), self.n_cols()),
                actual: format!("{}x{}", other.n_rows(), other.n_cols()),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, op: fn(i64, i64) -> i64) -> Self {
        let rows = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(lhs, rhs)| lhs.iter().zip(rhs).map(|(a, b)| op(*a, *b)).collect())
            .collect();
        Self::from_rows(rows)
    }
}

/// Renders one parenthesized, space-separated row per line:
///
/// ```text
/// (1 2 3)
/// (4 5 6)
/// ```
///
/// Output is space-separated while the parse grammar also accepts commas;
/// the asymmetry is part of the external contract. `Matrix::parse` of the
/// rendering round-trips any valid matrix.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            write!(f, "(")?;
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}

/// Scans one row starting just after its `(`.
///
/// Returns the collected integers and the byte index to resume the outer
/// scan from. Commas and whitespace separate tokens; `)` closes the row. A
/// malformed token ends the row at the offending byte, which is handed back
/// to the outer scan.
fn scan_row(bytes: &[u8], mut i: usize) -> (Vec<i64>, usize) {
    let mut row = Vec::new();
    loop {
        while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b',') {
            i += 1;
        }
        if i >= bytes.len() {
            // Unterminated group: keep what was collected.
            return (row, i);
        }
        if bytes[i] == b')' {
            return (row, i + 1);
        }

        let start = i;
        if bytes[i] == b'+' || bytes[i] == b'-' {
            i += 1;
        }
        let digits = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == digits {
            return (row, start);
        }
        // The token is ASCII sign + digits, so from_utf8 cannot fail; the
        // parse itself fails only on i64 overflow, which truncates the row.
        match std::str::from_utf8(&bytes[start..i])
            .ok()
            .and_then(|token| token.parse::<i64>().ok())
        {
            Some(value) => row.push(value),
            None => return (row, start),
        }
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
