//! Matriz: Parenthesised integer matrices in pure Rust.
//!
//! Matriz parses matrices from free-form text, validates their shape, and
//! provides elementwise and matrix arithmetic over `i64` entries.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! // Parse two matrices from row-group notation
//! let a = Matrix::parse("(1, 2), (3, 4)");
//! let b = Matrix::parse("(5, 6), (7, 8)");
//! assert!(a.is_valid() && b.is_valid());
//!
//! // Combine them
//! let sum = a.add(&b).unwrap();
//! let product = a.matmul(&b).unwrap();
//!
//! // Render in the same row-group notation
//! assert_eq!(sum.to_string(), "(6 8)\n(10 12)\n");
//! assert_eq!(product.to_string(), "(19 22)\n(43 50)\n");
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: The core Matrix type
//! - [`error`]: Error types for dimension and index failures

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{MatrizError, Result};
pub use primitives::Matrix;
