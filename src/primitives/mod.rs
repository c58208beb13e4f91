//! Core compute primitive (Matrix).
//!
//! The single entity of the library: an integer grid with a cached
//! validity flag.

mod matrix;

pub use matrix::Matrix;
