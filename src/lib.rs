//! # dokmat: Dictionary-Of-Keys Sparse Matrices
//!
//! dokmat stores sparse integer matrices as a dictionary of keys (DOK): a
//! hash map from `(row, col)` coordinates to nonzero values. The layout
//! makes random reads and writes cheap, which suits matrices that are
//! assembled incrementally from coordinate data.
//!
//! ## Overview
//!
//! This library provides:
//!
//! - A DOK matrix type whose storage never holds explicit zeros
//! - Sparse-aware addition, subtraction, and multiplication
//! - A line-oriented coordinate-list text format, with strict parsing and
//!   deterministic writing
//! - Conversions to and from [`sprs`] and [`ndarray`] types
//!
//! ## Coordinate-list format
//!
//! Matrix files carry two header lines followed by one parenthesized
//! record per nonzero element:
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 0, 5)
//! (1, 2, -7)
//! ```
//!
//! Malformed input fails with a [`Error::Format`] naming the offending
//! line; nothing is loaded partially.
//!
//! ## Usage
//!
//! Building a matrix element by element:
//!
//! ```
//! use dokmat::SparseMatrixDOK;
//!
//! let mut m = SparseMatrixDOK::new(2, 2);
//! m.set(0, 0, 5i64);
//! m.set(1, 1, 3);
//!
//! assert_eq!(m.nnz(), 2);
//! assert_eq!(m.to_string(), "5 0\n0 3");
//! ```
//!
//! Parsing and multiplying:
//!
//! ```
//! use dokmat::CoordListIO;
//!
//! let a = CoordListIO::parse_str("rows=2\ncols=2\n(0, 0, 1)\n(0, 1, 2)\n(1, 1, 3)").unwrap();
//! let b = CoordListIO::parse_str("rows=2\ncols=2\n(0, 0, 4)\n(0, 1, 5)\n(1, 0, 6)\n(1, 1, 7)").unwrap();
//!
//! let product = a.multiply(&b).unwrap();
//! assert_eq!(product.to_string(), "16 19\n18 21");
//! ```

pub mod coordlist;
pub mod error;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use coordlist::CoordListIO;
pub use error::{BinaryOp, Error, Result};
pub use matrix::SparseMatrixDOK;
pub use utils::{from_dense, from_sprs, to_dense, to_sprs};

/// Version information for the dokmat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
