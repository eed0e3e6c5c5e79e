//! Utility functions and helpers

pub mod formats;

pub use formats::{from_dense, from_sprs, to_dense, to_sprs};
