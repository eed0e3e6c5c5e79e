//! Dictionary-of-keys (DOK) sparse matrix implementation

use std::collections::HashMap;
use std::fmt;

use num_traits::Num;

use crate::error::{Error, Result};

/// A sparse matrix in dictionary-of-keys (DOK) format
///
/// The DOK format stores a sparse matrix as a single hash map from
/// `(row, col)` coordinate pairs to values:
/// - only nonzero values are stored, so space is O(nnz)
/// - reads and writes are O(1) expected
/// - a coordinate that is absent from the map reads as zero
///
/// Writing zero to a coordinate removes its entry, so the map never holds a
/// zero value. That keeps arithmetic results sparse without a compaction
/// pass.
#[derive(Clone, PartialEq)]
pub struct SparseMatrixDOK<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Map from (row, col) to nonzero value
    entries: HashMap<(usize, usize), T>,
}

impl<T> SparseMatrixDOK<T>
where
    T: Copy + Num,
{
    /// Creates an empty matrix with the given dimensions
    ///
    /// # Arguments
    ///
    /// * `n_rows` - Number of rows
    /// * `n_cols` - Number of columns
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            entries: HashMap::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        for i in 0..n {
            matrix.set(i, i, T::one());
        }
        matrix
    }

    /// Creates a matrix from `(row, col, value)` triplets
    ///
    /// Every triplet is applied through [`set`](Self::set), so zero values
    /// are dropped and a later triplet overwrites an earlier one at the same
    /// coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if any coordinate lies outside the
    /// declared shape. This is stricter than the raw setter, which never
    /// validates.
    pub fn from_triplets(
        n_rows: usize,
        n_cols: usize,
        triplets: &[(usize, usize, T)],
    ) -> Result<Self> {
        let mut matrix = Self::new(n_rows, n_cols);
        for &(row, col, value) in triplets {
            if row >= n_rows || col >= n_cols {
                return Err(Error::argument(
                    "triplets",
                    format!(
                        "coordinate ({}, {}) outside declared shape {}x{}",
                        row, col, n_rows, n_cols
                    ),
                ));
            }
            matrix.set(row, col, value);
        }
        Ok(matrix)
    }

    /// Returns the value at `(row, col)`, or zero if no entry is stored
    ///
    /// This is a total function: out-of-range coordinates are simply absent
    /// from the map and read as zero.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.entries
            .get(&(row, col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Sets the value at `(row, col)`
    ///
    /// A nonzero value inserts or overwrites the entry; zero removes any
    /// existing entry (a no-op when the coordinate is already absent). The
    /// coordinate is not validated against the matrix dimensions.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Returns the number of nonzero entries in the matrix
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Returns an iterator over the nonzero entries
    ///
    /// Each item is a `((row, col), value)` pair. Iteration order is
    /// unspecified.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        self.entries.iter().map(|(&coord, value)| (coord, value))
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrixDOK<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixDOK {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        // Print a bounded, deterministically ordered sample of the entries
        let max_entries_to_print = 8.min(self.nnz());

        if max_entries_to_print > 0 {
            let mut sample: Vec<_> = self.iter().collect();
            sample.sort_unstable_by_key(|&(coord, _)| coord);

            writeln!(f, "  content sample:")?;
            for ((row, col), value) in sample.into_iter().take(max_entries_to_print) {
                writeln!(f, "    ({}, {}) = {:?}", row, col, value)?;
            }

            if self.nnz() > max_entries_to_print {
                writeln!(
                    f,
                    "    ... ({} more entries)",
                    self.nnz() - max_entries_to_print
                )?;
            }
        }

        write!(f, "}}")
    }
}

/// Dense row-major rendering
///
/// Produces `n_rows` lines of `n_cols` space-separated values, reading every
/// cell through [`get`](SparseMatrixDOK::get) so absent entries render as
/// zero. Lines are joined with `\n` and there is no trailing newline.
impl<T: Copy + Num + fmt::Display> fmt::Display for SparseMatrixDOK<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.n_rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.n_cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(row, col))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix_is_empty() {
        let matrix = SparseMatrixDOK::<i64>::new(3, 4);

        assert_eq!(matrix.n_rows, 3);
        assert_eq!(matrix.n_cols, 4);
        assert_eq!(matrix.nnz(), 0);
        assert_eq!(matrix.get(0, 0), 0);
        assert_eq!(matrix.get(2, 3), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut matrix = SparseMatrixDOK::new(2, 2);

        matrix.set(0, 1, 7);
        assert_eq!(matrix.get(0, 1), 7);
        assert_eq!(matrix.nnz(), 1);

        // Overwrite keeps a single entry
        matrix.set(0, 1, -2);
        assert_eq!(matrix.get(0, 1), -2);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_set_zero_removes_entry() {
        let mut matrix = SparseMatrixDOK::new(2, 2);

        matrix.set(1, 1, 5);
        assert_eq!(matrix.nnz(), 1);

        matrix.set(1, 1, 0);
        assert_eq!(matrix.nnz(), 0);
        assert_eq!(matrix.get(1, 1), 0);

        // Idempotent on an absent coordinate
        matrix.set(1, 1, 0);
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_get_out_of_range_is_zero() {
        let matrix = SparseMatrixDOK::<i64>::new(2, 2);
        assert_eq!(matrix.get(10, 10), 0);
    }

    #[test]
    fn test_identity() {
        let identity = SparseMatrixDOK::<i64>::identity(3);

        assert_eq!(identity.n_rows, 3);
        assert_eq!(identity.n_cols, 3);
        assert_eq!(identity.nnz(), 3);

        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(identity.get(i, j), if i == j { 1 } else { 0 });
            }
        }
    }

    #[test]
    fn test_from_triplets() {
        let matrix = SparseMatrixDOK::from_triplets(2, 2, &[(0, 0, 5), (1, 1, 3)]).unwrap();

        assert_eq!(matrix.nnz(), 2);
        assert_eq!(matrix.get(0, 0), 5);
        assert_eq!(matrix.get(1, 1), 3);
    }

    #[test]
    fn test_from_triplets_rejects_out_of_shape() {
        let result = SparseMatrixDOK::from_triplets(2, 2, &[(0, 0, 1), (2, 0, 1)]);
        assert!(matches!(result, Err(Error::Argument { .. })));
    }

    #[test]
    fn test_from_triplets_later_wins_and_drops_zero() {
        let matrix =
            SparseMatrixDOK::from_triplets(2, 2, &[(0, 0, 5), (0, 0, 9), (1, 0, 4), (1, 0, 0)])
                .unwrap();

        assert_eq!(matrix.get(0, 0), 9);
        assert_eq!(matrix.get(1, 0), 0);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_display_renders_dense() {
        let matrix = SparseMatrixDOK::from_triplets(2, 2, &[(0, 0, 5), (1, 1, 3)]).unwrap();
        assert_eq!(matrix.to_string(), "5 0\n0 3");
    }

    #[test]
    fn test_display_edge_shapes() {
        let empty = SparseMatrixDOK::<i64>::new(0, 4);
        assert_eq!(empty.to_string(), "");

        let no_cols = SparseMatrixDOK::<i64>::new(3, 0);
        assert_eq!(no_cols.to_string(), "\n\n");
    }
}
