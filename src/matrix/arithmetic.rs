//! Sparse-aware arithmetic over DOK matrices
//!
//! Every operator validates operand dimensions, allocates a fresh result,
//! and leaves both inputs untouched. Results are written through the element
//! setter, so entries that cancel to zero are never stored and sparsity is
//! preserved without a cleanup pass.
//!
//! Sums and products use the value type's own `+`, `-`, and `*`, so integer
//! overflow behaves as the primitive does: panicking in debug builds and
//! wrapping in release builds. The full `i64` range is otherwise usable.

use std::collections::{HashMap, HashSet};

use num_traits::Num;

use crate::error::{BinaryOp, Error, Result};
use crate::matrix::SparseMatrixDOK;

impl<T> SparseMatrixDOK<T>
where
    T: Copy + Num,
{
    /// Element-wise sum of two matrices with identical dimensions
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_shape(other, BinaryOp::Add)?;
        Ok(self.combine(other, |a, b| a + b))
    }

    /// Element-wise difference of two matrices with identical dimensions
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] if the shapes differ.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.ensure_same_shape(other, BinaryOp::Sub)?;
        Ok(self.combine(other, |a, b| a - b))
    }

    /// Matrix product `self × other`
    ///
    /// The algorithm walks only nonzero entries: `other`'s entries are
    /// indexed by row once, then each nonzero `(i, k)` of `self` accumulates
    /// against row `k` of `other`. Columns where `other` holds no entry are
    /// skipped since their products contribute nothing. Accumulation flows
    /// through the getter/setter pair, so a sum that cancels back to zero
    /// leaves no entry in the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] unless `self.n_cols == other.n_rows`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        tracing::debug!(
            lhs_rows = self.n_rows,
            lhs_cols = self.n_cols,
            rhs_rows = other.n_rows,
            rhs_cols = other.n_cols,
            "multiplying matrices"
        );

        if self.n_cols != other.n_rows {
            return Err(Error::dimension(
                BinaryOp::Mul,
                (self.n_rows, self.n_cols),
                (other.n_rows, other.n_cols),
            ));
        }

        // Index the right operand's nonzeros by row so the inner loop only
        // visits columns that can contribute
        let mut rows_of_other: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for ((row, col), &value) in other.iter() {
            rows_of_other
                .entry(row)
                .or_insert_with(Vec::new)
                .push((col, value));
        }

        let mut result = Self::new(self.n_rows, other.n_cols);
        for ((i, k), &a_val) in self.iter() {
            if let Some(row) = rows_of_other.get(&k) {
                for &(j, b_val) in row {
                    result.set(i, j, result.get(i, j) + a_val * b_val);
                }
            }
        }

        Ok(result)
    }

    fn ensure_same_shape(&self, other: &Self, op: BinaryOp) -> Result<()> {
        if self.n_rows != other.n_rows || self.n_cols != other.n_cols {
            return Err(Error::dimension(
                op,
                (self.n_rows, self.n_cols),
                (other.n_rows, other.n_cols),
            ));
        }
        Ok(())
    }

    /// Applies `op` over the union of both operands' coordinate sets
    ///
    /// Each key is visited exactly once, so iteration order over the union
    /// cannot affect the stored result.
    fn combine(&self, other: &Self, op: impl Fn(T, T) -> T) -> Self {
        let keys: HashSet<(usize, usize)> = self
            .iter()
            .map(|(coord, _)| coord)
            .chain(other.iter().map(|(coord, _)| coord))
            .collect();

        let mut result = Self::new(self.n_rows, self.n_cols);
        for (row, col) in keys {
            result.set(row, col, op(self.get(row, col), other.get(row, col)));
        }
        result
    }
}
