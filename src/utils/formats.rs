//! Utilities for converting between our matrix format and external libraries

use crate::matrix::SparseMatrixDOK;
use ndarray::Array2;
use num_traits::Num;
use sprs::{CsMat, TriMat};

/// Converts our DOK matrix format to sprs CsMat format (as CSR)
pub fn to_sprs<T>(matrix: &SparseMatrixDOK<T>) -> CsMat<T>
where
    T: Copy + Num,
{
    let mut triplets = TriMat::new((matrix.n_rows, matrix.n_cols));
    for ((row, col), &value) in matrix.iter() {
        triplets.add_triplet(row, col, value);
    }
    triplets.to_csr()
}

/// Converts a sprs CsMat (either storage order) to our DOK format
pub fn from_sprs<T>(matrix: &CsMat<T>) -> SparseMatrixDOK<T>
where
    T: Copy + Num,
{
    let mut result = SparseMatrixDOK::new(matrix.rows(), matrix.cols());
    for (&value, (row, col)) in matrix.iter() {
        result.set(row, col, value);
    }
    result
}

/// Converts our DOK matrix format to a dense ndarray Array2
pub fn to_dense<T>(matrix: &SparseMatrixDOK<T>) -> Array2<T>
where
    T: Copy + Num,
{
    let mut dense = Array2::zeros((matrix.n_rows, matrix.n_cols));
    for ((row, col), &value) in matrix.iter() {
        dense[[row, col]] = value;
    }
    dense
}

/// Converts a dense ndarray Array2 to our DOK format
///
/// Zero elements are skipped, so the result's stored entry count is the
/// number of nonzeros in the input.
pub fn from_dense<T>(dense: &Array2<T>) -> SparseMatrixDOK<T>
where
    T: Copy + Num,
{
    let (n_rows, n_cols) = dense.dim();
    let mut result = SparseMatrixDOK::new(n_rows, n_cols);
    for ((row, col), &value) in dense.indexed_iter() {
        if !value.is_zero() {
            result.set(row, col, value);
        }
    }
    result
}
