// Matrix data structures and operations

pub mod arithmetic;
pub mod dok;

pub use dok::SparseMatrixDOK;
