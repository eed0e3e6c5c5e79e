//! Error types for dokmat

use thiserror::Error;

/// Result type alias using dokmat's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// The binary operator that was attempted when a dimension mismatch was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Element-wise addition
    Add,
    /// Element-wise subtraction
    Sub,
    /// Matrix multiplication
    Mul,
}

impl BinaryOp {
    /// The dimension-mismatch message for this operator
    ///
    /// Addition and subtraction require identical shapes; multiplication
    /// requires the left column count to equal the right row count.
    pub fn mismatch_message(&self) -> &'static str {
        match self {
            BinaryOp::Add => "Matrix dimensions must match for addition",
            BinaryOp::Sub => "Matrix dimensions must match for subtraction",
            BinaryOp::Mul => "Matrix dimensions must be compatible for multiplication",
        }
    }
}

/// Errors that can occur in dokmat operations
#[derive(Error, Debug)]
pub enum Error {
    /// Construction was invoked with unusable arguments
    #[error("Invalid argument '{arg}': {reason}")]
    Argument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Source text violates the coordinate-list header or record grammar
    #[error("Input file has wrong format (line {line}: {reason})")]
    Format {
        /// 1-based line number within the trimmed source text
        line: usize,
        /// What the line failed to satisfy
        reason: String,
    },

    /// Operand dimensions incompatible for the requested operator
    #[error("{} ({lhs_rows}x{lhs_cols} vs {rhs_rows}x{rhs_cols})", .op.mismatch_message())]
    Dimension {
        /// The operator that was attempted
        op: BinaryOp,
        /// Left operand row count
        lhs_rows: usize,
        /// Left operand column count
        lhs_cols: usize,
        /// Right operand row count
        rhs_rows: usize,
        /// Right operand column count
        rhs_cols: usize,
    },

    /// Underlying I/O failure while reading or writing a matrix file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an argument error
    pub(crate) fn argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::Argument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a format error for the given source line
    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            line,
            reason: reason.into(),
        }
    }

    /// Create a dimension mismatch error from both operand shapes
    pub(crate) fn dimension(op: BinaryOp, lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Self::Dimension {
            op,
            lhs_rows: lhs.0,
            lhs_cols: lhs.1,
            rhs_rows: rhs.0,
            rhs_cols: rhs.1,
        }
    }
}
