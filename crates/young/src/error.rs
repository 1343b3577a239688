//! Error types for shape validation and decomposition.

use std::collections::TryReserveError;

use thiserror::Error;

/// Why a row sequence is not a shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeDefect {
    /// The sequence has no rows at all.
    #[error("shape has no rows")]
    Empty,

    /// A row length is negative.
    #[error("row {index} has negative length {value}")]
    Negative {
        /// Offending row.
        index: usize,
        /// The value supplied.
        value: i64,
    },

    /// A row length does not fit in `u32`.
    #[error("row {index} length {value} is out of range")]
    OutOfRange {
        /// Offending row.
        index: usize,
        /// The value supplied.
        value: i64,
    },

    /// A row is longer than the row above it.
    #[error("row {index} is longer than the row above it")]
    Increasing {
        /// The first row that exceeds its predecessor.
        index: usize,
    },

    /// Padding was asked to shrink the shape below its non-zero rows.
    #[error("{requested} rows cannot hold {needed} non-zero rows")]
    TooFewRows {
        /// Non-zero rows in the shape.
        needed: usize,
        /// Row capacity requested.
        requested: usize,
    },

    /// A row entry could not be parsed as an integer.
    #[error("cannot parse row {index}: {token:?}")]
    Unparsable {
        /// Position of the token.
        index: usize,
        /// The token text.
        token: String,
    },
}

/// Errors raised by the shape primitives and the tensor product engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The rows supplied do not form a partition.
    #[error("invalid shape {rows}: {defect}")]
    InvalidShape {
        /// The rows as supplied, rendered for the message.
        rows: String,
        /// What is wrong with them.
        defect: ShapeDefect,
    },

    /// The two operands do not share a row capacity.
    #[error("operands have {first} and {second} rows; pad them to the same row count")]
    RowCountMismatch {
        /// Rows in the first operand.
        first: usize,
        /// Rows in the second operand.
        second: usize,
    },

    /// A hook length of zero (or a cell outside the shape) reached the dimension formula.
    #[error("degenerate hook length at cell ({row}, {col})")]
    Arithmetic {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
    },

    /// The permutation search for one addition vector exceeds the configured bound.
    #[error("{rows} rows need {rows}! orderings per addition vector, above the limit of {limit}")]
    ComputationTooLarge {
        /// Row capacity of the operands.
        rows: usize,
        /// Configured `max_permutations`.
        limit: usize,
    },

    /// A working buffer could not be grown.
    #[error("failed to allocate decomposition buffers: {0}")]
    Allocation(#[from] TryReserveError),
}

impl Error {
    pub(crate) fn invalid_shape(rows: impl core::fmt::Debug, defect: ShapeDefect) -> Self {
        Self::InvalidShape {
            rows: format!("{rows:?}"),
            defect,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
