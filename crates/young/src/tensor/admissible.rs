//! Admissibility of one (parent shape, ordered addition vector) pair.
//!
//! | Rule | Rejects |
//! |------|---------|
//! | reserved rows | round `k` adding to any row `r < k` (for `k > 0` this includes row 0) |
//! | overflow | a row length past `u32::MAX` |
//! | partition | `candidate[i+1] > candidate[i]` |
//! | column clash | `candidate[i+1] > parent[i]`: two boxes of one round stacked in a column |
//!
//! The reserved-rows rule is stricter than reserving row 0 alone: round `k`
//! may only add to rows `k..n`, so a round never reaches above its own row.
//!
//! ```
//! use young::tensor::{admit, AdditionVector};
//! use young::Shape;
//!
//! let parent = Shape::new(vec![1, 0]).unwrap();
//! let v = AdditionVector::new(vec![0, 1]);
//! assert_eq!(admit(&parent, &v, 0).unwrap().rows(), &[1, 1]);
//! assert!(admit(&parent, &AdditionVector::new(vec![1, 0]), 1).is_none());
//! ```

use core::fmt;

use super::vector::AdditionVector;
use crate::shape::Shape;

/// Why a pair was not admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The vector and the parent have different lengths.
    LengthMismatch,
    /// The round adds boxes to a row it may no longer touch.
    ReservedRow {
        /// First reserved row that received boxes.
        row: usize,
    },
    /// A row length left the range of `u32`.
    Overflow {
        /// The row that overflowed.
        row: usize,
    },
    /// The candidate is not non-increasing.
    NotPartition {
        /// The row longer than the one above it.
        row: usize,
    },
    /// The candidate row reaches past the parent's row above it.
    ColumnClash {
        /// The offending row.
        row: usize,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch => f.write_str("length mismatch"),
            Self::ReservedRow { row } => write!(f, "row {row} is reserved this round"),
            Self::Overflow { row } => write!(f, "row {row} overflows"),
            Self::NotPartition { row } => write!(f, "row {row} exceeds the row above"),
            Self::ColumnClash { row } => write!(f, "row {row} stacks boxes in one column"),
        }
    }
}

/// Build the candidate `parent + vector` for round `round`, or say why not.
pub fn check(parent: &Shape, vector: &AdditionVector, round: usize) -> Result<Shape, Rejection> {
    let p = parent.rows();
    let v = vector.entries();
    if p.len() != v.len() {
        return Err(Rejection::LengthMismatch);
    }
    if let Some(row) = v.iter().take(round).position(|&e| e != 0) {
        return Err(Rejection::ReservedRow { row });
    }

    let mut candidate = Vec::with_capacity(p.len());
    for (row, (&base, &add)) in p.iter().zip(v).enumerate() {
        candidate.push(base.checked_add(add).ok_or(Rejection::Overflow { row })?);
    }
    for i in 1..candidate.len() {
        if candidate[i] > candidate[i - 1] {
            return Err(Rejection::NotPartition { row: i });
        }
        if candidate[i] > p[i - 1] {
            return Err(Rejection::ColumnClash { row: i });
        }
    }
    Ok(Shape::from_rows_unchecked(candidate))
}

/// [`check`], discarding the reason.
#[inline]
pub fn admit(parent: &Shape, vector: &AdditionVector, round: usize) -> Option<Shape> {
    check(parent, vector, round).ok()
}
