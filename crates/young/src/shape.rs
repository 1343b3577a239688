//! Shapes: partitions stored as a fixed number of row lengths.
//!
//! A [`Shape`] is a non-increasing sequence `r[0] >= r[1] >= ... >= r[n-1]`.
//! The number of rows `n` is part of the value: `[1, 0]` and `[1, 0, 0]` are
//! different shapes, because `n` is the row capacity the dimension formula
//! and the tensor product engine work in (the `n` of SU(n)).
//!
//! | Form | Meaning |
//! |------|---------|
//! | rows | `[2, 1, 0]`, row lengths top to bottom |
//! | reduced | full-height columns removed (`[2, 2, 1]` → `[1, 1, 0]`) |
//! | Dynkin labels | `a_i = r[i] - r[i+1]`, `n - 1` labels |
//!
//! # Examples
//!
//! ```
//! use young::Shape;
//!
//! let s: Shape = "2,1,0".parse().unwrap();
//! assert_eq!(s.rows(), &[2, 1, 0]);
//! assert_eq!(s.box_count(), 3);
//! assert_eq!(s.dynkin_labels(), vec![1, 1]);
//! assert_eq!(Shape::from_dynkin(&[1, 1]), Some(s));
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result, ShapeDefect};

/// Row lengths of a Young diagram with a fixed row capacity.
///
/// # Invariant
///
/// At least one row, and rows are non-increasing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u32>", into = "Vec<u32>")
)]
pub struct Shape {
    rows: Vec<u32>,
}

impl Shape {
    /// Validate and wrap a row sequence.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidShape`] if `rows` is empty or some row is longer than
    /// the one above it.
    pub fn new(rows: Vec<u32>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::invalid_shape(&rows, ShapeDefect::Empty));
        }
        if let Some(index) = first_increase(&rows) {
            return Err(Error::invalid_shape(&rows, ShapeDefect::Increasing { index }));
        }
        Ok(Self { rows })
    }

    /// Validate signed input, as received from a host runtime or a command line.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidShape`] for negative or out-of-range entries, and for
    /// everything [`Shape::new`] rejects.
    pub fn from_signed(values: &[i64]) -> Result<Self> {
        let mut rows = Vec::with_capacity(values.len());
        for (index, &value) in values.iter().enumerate() {
            if value < 0 {
                return Err(Error::invalid_shape(
                    values,
                    ShapeDefect::Negative { index, value },
                ));
            }
            let row = u32::try_from(value).map_err(|_| {
                Error::invalid_shape(values, ShapeDefect::OutOfRange { index, value })
            })?;
            rows.push(row);
        }
        Self::new(rows)
    }

    /// The shape with `n` empty rows.
    ///
    /// Returns `None` for `n == 0`.
    pub fn empty(n: usize) -> Option<Self> {
        (n > 0).then(|| Self { rows: vec![0; n] })
    }

    /// Shape with the given Dynkin labels: `labels.len() + 1` rows, last row zero.
    ///
    /// Returns `None` if the first row would exceed `u32::MAX`.
    pub fn from_dynkin(labels: &[u32]) -> Option<Self> {
        let mut rows = vec![0u32; labels.len() + 1];
        for i in (0..labels.len()).rev() {
            rows[i] = rows[i + 1].checked_add(labels[i])?;
        }
        Some(Self { rows })
    }

    /// Smallest row count holding both `self` and `other` with an empty last
    /// row.
    ///
    /// This is the longer row count, plus one if a shape of that length ends
    /// in a non-zero row: `[2, 1]` with `[1]` needs 3 rows, `[1, 0]` with
    /// `[1, 0]` needs 2.
    pub fn joint_row_count(&self, other: &Shape) -> usize {
        let n = self.row_count().max(other.row_count());
        if self.row(n - 1) != 0 || other.row(n - 1) != 0 {
            n + 1
        } else {
            n
        }
    }

    /// Wrap rows already known to be non-increasing.
    pub(crate) fn from_rows_unchecked(rows: Vec<u32>) -> Self {
        debug_assert!(!rows.is_empty() && first_increase(&rows).is_none());
        Self { rows }
    }

    /// Row lengths, top to bottom.
    #[inline]
    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    /// Length of row `i`, zero past the last row.
    #[inline]
    pub fn row(&self, i: usize) -> u32 {
        self.rows.get(i).copied().unwrap_or(0)
    }

    /// Row capacity `n`, including trailing zero rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of non-zero rows.
    pub fn depth(&self) -> usize {
        self.rows.iter().take_while(|&&r| r > 0).count()
    }

    /// Total number of boxes.
    pub fn box_count(&self) -> u64 {
        self.rows.iter().map(|&r| u64::from(r)).sum()
    }

    /// Length of the first row.
    #[inline]
    pub fn leading_row(&self) -> u32 {
        self.rows[0]
    }

    /// True if the first row is empty. Such shapes mark unused candidate slots.
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.leading_row() == 0
    }

    /// Extend with zero rows to a capacity of `n` rows, or drop trailing zero
    /// rows down to `n`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidShape`] if `n` is smaller than the number of non-zero
    /// rows, or zero.
    pub fn padded(&self, n: usize) -> Result<Self> {
        let needed = self.depth();
        if n < needed || n == 0 {
            return Err(Error::invalid_shape(
                &self.rows,
                ShapeDefect::TooFewRows {
                    needed: needed.max(1),
                    requested: n,
                },
            ));
        }
        let mut rows = self.rows.clone();
        rows.resize(n, 0);
        Ok(Self { rows })
    }

    /// Remove every column of full height `n`.
    ///
    /// Under SU(n) these columns are trivial, so a shape and its reduced form
    /// label the same irreducible representation.
    pub fn reduced(&self) -> Self {
        let floor = self.rows[self.rows.len() - 1];
        Self {
            rows: self.rows.iter().map(|&r| r - floor).collect(),
        }
    }

    /// Dynkin labels `r[i] - r[i+1]` for `i in 0..n-1`.
    pub fn dynkin_labels(&self) -> Vec<u32> {
        self.rows.windows(2).map(|w| w[0] - w[1]).collect()
    }
}

/// Index of the first row longer than its predecessor.
fn first_increase(rows: &[u32]) -> Option<usize> {
    rows.windows(2).position(|w| w[1] > w[0]).map(|i| i + 1)
}

impl TryFrom<Vec<u32>> for Shape {
    type Error = Error;

    fn try_from(rows: Vec<u32>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<Shape> for Vec<u32> {
    fn from(shape: Shape) -> Self {
        shape.rows
    }
}

impl AsRef<[u32]> for Shape {
    fn as_ref(&self) -> &[u32] {
        &self.rows
    }
}

impl FromStr for Shape {
    type Err = Error;

    /// Parse `"2,1,0"`, `"2 1 0"` or `"[2, 1, 0]"`.
    fn from_str(s: &str) -> Result<Self> {
        let inner = s.trim().trim_start_matches('[').trim_end_matches(']');
        let mut values = Vec::new();
        for (index, token) in inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .enumerate()
        {
            let value = token.parse::<i64>().map_err(|_| {
                Error::invalid_shape(
                    s,
                    ShapeDefect::Unparsable {
                        index,
                        token: token.to_string(),
                    },
                )
            })?;
            values.push(value);
        }
        Self::from_signed(&values)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, r) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{r}")?;
        }
        f.write_str("]")
    }
}
