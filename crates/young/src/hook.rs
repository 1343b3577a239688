//! Hook lengths.
//!
//! The hook of cell `(i, j)` is the cell itself, the cells to its right in
//! row `i`, and the cells below it in column `j`:
//!
//! ```text
//! [4, 2, 1]      hook table
//! □ □ □ □        6 4 2 1
//! □ □            3 1
//! □              1
//! ```
//!
//! ```
//! use young::{hook_length, hook_table, Shape};
//!
//! let s = Shape::new(vec![4, 2, 1]).unwrap();
//! assert_eq!(hook_length(&s, 0, 0), Some(6));
//! assert_eq!(hook_table(&s), vec![vec![6, 4, 2, 1], vec![3, 1], vec![1]]);
//! ```

use crate::shape::Shape;

/// Hook length of cell `(row, col)`.
///
/// Counts `r[row] - col` cells in the row (the cell and everything to its
/// right), plus the cells below it, scanning down while the next row still
/// reaches column `col`.
///
/// Returns `None` if `(row, col)` is not a cell of the shape.
pub fn hook_length(shape: &Shape, row: usize, col: usize) -> Option<u32> {
    let rows = shape.rows();
    let len = *rows.get(row)?;
    let col32 = u32::try_from(col).ok()?;
    if col32 >= len {
        return None;
    }
    let below = rows[row + 1..]
        .iter()
        .take_while(|&&r| r > col32)
        .count();
    Some((len - col32).saturating_add(below as u32))
}

/// Hook lengths of every cell, one inner vector per row.
pub fn hook_table(shape: &Shape) -> Vec<Vec<u32>> {
    shape
        .rows()
        .iter()
        .enumerate()
        .map(|(i, &len)| {
            (0..len as usize)
                .filter_map(|j| hook_length(shape, i, j))
                .collect()
        })
        .collect()
}
