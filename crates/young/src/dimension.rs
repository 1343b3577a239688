//! Dimension of the SU(n) irreducible representation labelled by a shape.
//!
//! Two formulas are provided:
//!
//! | Function | Formula | Arithmetic |
//! |----------|---------|------------|
//! | [`dimension`] | `Π_cells ((n - i) + j) / hook(i, j)` | `f64`, accumulated cell by cell |
//! | [`exact_dimension`] | `Π_{i<j} (r_i - r_j + j - i) / (j - i)` | `u128`, gcd-reduced, checked |
//!
//! They agree for every valid shape; the floating-point value can drift for
//! large shapes and is never rounded here.
//!
//! ```
//! use young::{dimension, exact_dimension, Shape};
//!
//! let adjoint = Shape::new(vec![2, 1, 0]).unwrap();
//! assert_eq!(exact_dimension(&adjoint), Some(8));
//! assert!((dimension(&adjoint).unwrap() - 8.0).abs() < 1e-9);
//! ```

use crate::error::{Error, Result};
use crate::hook::hook_length;
use crate::shape::Shape;

/// Hook-content product over every cell of `shape`, with `n = shape.row_count()`.
///
/// # Errors
///
/// [`Error::Arithmetic`] if a cell's hook length is zero or unavailable.
pub fn dimension(shape: &Shape) -> Result<f64> {
    let n = shape.row_count();
    let mut dim = 1.0f64;
    for (i, &len) in shape.rows().iter().enumerate() {
        for j in 0..len as usize {
            let hook = hook_length(shape, i, j)
                .filter(|&h| h > 0)
                .ok_or(Error::Arithmetic { row: i, col: j })?;
            dim *= ((n - i) + j) as f64 / f64::from(hook);
        }
    }
    Ok(dim)
}

/// Weyl dimension formula in exact integer arithmetic.
///
/// Returns `None` if an intermediate product overflows `u128`.
pub fn exact_dimension(shape: &Shape) -> Option<u128> {
    let rows = shape.rows();
    let mut num: u128 = 1;
    let mut den: u128 = 1;
    for i in 0..rows.len() {
        for j in i + 1..rows.len() {
            let gap = (j - i) as u128;
            num = num.checked_mul(u128::from(rows[i] - rows[j]) + gap)?;
            den = den.checked_mul(gap)?;
            let g = gcd(num, den);
            num /= g;
            den /= g;
        }
    }
    debug_assert_eq!(den, 1, "Weyl product must be integral");
    (den == 1).then_some(num)
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(rows: &[u32]) -> Shape {
        Shape::new(rows.to_vec()).unwrap()
    }

    fn assert_dim(rows: &[u32], expected: u128) {
        let s = shape(rows);
        let float = dimension(&s).unwrap();
        assert!(
            (float - expected as f64).abs() < 1e-6,
            "dimension({rows:?}) = {float}, expected {expected}"
        );
        assert_eq!(exact_dimension(&s), Some(expected), "exact {rows:?}");
    }

    #[test]
    fn two_row_staircase_is_doublet() {
        assert_dim(&[2, 1], 2);
    }

    #[test]
    fn single_box_in_one_row() {
        assert_dim(&[1], 1);
    }

    #[test]
    fn one_row_shapes_are_one_dimensional() {
        for len in 0..12 {
            assert_dim(&[len], 1);
        }
    }

    #[test]
    fn su2_spins() {
        assert_dim(&[1, 0], 2);
        assert_dim(&[2, 0], 3);
        assert_dim(&[1, 1], 1);
        assert_dim(&[4, 0], 5);
        assert_dim(&[3, 1], 3);
    }

    #[test]
    fn su3_multiplets() {
        assert_dim(&[1, 0, 0], 3);
        assert_dim(&[1, 1, 0], 3);
        assert_dim(&[2, 1, 0], 8);
        assert_dim(&[2, 2, 0], 6);
        assert_dim(&[3, 0, 0], 10);
        assert_dim(&[4, 2, 0], 27);
        assert_dim(&[2, 2, 2], 1);
    }

    #[test]
    fn su4_adjoint() {
        assert_dim(&[2, 1, 1, 0], 15);
    }

    #[test]
    fn full_columns_do_not_change_dimension() {
        let s = shape(&[5, 3, 2]);
        assert_eq!(exact_dimension(&s), exact_dimension(&s.reduced()));
    }

    #[test]
    fn empty_shape_is_trivial() {
        assert_dim(&[0, 0, 0], 1);
    }

    #[test]
    fn overflow_is_reported_as_none() {
        let s = shape(&[u32::MAX, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(exact_dimension(&s), None);
    }
}
