//! Property-based tests for shapes, dimensions and decompositions.
//!
//! Shapes are kept small (up to 4 rows of length at most 4) so that each
//! decomposition stays in the hundreds of candidates.

use proptest::prelude::*;
use young::{
    dimension, exact_dimension, hook_length, hook_table, tensor_product_decompose, Shape,
};

/// A shape with `n` rows, leading row at least `min_lead`.
fn shape_strategy(max_rows: usize, max_len: u32, min_lead: u32) -> impl Strategy<Value = Shape> {
    (1..=max_rows)
        .prop_flat_map(move |n| prop::collection::vec(0..=max_len, n))
        .prop_map(move |mut rows| {
            rows.sort_unstable_by(|a, b| b.cmp(a));
            rows[0] = rows[0].max(min_lead);
            Shape::new(rows).unwrap()
        })
}

/// Two shapes with the same row capacity, the second a single row of
/// `k` boxes.
fn pieri_pair() -> impl Strategy<Value = (Shape, Shape)> {
    (2usize..=4)
        .prop_flat_map(|n| (prop::collection::vec(0u32..=3, n), 0u32..=3, Just(n)))
        .prop_map(|(mut rows, k, n)| {
            rows.sort_unstable_by(|a, b| b.cmp(a));
            rows[0] = rows[0].max(1);
            let mut row = vec![0; n];
            row[0] = k;
            (Shape::new(rows).unwrap(), Shape::new(row).unwrap())
        })
}

/// Two shapes with the same row capacity, both with a non-empty first row.
fn general_pair() -> impl Strategy<Value = (Shape, Shape)> {
    (2usize..=3)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(0u32..=2, n),
                prop::collection::vec(0u32..=2, n),
            )
        })
        .prop_map(|(mut a, mut b)| {
            for rows in [&mut a, &mut b] {
                rows.sort_unstable_by(|x, y| y.cmp(x));
                rows[0] = rows[0].max(1);
            }
            (Shape::new(a).unwrap(), Shape::new(b).unwrap())
        })
}

// =============================================================================
// Hook lengths
// =============================================================================

proptest! {
    /// Every cell has a positive hook, and no hook exceeds the cells it can reach.
    #[test]
    fn prop_hooks_positive_and_bounded(s in shape_strategy(5, 6, 0)) {
        for (i, row) in hook_table(&s).iter().enumerate() {
            prop_assert_eq!(row.len(), s.row(i) as usize);
            for (j, &h) in row.iter().enumerate() {
                prop_assert!(h >= 1);
                prop_assert!(h <= (s.row(i) as usize - j + s.row_count() - i - 1) as u32);
            }
        }
    }

    /// The corner of the first row always has hook 1.
    #[test]
    fn prop_last_cell_of_first_row(s in shape_strategy(5, 6, 1)) {
        let last = s.row(0) as usize - 1;
        let below = s.rows()[1..].iter().filter(|&&r| r as usize > last).count() as u32;
        prop_assert_eq!(hook_length(&s, 0, last), Some(1 + below));
    }

    /// Cells outside the diagram have no hook.
    #[test]
    fn prop_no_hook_outside(s in shape_strategy(5, 6, 0)) {
        prop_assert_eq!(hook_length(&s, 0, s.row(0) as usize), None);
        prop_assert_eq!(hook_length(&s, s.row_count(), 0), None);
    }
}

// =============================================================================
// Dimensions
// =============================================================================

proptest! {
    /// The hook-content and Weyl formulas agree.
    #[test]
    fn prop_float_matches_exact(s in shape_strategy(5, 6, 0)) {
        let float = dimension(&s).unwrap();
        let exact = exact_dimension(&s).unwrap() as f64;
        prop_assert!((float - exact).abs() <= 1e-9 * exact.max(1.0), "{} vs {}", float, exact);
    }

    /// Full-height columns do not change the dimension.
    #[test]
    fn prop_reduction_preserves_dimension(s in shape_strategy(5, 6, 0)) {
        prop_assert_eq!(exact_dimension(&s), exact_dimension(&s.reduced()));
    }

    /// Dynkin labels round-trip through the reduced shape.
    #[test]
    fn prop_dynkin_labels_identify_reduced_shape(s in shape_strategy(5, 6, 0)) {
        let rebuilt = Shape::from_dynkin(&s.dynkin_labels());
        prop_assert_eq!(rebuilt, Some(s.reduced()));
    }
}

// =============================================================================
// Decompositions
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Pieri products conserve dimension exactly.
    #[test]
    fn prop_pieri_dimension_count((first, second) in pieri_pair()) {
        let product = tensor_product_decompose(&first, &second, false).unwrap();
        prop_assert_eq!(product.exact_total_dimension(), product.exact_expected_dimension());
        for irr in product.irreducibles() {
            prop_assert_eq!(irr.multiplicity, 1, "{}", irr.shape);
        }
    }

    /// Every term is a partition of all the boxes, in the operands' row capacity.
    /// Full-height columns of the second operand are singlets and are not placed.
    #[test]
    fn prop_terms_are_well_formed((first, second) in general_pair()) {
        let product = tensor_product_decompose(&first, &second, false).unwrap();
        let boxes = first.box_count() + second.reduced().box_count();
        for term in product.terms() {
            prop_assert_eq!(term.shape.row_count(), first.row_count());
            prop_assert_eq!(term.shape.box_count(), boxes);
            prop_assert!(Shape::new(term.shape.rows().to_vec()).is_ok());
            for (a, b) in term.shape.rows().iter().zip(first.rows()) {
                prop_assert!(a >= b, "{} does not contain {}", term.shape, first);
            }
        }
    }

    /// The placement rules never lose a Littlewood-Richardson term, so the
    /// dimension count is never short.
    #[test]
    fn prop_dimension_count_never_short((first, second) in general_pair()) {
        let product = tensor_product_decompose(&first, &second, false).unwrap();
        let total = product.exact_total_dimension().unwrap();
        let expected = product.exact_expected_dimension().unwrap();
        prop_assert!(total >= expected, "{} ⊗ {}: {} < {}", first, second, total, expected);
    }
}
