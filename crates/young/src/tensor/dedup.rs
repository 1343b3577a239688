//! Per-round candidate deduplication.

use std::collections::HashSet;

use crate::shape::Shape;

/// Keep the first occurrence of each shape, dropping placeholders.
///
/// A candidate survives only if no earlier candidate has the same rows and
/// its leading row is non-zero. Survivors keep their original order.
pub fn deduplicate(candidates: Vec<Shape>) -> Vec<Shape> {
    let mut seen = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|c| !c.is_placeholder() && seen.insert(c.clone()))
        .collect()
}
