//! Addition vectors and their odometer enumeration.
//!
//! An addition vector says how many boxes one round adds to each row. The
//! [`Odometer`] walks non-increasing vectors in a fixed order; every
//! ordering of a vector is recovered afterwards by the permutation step, so
//! the odometer only has to visit one representative per multiset.
//!
//! ```text
//! n = 3:  000 100 110 111 200 210 211 220 221 222 300 ...
//! ```
//!
//! Step rule: if all entries are equal, increment the first and zero the
//! rest; otherwise increment the rightmost entry that is smaller than its
//! left neighbour and zero everything after it.

use core::fmt;

/// Boxes added to each row in one round.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdditionVector(Vec<u32>);

impl AdditionVector {
    /// Wrap raw entries. Any order is allowed.
    pub fn new(entries: Vec<u32>) -> Self {
        Self(entries)
    }

    /// The all-zero vector of length `n`.
    pub fn zero(n: usize) -> Self {
        Self(vec![0; n])
    }

    /// Entries, one per row.
    #[inline]
    pub fn entries(&self) -> &[u32] {
        &self.0
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the vector has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total boxes added.
    pub fn sum(&self) -> u64 {
        self.0.iter().map(|&e| u64::from(e)).sum()
    }

    /// True if every entry equals the first.
    pub fn is_uniform(&self) -> bool {
        self.0.windows(2).all(|w| w[0] == w[1])
    }

    /// Copy with entries `a` and `b` exchanged.
    pub(crate) fn swapped(&self, a: usize, b: usize) -> Self {
        let mut next = self.0.clone();
        next.swap(a, b);
        Self(next)
    }
}

impl From<Vec<u32>> for AdditionVector {
    fn from(entries: Vec<u32>) -> Self {
        Self(entries)
    }
}

impl fmt::Display for AdditionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Unbounded walk over the non-increasing vectors of length `n`, starting at zero.
///
/// Leading entries never decrease, and all vectors led by `k` are visited
/// before the first vector led by `k + 1`.
#[derive(Debug, Clone)]
pub struct Odometer {
    current: Option<Vec<u32>>,
}

impl Odometer {
    /// Start at the zero vector. A zero-length odometer yields nothing.
    pub fn new(n: usize) -> Self {
        Self {
            current: (n > 0).then(|| vec![0; n]),
        }
    }

    fn advance(v: &mut [u32]) -> bool {
        let descent = (1..v.len()).rev().find(|&i| v[i] < v[i - 1]);
        let pivot = descent.unwrap_or(0);
        match v[pivot].checked_add(1) {
            Some(next) => v[pivot] = next,
            None => return false,
        }
        v[pivot + 1..].iter_mut().for_each(|e| *e = 0);
        true
    }
}

impl Iterator for Odometer {
    type Item = AdditionVector;

    fn next(&mut self) -> Option<AdditionVector> {
        let v = self.current.as_mut()?;
        let out = AdditionVector(v.clone());
        if !Self::advance(v) {
            self.current = None;
        }
        Some(out)
    }
}

/// Every non-increasing vector of length `n` summing to `target`, in odometer order.
///
/// Stops once the leading entry exceeds `target`, so the walk is finite and
/// yields each partition of `target` into at most `n` parts exactly once.
#[derive(Debug, Clone)]
pub struct AdditionVectors {
    odometer: Odometer,
    target: u32,
}

impl AdditionVectors {
    /// Vectors of length `n` with entry sum `target`.
    pub fn new(n: usize, target: u32) -> Self {
        Self {
            odometer: Odometer::new(n),
            target,
        }
    }
}

impl Iterator for AdditionVectors {
    type Item = AdditionVector;

    fn next(&mut self) -> Option<AdditionVector> {
        loop {
            let v = self.odometer.next()?;
            if v.entries()[0] > self.target {
                self.odometer.current = None;
                return None;
            }
            if v.sum() == u64::from(self.target) {
                return Some(v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn entries(it: impl Iterator<Item = AdditionVector>) -> Vec<Vec<u32>> {
        it.map(|v| v.entries().to_vec()).collect()
    }

    #[test]
    fn odometer_opening_steps() {
        let steps = entries(Odometer::new(3).take(6));
        assert_eq!(
            steps,
            vec![
                vec![0, 0, 0],
                vec![1, 0, 0],
                vec![1, 1, 0],
                vec![1, 1, 1],
                vec![2, 0, 0],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn odometer_visits_every_bounded_vector_once() {
        // C(n + k, n) non-increasing vectors of length n with entries <= k.
        let (n, k) = (3usize, 2u32);
        let expected_count = 10;
        let visited = entries(Odometer::new(n).take(expected_count));
        let unique: HashSet<_> = visited.iter().cloned().collect();
        assert_eq!(unique.len(), expected_count);
        for v in &visited {
            assert!(v.iter().all(|&e| e <= k), "{v:?} exceeds bound");
            assert!(v.windows(2).all(|w| w[0] >= w[1]), "{v:?} not sorted");
        }
        assert!(visited.contains(&vec![2, 1, 1]));
        assert_eq!(Odometer::new(n).nth(expected_count).unwrap().entries(), &[3, 0, 0]);
    }

    #[test]
    fn odometer_never_repeats() {
        let visited = entries(Odometer::new(4).take(500));
        let unique: HashSet<_> = visited.iter().collect();
        assert_eq!(unique.len(), visited.len());
    }

    #[test]
    fn zero_length_odometer_is_empty() {
        assert_eq!(Odometer::new(0).count(), 0);
        assert_eq!(AdditionVectors::new(0, 3).count(), 0);
    }

    #[test]
    fn zero_target_yields_only_zero_vector() {
        assert_eq!(entries(AdditionVectors::new(3, 0)), vec![vec![0, 0, 0]]);
    }

    #[test]
    fn vectors_for_target_three_in_three_rows() {
        assert_eq!(
            entries(AdditionVectors::new(3, 3)),
            vec![vec![1, 1, 1], vec![2, 1, 0], vec![3, 0, 0]]
        );
    }

    #[test]
    fn vectors_are_partitions_of_target() {
        // Partitions of 4 into at most 3 parts: 4, 31, 22, 211.
        let found = entries(AdditionVectors::new(3, 4));
        assert_eq!(found.len(), 4);
        assert!(found.iter().all(|v| v.iter().sum::<u32>() == 4));
        assert!(found.contains(&vec![2, 1, 1]));
        assert!(found.contains(&vec![4, 0, 0]));
    }

    #[test]
    fn uniformity() {
        assert!(AdditionVector::new(vec![2, 2, 2]).is_uniform());
        assert!(AdditionVector::zero(4).is_uniform());
        assert!(!AdditionVector::new(vec![1, 0]).is_uniform());
        assert_eq!(AdditionVector::new(vec![3, 1]).sum(), 4);
    }
}
