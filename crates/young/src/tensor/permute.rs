//! Orderings of an addition vector.
//!
//! The odometer only yields sorted vectors, so the round pipeline tries
//! every ordering of each one. Orderings are produced by the classic
//! swap-and-recurse scheme, but each level works on its own copy instead of
//! swapping back on return.

use super::vector::AdditionVector;

/// `n!`, or `None` if it does not fit in `usize`.
pub fn factorial(n: usize) -> Option<usize> {
    (2..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
}

/// Visit all `n!` orderings of `vector`, stopping at the first error.
///
/// Repeated entries produce repeated orderings.
///
/// # Errors
///
/// Whatever `visit` returns.
pub fn for_each_permutation<E>(
    vector: &AdditionVector,
    mut visit: impl FnMut(AdditionVector) -> Result<(), E>,
) -> Result<(), E> {
    permute_from(vector.clone(), 0, &mut visit)
}

fn permute_from<E>(
    current: AdditionVector,
    m: usize,
    visit: &mut impl FnMut(AdditionVector) -> Result<(), E>,
) -> Result<(), E> {
    let n = current.len();
    if m + 1 >= n {
        return visit(current);
    }
    for i in m..n {
        permute_from(current.swapped(m, i), m + 1, visit)?;
    }
    Ok(())
}

/// All orderings of `vector`, collected.
pub fn permutations(vector: &AdditionVector) -> Vec<AdditionVector> {
    let mut out = Vec::with_capacity(factorial(vector.len()).unwrap_or(0).min(1 << 16));
    let _: Result<(), ()> = for_each_permutation(vector, |p| {
        out.push(p);
        Ok(())
    });
    out
}
