//! Tensor product decomposition by exhaustive box placement.
//!
//! The product `λ ⊗ μ` of two shapes with the same row capacity `n` is built
//! by folding the rows of `μ` into `λ` one round at a time:
//!
//! ```text
//! Active(λ, 0, n-1)
//!   round k: for every partition v of μ[k] into ≤ n parts (odometer),
//!            for every ordering of v (skipped if v is uniform),
//!            keep parent + v if admissible;
//!            deduplicate, then continue each survivor as Active(s, k+1, r-1)
//! Done(s) when r == 0  →  ResultShape { s, dim(s) }
//! ```
//!
//! Rounds are independent: every survivor carries its own owned shape, and
//! the work stack replaces recursion, so discovery order is the depth-first
//! order of the recursive description.
//!
//! | Stage | Module |
//! |-------|--------|
//! | addition vectors | [`AdditionVectors`] |
//! | orderings | [`permutations`] |
//! | admissibility | [`admit`] / [`check`] |
//! | deduplication | [`deduplicate`] |
//! | round log | [`RoundSink`] |
//!
//! # Example
//!
//! ```
//! use young::{tensor_product_decompose, Shape};
//!
//! let box2 = Shape::new(vec![1, 0]).unwrap();
//! let product = tensor_product_decompose(&box2, &box2, false).unwrap();
//! let rows: Vec<&[u32]> = product.terms().iter().map(|t| t.shape.rows()).collect();
//! assert_eq!(rows, vec![&[2, 0][..], &[1, 1][..]]);
//! assert_eq!(product.total_dimension(), 4.0);
//! ```

mod admissible;
mod dedup;
mod permute;
mod sink;
mod vector;

pub use admissible::{admit, check, Rejection};
pub use dedup::deduplicate;
pub use permute::{factorial, for_each_permutation, permutations};
pub use sink::{AppendLog, Discard, RoundSink};
pub use vector::{AdditionVector, AdditionVectors, Odometer};

use std::collections::HashMap;

use crate::config::EngineConfig;
use crate::dimension::{dimension, exact_dimension};
use crate::error::{Error, Result};
use crate::shape::Shape;

/// A shape that reached the end of the second operand, with its dimension.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResultShape {
    /// The combined shape, in the operands' row capacity.
    pub shape: Shape,
    /// Hook-content dimension, in floating point.
    pub dimension: f64,
    /// Weyl dimension in integers, if it fits in `u128`.
    pub exact_dimension: Option<u128>,
}

impl ResultShape {
    /// Compute both dimensions of `shape`.
    ///
    /// # Errors
    ///
    /// [`Error::Arithmetic`] if the dimension formula meets a zero hook.
    pub fn evaluate(shape: Shape) -> Result<Self> {
        let dimension = dimension(&shape)?;
        let exact_dimension = exact_dimension(&shape);
        Ok(Self {
            shape,
            dimension,
            exact_dimension,
        })
    }
}

/// A distinct result shape with the number of paths that produced it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Irreducible {
    /// The shape.
    pub shape: Shape,
    /// How many times it occurs in the decomposition.
    pub multiplicity: usize,
    /// Floating-point dimension of one copy.
    pub dimension: f64,
    /// Exact dimension of one copy, if representable.
    pub exact_dimension: Option<u128>,
}

/// Outcome of one decomposition.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Decomposition {
    first: Shape,
    second: Shape,
    terms: Vec<ResultShape>,
    log_degraded: bool,
}

impl Decomposition {
    /// First operand.
    #[inline]
    pub fn first(&self) -> &Shape {
        &self.first
    }

    /// Second operand.
    #[inline]
    pub fn second(&self) -> &Shape {
        &self.second
    }

    /// Result shapes in discovery order. A shape reached along several
    /// paths appears once per path.
    #[inline]
    pub fn terms(&self) -> &[ResultShape] {
        &self.terms
    }

    /// Consume into the result shapes.
    pub fn into_terms(self) -> Vec<ResultShape> {
        self.terms
    }

    /// `(shape, dimension)` pairs in discovery order.
    pub fn pairs(&self) -> Vec<(Shape, f64)> {
        self.terms
            .iter()
            .map(|t| (t.shape.clone(), t.dimension))
            .collect()
    }

    /// Number of result shapes, counting repeats.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if no path reached the last round.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Distinct shapes with multiplicities, in order of first discovery.
    pub fn irreducibles(&self) -> Vec<Irreducible> {
        let mut position: HashMap<&Shape, usize> = HashMap::new();
        let mut out: Vec<Irreducible> = Vec::new();
        for term in &self.terms {
            match position.get(&term.shape) {
                Some(&i) => out[i].multiplicity += 1,
                None => {
                    position.insert(&term.shape, out.len());
                    out.push(Irreducible {
                        shape: term.shape.clone(),
                        multiplicity: 1,
                        dimension: term.dimension,
                        exact_dimension: term.exact_dimension,
                    });
                }
            }
        }
        out
    }

    /// Sum of the floating-point dimensions of every term.
    pub fn total_dimension(&self) -> f64 {
        self.terms.iter().map(|t| t.dimension).sum()
    }

    /// Sum of the exact dimensions, if every term has one and the sum fits.
    pub fn exact_total_dimension(&self) -> Option<u128> {
        self.terms
            .iter()
            .try_fold(0u128, |acc, t| acc.checked_add(t.exact_dimension?))
    }

    /// `dim(first) * dim(second)`, which a complete decomposition reproduces.
    ///
    /// # Errors
    ///
    /// [`Error::Arithmetic`] if either operand meets a zero hook.
    pub fn expected_dimension(&self) -> Result<f64> {
        Ok(dimension(&self.first)? * dimension(&self.second)?)
    }

    /// Exact `dim(first) * dim(second)`, if representable.
    pub fn exact_expected_dimension(&self) -> Option<u128> {
        exact_dimension(&self.first)?.checked_mul(exact_dimension(&self.second)?)
    }

    /// True if the round log could not be written and recording stopped.
    #[inline]
    pub fn log_degraded(&self) -> bool {
        self.log_degraded
    }
}

/// Position in the round-by-round descent.
#[derive(Debug, Clone, PartialEq, Eq)]
enum EngineState {
    /// `shape` still has `remaining` rounds to run, starting with row `index`
    /// of the second operand.
    Active {
        shape: Shape,
        index: usize,
        remaining: usize,
    },
    /// Every round has run.
    Done(Shape),
}

impl EngineState {
    fn start(first: Shape) -> Self {
        let remaining = first.row_count() - 1;
        Self::advance(first, 0, remaining)
    }

    fn advance(shape: Shape, index: usize, remaining: usize) -> Self {
        if remaining == 0 {
            Self::Done(shape)
        } else {
            Self::Active {
                shape,
                index,
                remaining,
            }
        }
    }
}

/// The decomposition engine.
#[derive(Debug, Clone, Default)]
pub struct TensorProduct {
    config: EngineConfig,
}

impl TensorProduct {
    /// Engine with the given limits.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one round: every admissible way of adding `target` boxes to
    /// `parent` in round `index`, deduplicated.
    ///
    /// # Errors
    ///
    /// [`Error::ComputationTooLarge`] if `n!` exceeds `max_permutations`,
    /// [`Error::Allocation`] if the candidate buffer cannot grow.
    pub fn round(&self, parent: &Shape, target: u32, index: usize) -> Result<Vec<Shape>> {
        Ok(deduplicate(self.candidates(parent, target, index)?))
    }

    /// Admitted candidates of one round before deduplication, in the order
    /// they were found.
    fn candidates(&self, parent: &Shape, target: u32, index: usize) -> Result<Vec<Shape>> {
        let n = parent.row_count();
        self.check_size(n)?;

        let mut candidates: Vec<Shape> = Vec::new();
        for vector in AdditionVectors::new(n, target) {
            place_vector(&mut candidates, parent, &vector, index)?;
        }
        Ok(candidates)
    }

    /// Decompose `first ⊗ second` without a round log.
    ///
    /// # Errors
    ///
    /// See [`TensorProduct::decompose_into`].
    pub fn decompose(&self, first: &Shape, second: &Shape) -> Result<Decomposition> {
        self.run(first, second, None)
    }

    /// Decompose, appending each round to `config().log_path` when `emit_to_log` is set.
    ///
    /// # Errors
    ///
    /// See [`TensorProduct::decompose_into`]. Log failures are not errors.
    pub fn decompose_with_log(
        &self,
        first: &Shape,
        second: &Shape,
        emit_to_log: bool,
    ) -> Result<Decomposition> {
        if emit_to_log {
            let mut log = AppendLog::new(self.config.log_path.clone());
            self.decompose_into(first, second, &mut log)
        } else {
            self.decompose(first, second)
        }
    }

    /// Decompose `first ⊗ second`, reporting every round's survivors to `sink`.
    ///
    /// Full-height columns of `second` are SU(n) singlets, so the rounds
    /// place the boxes of `second.reduced()`; its last row is always empty and
    /// the `n - 1` rounds consume every remaining box. [`Decomposition::second`]
    /// still returns the operand as given.
    ///
    /// A failing sink is dropped with a warning and the decomposition
    /// continues; [`Decomposition::log_degraded`] records that it happened.
    ///
    /// # Errors
    ///
    /// [`Error::RowCountMismatch`] if the operands differ in row capacity,
    /// [`Error::ComputationTooLarge`], [`Error::Allocation`], or
    /// [`Error::Arithmetic`] from the dimension formula.
    pub fn decompose_into(
        &self,
        first: &Shape,
        second: &Shape,
        sink: &mut dyn RoundSink,
    ) -> Result<Decomposition> {
        self.run(first, second, Some(sink))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(first = %first, second = %second))]
    fn run(
        &self,
        first: &Shape,
        second: &Shape,
        mut sink: Option<&mut dyn RoundSink>,
    ) -> Result<Decomposition> {
        if first.row_count() != second.row_count() {
            return Err(Error::RowCountMismatch {
                first: first.row_count(),
                second: second.row_count(),
            });
        }
        self.check_size(first.row_count())?;

        let placed = second.reduced();
        let mut log_degraded = false;
        let mut terms: Vec<ResultShape> = Vec::new();
        let mut stack = vec![EngineState::start(first.clone())];

        while let Some(state) = stack.pop() {
            match state {
                EngineState::Done(shape) => {
                    terms.try_reserve(1)?;
                    terms.push(ResultShape::evaluate(shape)?);
                }
                EngineState::Active {
                    shape,
                    index,
                    remaining,
                } => {
                    let target = placed.row(index);
                    let survivors = self.round(&shape, target, index)?;
                    tracing::debug!(
                        round = index,
                        target,
                        parent = %shape,
                        survivors = survivors.len(),
                        "round complete"
                    );

                    let failure = match sink.as_deref_mut() {
                        Some(s) => s.record(index, &evaluate_all(&survivors)?).err(),
                        None => None,
                    };
                    if let Some(err) = failure {
                        tracing::warn!(error = %err, round = index, "round log unavailable, continuing without it");
                        sink = None;
                        log_degraded = true;
                    }

                    stack.try_reserve(survivors.len())?;
                    for survivor in survivors.into_iter().rev() {
                        stack.push(EngineState::advance(survivor, index + 1, remaining - 1));
                    }
                }
            }
        }

        tracing::debug!(terms = terms.len(), "decomposition complete");
        Ok(Decomposition {
            first: first.clone(),
            second: second.clone(),
            terms,
            log_degraded,
        })
    }

    fn check_size(&self, rows: usize) -> Result<()> {
        match factorial(rows) {
            Some(count) if count <= self.config.max_permutations => Ok(()),
            _ => Err(Error::ComputationTooLarge {
                rows,
                limit: self.config.max_permutations,
            }),
        }
    }
}

/// Try every ordering of `vector` against `parent`, pushing the admitted
/// candidates. A uniform vector has a single ordering and is checked once.
/// Returns the number of orderings checked.
fn place_vector(
    candidates: &mut Vec<Shape>,
    parent: &Shape,
    vector: &AdditionVector,
    round: usize,
) -> Result<usize> {
    if vector.is_uniform() {
        push_admitted(candidates, parent, vector, round)?;
        return Ok(1);
    }
    let mut checked = 0;
    for_each_permutation(vector, |ordering| {
        checked += 1;
        push_admitted(candidates, parent, &ordering, round)
    })?;
    Ok(checked)
}

fn push_admitted(
    candidates: &mut Vec<Shape>,
    parent: &Shape,
    vector: &AdditionVector,
    round: usize,
) -> Result<()> {
    match check(parent, vector, round) {
        Ok(candidate) => {
            candidates.try_reserve(1)?;
            candidates.push(candidate);
        }
        Err(reason) => {
            tracing::trace!(parent = %parent, vector = %vector, %reason, "rejected");
        }
    }
    Ok(())
}

fn evaluate_all(shapes: &[Shape]) -> Result<Vec<ResultShape>> {
    shapes.iter().cloned().map(ResultShape::evaluate).collect()
}

/// Decompose `first ⊗ second` with the default configuration.
///
/// With `emit_to_log`, every round's survivors are appended to
/// [`DEFAULT_LOG_PATH`](crate::config::DEFAULT_LOG_PATH); if the log cannot be
/// written the computation still completes.
///
/// # Errors
///
/// See [`TensorProduct::decompose_into`].
pub fn tensor_product_decompose(
    first: &Shape,
    second: &Shape,
    emit_to_log: bool,
) -> Result<Decomposition> {
    TensorProduct::default().decompose_with_log(first, second, emit_to_log)
}
