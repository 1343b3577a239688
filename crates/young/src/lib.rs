//! Young diagrams for SU(n): hook lengths, dimensions, tensor products.
//!
//! A Young diagram with a row capacity `n` labels an irreducible
//! representation of SU(n). This crate computes the diagram's hook lengths,
//! the dimension of the representation it labels, and the decomposition of
//! the tensor product of two representations into irreducibles by
//! exhaustively placing the boxes of the second diagram onto the first.
//!
//! # Pipeline
//!
//! ```text
//! Shape ──hook_length──► Π (n - i + j) / hook ──► dimension
//!
//! first ⊗ second:
//!   for each row k of second        (round k, n - 1 rounds)
//!     odometer → addition vectors summing to second[k]
//!     permutations → ordered vectors
//!     admissibility → candidate shapes
//!     deduplicate → survivors, each continued independently
//!   shapes after the last round → ResultShape { shape, dimension }
//! ```
//!
//! # Familiar products
//!
//! | Group | Product | Decomposition |
//! |-------|---------|---------------|
//! | SU(2) | `[1,0] ⊗ [1,0]` | `[2,0] (3) + [1,1] (1)` |
//! | SU(3) | `[1,0,0] ⊗ [1,1,0]` | `[2,1,0] (8) + [1,1,1] (1)` |
//! | SU(3) | `[2,1,0] ⊗ [2,1,0]` | `27 + 10 + 10̄ + 8 + 8 + 1` |
//!
//! The placement rules admit every Littlewood-Richardson term but do not
//! enforce the lattice-word condition, so operands whose second factor has
//! more than one non-zero row can pick up extra shapes. Products with a
//! single-row second factor (Pieri's rule) are exact.
//!
//! # Example
//!
//! ```
//! use young::{dimension, tensor_product_decompose, Shape};
//!
//! let fundamental: Shape = "1,0,0".parse().unwrap();
//! let anti: Shape = "1,1,0".parse().unwrap();
//! let product = tensor_product_decompose(&fundamental, &anti, false).unwrap();
//!
//! let found: Vec<String> = product.terms().iter().map(|t| t.shape.to_string()).collect();
//! assert_eq!(found, vec!["[2, 1, 0]", "[1, 1, 1]"]);
//! assert_eq!(product.exact_total_dimension(), Some(9));
//! assert_eq!(dimension(&fundamental).unwrap().round(), 3.0);
//! ```

#![deny(missing_docs)]

// Shape type, parsing, padding and reduction
mod shape;

// Hook lengths of individual cells
mod hook;

// Dimension formulas
mod dimension;

// Error types
mod error;

// Engine limits and log destination
pub mod config;

// Round-by-round tensor product decomposition
pub mod tensor;

pub use config::{EngineConfig, DEFAULT_LOG_PATH, DEFAULT_MAX_PERMUTATIONS};
pub use dimension::{dimension, exact_dimension};
pub use error::{Error, Result, ShapeDefect};
pub use hook::{hook_length, hook_table};
pub use shape::Shape;
pub use tensor::{
    tensor_product_decompose, Decomposition, Irreducible, ResultShape, RoundSink, TensorProduct,
};
