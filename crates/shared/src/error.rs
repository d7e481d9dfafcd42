use thiserror::Error;

/// Failure kinds for the vector kernels in [`crate::similarity`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityError {
  /// The two vectors do not share a dimensionality.
  #[error("vector length mismatch: {left} vs {right}")]
  ShapeMismatch { left: usize, right: usize },
  /// A zero-magnitude vector has no direction to compare.
  #[error("zero-magnitude vector")]
  ZeroNorm,
}
