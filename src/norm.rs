//! Score normalization helpers.

/// Min-max rescale scores to the [0, 1] range.
///
/// When every score is equal the spread is zero and every score maps to 0.0.
pub fn normalize_scores(scores: &[f64]) -> Vec<f64> {
  if scores.is_empty() {
    return Vec::new();
  }
  let mut min = f64::INFINITY;
  let mut max = f64::NEG_INFINITY;
  for &score in scores {
    min = min.min(score);
    max = max.max(score);
  }
  let spread = max - min;
  scores
    .iter()
    .map(|&score| if spread == 0.0 { 0.0 } else { (score - min) / spread })
    .collect()
}
