use semroute_shared::{SimilarityError, similarity};

/// Vector comparison strategies available to the router.
///
/// Distance metrics fold into similarities as `1 / (1 + d)` so every metric
/// scores on the same bigger-is-better scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
  Cosine,
  DotProduct,
  Euclidean,
  Manhattan,
}

impl Metric {
  pub fn score(self, query: &[f64], index: &[f64]) -> Result<f64, SimilarityError> {
    match self {
      Metric::Cosine => similarity::cosine(query, index),
      Metric::DotProduct => similarity::dot(query, index),
      Metric::Euclidean => similarity::euclidean(query, index).map(fold_distance),
      Metric::Manhattan => similarity::manhattan(query, index).map(fold_distance),
    }
  }
}

fn fold_distance(distance: f64) -> f64 {
  1.0 / (1.0 + distance)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cosine_matches_kernel() {
    let a = [1.0, 2.0, 3.0];
    let b = [4.0, 5.0, 6.0];
    assert_eq!(
      Metric::Cosine.score(&a, &b).unwrap(),
      similarity::cosine(&a, &b).unwrap()
    );
  }

  #[test]
  fn distances_fold_to_one_for_identical_vectors() {
    let v = [2.0, -3.0, 0.5];
    assert_eq!(Metric::Euclidean.score(&v, &v).unwrap(), 1.0);
    assert_eq!(Metric::Manhattan.score(&v, &v).unwrap(), 1.0);
  }

  #[test]
  fn dot_product_rewards_magnitude() {
    let query = [1.0, 2.0];
    assert_eq!(Metric::DotProduct.score(&query, &[2.0, 4.0]).unwrap(), 10.0);
    assert_eq!(Metric::DotProduct.score(&query, &[1.0, 2.0]).unwrap(), 5.0);
  }

  #[test]
  fn farther_vectors_fold_lower() {
    let origin = [0.0, 0.0];
    let near = Metric::Euclidean.score(&origin, &[1.0, 0.0]).unwrap();
    let far = Metric::Euclidean.score(&origin, &[10.0, 0.0]).unwrap();
    assert!(near > far);
  }

  #[test]
  fn shape_mismatch_propagates() {
    assert_eq!(
      Metric::Manhattan.score(&[1.0], &[1.0, 2.0]),
      Err(SimilarityError::ShapeMismatch { left: 1, right: 2 })
    );
  }
}
