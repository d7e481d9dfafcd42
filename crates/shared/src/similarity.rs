//! Vector kernels shared by the router and its scoring metrics.
//!
//! All kernels operate on `f64` slices, check dimensionality up front, and
//! never panic.

use crate::SimilarityError;

fn check_shape(a: &[f64], b: &[f64]) -> Result<(), SimilarityError> {
  if a.len() != b.len() {
    return Err(SimilarityError::ShapeMismatch {
      left: a.len(),
      right: b.len(),
    });
  }
  Ok(())
}

/// Euclidean (L2) norm of a vector.
pub fn norm(v: &[f64]) -> f64 {
  v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Dot product of two equal-length vectors.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64, SimilarityError> {
  check_shape(a, b)?;
  Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Compute cosine similarity between two embedding vectors.
///
/// Returns a value in [-1.0, 1.0] where 1.0 means identical direction.
/// Comparing against a zero-magnitude vector is a [`SimilarityError::ZeroNorm`]
/// error rather than a silent NaN.
pub fn cosine(a: &[f64], b: &[f64]) -> Result<f64, SimilarityError> {
  check_shape(a, b)?;

  let mut dot = 0.0_f64;
  let mut norm_a = 0.0_f64;
  let mut norm_b = 0.0_f64;

  for (x, y) in a.iter().zip(b.iter()) {
    dot += x * y;
    norm_a += x * x;
    norm_b += y * y;
  }

  if norm_a == 0.0 || norm_b == 0.0 {
    return Err(SimilarityError::ZeroNorm);
  }
  Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Euclidean (L2) distance between two vectors.
pub fn euclidean(a: &[f64], b: &[f64]) -> Result<f64, SimilarityError> {
  check_shape(a, b)?;
  Ok(a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum::<f64>().sqrt())
}

/// Manhattan (L1) distance between two vectors.
pub fn manhattan(a: &[f64], b: &[f64]) -> Result<f64, SimilarityError> {
  check_shape(a, b)?;
  Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reference_vectors() {
    let sim = cosine(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
    // dot = 32, norms = sqrt(14) and sqrt(77)
    assert!((sim - 0.9746318461970762).abs() < 1e-12);
  }

  #[test]
  fn orthogonal_vectors_score_zero() {
    let sim = cosine(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
    assert_eq!(sim, 0.0);
  }

  #[test]
  fn identical_direction_is_one() {
    let v = [0.3, -1.2, 7.5];
    let sim = cosine(&v, &v).unwrap();
    assert!((sim - 1.0).abs() < 1e-12);
  }

  #[test]
  fn opposite_direction_is_minus_one() {
    let v = [0.3, -1.2, 7.5];
    let negated: Vec<f64> = v.iter().map(|x| -x).collect();
    let sim = cosine(&v, &negated).unwrap();
    assert!((sim + 1.0).abs() < 1e-12);
  }

  #[test]
  fn symmetric() {
    let a = [0.44, 0.2, 0.54];
    let b = [0.46, 0.51, 0.4];
    assert_eq!(cosine(&a, &b).unwrap(), cosine(&b, &a).unwrap());
  }

  #[test]
  fn scale_invariant() {
    let a = [1.0, 2.0, 3.0];
    let b = [4.0, 5.0, 6.0];
    let base = cosine(&a, &b).unwrap();
    for k in [0.001, 3.7, 1000.0] {
      let scaled: Vec<f64> = a.iter().map(|x| k * x).collect();
      assert!((cosine(&scaled, &b).unwrap() - base).abs() < 1e-9);
    }
  }

  #[test]
  fn stays_within_unit_range() {
    let pairs: [(&[f64], &[f64]); 3] = [
      (&[0.9, 0.43, 0.0009, 0.1], &[0.24, 0.02, 0.11, 0.35]),
      (&[-5.0, 2.0, 8.0], &[3.0, -7.0, 0.5]),
      (&[1e-8, 2e-8], &[3e8, 4e8]),
    ];
    for (a, b) in pairs {
      let sim = cosine(a, b).unwrap();
      assert!((-1.0 - 1e-12..=1.0 + 1e-12).contains(&sim));
    }
  }

  #[test]
  fn zero_norm_is_an_error() {
    assert_eq!(
      cosine(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]),
      Err(SimilarityError::ZeroNorm)
    );
    assert_eq!(
      cosine(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0]),
      Err(SimilarityError::ZeroNorm)
    );
  }

  #[test]
  fn shape_mismatch_is_an_error() {
    assert_eq!(
      cosine(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
      Err(SimilarityError::ShapeMismatch { left: 2, right: 3 })
    );
  }

  #[test]
  fn reference_table() {
    // expected values rounded to four decimals
    let cases: [(&[f64], &[f64], f64); 5] = [
      (
        &[
          0.6378429023635818,
          0.6891080666053131,
          0.6242938529238299,
          0.44797618387108773,
          0.28283025927535843,
          0.7999294372242242,
          0.8289827972810941,
        ],
        &[
          0.7281087474470895,
          0.1911238756245191,
          0.5368592300231692,
          0.2210151126530714,
          0.5113255269750295,
          0.260703208744612,
          0.7499797968916341,
        ],
        0.8819,
      ),
      (
        &[
          0.3213532863532023,
          0.01524713642631278,
          0.5640214803262418,
          0.7471951467346923,
        ],
        &[
          0.14265224091380074,
          0.5373162226984148,
          0.7329499385535614,
          0.11489132191465051,
        ],
        0.6029,
      ),
      (&[0.05336304768380549], &[0.7239604234641187], 1.0),
      (
        &[
          0.9259701759307833,
          0.4369527176226245,
          0.0009199576941947202,
          0.10025644542794729,
        ],
        &[
          0.24059696635437425,
          0.023210885389478467,
          0.11345058443817552,
          0.3520946084651303,
        ],
        0.5902,
      ),
      (
        &[0.44694905646326777, 0.20039786752144578, 0.5473983349535733],
        &[0.4628576782809643, 0.5124668827802493, 0.40255295053932205],
        0.9026,
      ),
    ];
    for (a, b, expected) in cases {
      let sim = cosine(a, b).unwrap();
      assert!(
        (sim - expected).abs() < 1e-4,
        "cosine({a:?}, {b:?}) = {sim}, want {expected}"
      );
    }
  }

  #[test]
  fn dot_product() {
    assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
    assert_eq!(
      dot(&[1.0], &[1.0, 2.0]),
      Err(SimilarityError::ShapeMismatch { left: 1, right: 2 })
    );
  }

  #[test]
  fn norms_and_distances() {
    assert_eq!(norm(&[3.0, 4.0]), 5.0);
    assert_eq!(norm(&[]), 0.0);
    assert_eq!(euclidean(&[0.0, 0.0, 0.0], &[3.0, 4.0, 0.0]).unwrap(), 5.0);
    assert_eq!(manhattan(&[1.0, 2.0], &[4.0, 6.0]).unwrap(), 7.0);
  }
}
