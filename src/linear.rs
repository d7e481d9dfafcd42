//! Linear scan over a set of embeddings.

use semroute_shared::{SimilarityError, similarity};

/// Cosine similarity of `query` against every row of `index`.
///
/// A zero-magnitude row (or query) contributes 0.0 instead of NaN. Every row
/// must share the query's dimensionality.
pub fn similarity_matrix(query: &[f64], index: &[Vec<f64>]) -> Result<Vec<f64>, SimilarityError> {
  let mut scores = Vec::with_capacity(index.len());
  for row in index {
    let score = match similarity::cosine(query, row) {
      Ok(score) => score,
      Err(SimilarityError::ZeroNorm) => 0.0,
      Err(err) => return Err(err),
    };
    scores.push(score);
  }
  Ok(scores)
}

/// Scores and indices of the `top_k` best scores, descending.
///
/// `top_k` is clamped to the number of scores.
pub fn top_scores(scores: &[f64], top_k: usize) -> (Vec<f64>, Vec<usize>) {
  let top_k = top_k.min(scores.len());
  let mut order: Vec<usize> = (0..scores.len()).collect();
  order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
  order.truncate(top_k);
  let top = order.iter().map(|&i| scores[i]).collect();
  (top, order)
}
