//! Prints the cosine similarity between a fixed query vector and a fixed
//! index vector.

use semroute::{SimilarityError, similarity};

fn run() -> Result<f64, SimilarityError> {
  let query = [1.0, 2.0, 3.0];
  let index = [4.0, 5.0, 6.0];
  similarity::cosine(&query, &index)
}

fn main() -> anyhow::Result<()> {
  let similarity = run()?;
  println!("Similarity: {similarity}");
  Ok(())
}
