use serde::{Deserialize, Serialize};

/// A single example phrase, optionally carrying its embedding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
  pub text: String,
  /// Embedding of the text. Empty until encoded.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub embedding: Vec<f64>,
}

impl Utterance {
  pub fn new(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      embedding: Vec::new(),
    }
  }

  pub fn with_embedding(text: impl Into<String>, embedding: Vec<f64>) -> Self {
    Self {
      text: text.into(),
      embedding,
    }
  }
}
