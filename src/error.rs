use semroute_shared::SimilarityError;
use thiserror::Error;

/// Errors surfaced by [`crate::Router`] and [`crate::RouterBuilder`].
#[derive(Debug, Error)]
pub enum RouterError {
  /// No stored utterance scored above zero for the query.
  #[error("no route found for utterance {utterance:?}")]
  NoRouteFound { utterance: String },

  #[error("error encoding utterance {utterance:?}")]
  Encode {
    utterance: String,
    #[source]
    source: anyhow::Error,
  },

  #[error("error accessing the embedding store for utterance {utterance:?}")]
  Store {
    utterance: String,
    #[source]
    source: anyhow::Error,
  },

  #[error(transparent)]
  Similarity(#[from] SimilarityError),

  #[error("router requires an encoder")]
  MissingEncoder,

  #[error("router requires a store")]
  MissingStore,
}
