//! Compute similarity scores between a query utterance and sets of stored
//! example utterances, and route to the best match.
//!
//! A [`Router`] owns a set of [`Route`]s, an [`Encoder`] that turns text into
//! embedding vectors, and a [`Store`] that caches those vectors. It is designed
//! to sit in front of LLMs and agents as a superfast decision-making layer.

mod error;
pub use error::RouterError;

mod scoring;
pub use scoring::Metric;

mod router;
pub use router::{Route, RouteMatch, Router, RouterBuilder};

pub mod linear;
pub mod norm;

pub use semroute_encoders as encoders;
pub use semroute_shared::similarity;
pub use semroute_shared::{
  ChatMessage, ChatRole, Chatter, Encoder, SimilarityError, Store, Utterance,
};
pub use semroute_stores as stores;
