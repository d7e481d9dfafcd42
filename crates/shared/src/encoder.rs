use std::sync::Arc;

use async_trait::async_trait;

/// An embedding backend: turns an utterance into a vector.
#[async_trait]
pub trait Encoder: Send + Sync {
  async fn encode(&self, utterance: &str) -> anyhow::Result<Vec<f64>>;
}

#[async_trait]
impl<E> Encoder for Arc<E>
where
  E: Encoder + ?Sized,
{
  async fn encode(&self, utterance: &str) -> anyhow::Result<Vec<f64>> {
    (**self).encode(utterance).await
  }
}
