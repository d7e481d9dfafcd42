use std::sync::Arc;

use async_trait::async_trait;

use crate::Utterance;

/// A cache of utterance embeddings keyed by utterance text.
#[async_trait]
pub trait Store: Send + Sync {
  /// Persist the embedding carried by `utterance`.
  async fn set(&self, utterance: &Utterance) -> anyhow::Result<()>;

  /// Look up the embedding for `text`. `None` means it has not been cached yet.
  async fn get(&self, text: &str) -> anyhow::Result<Option<Vec<f64>>>;

  /// Release any underlying resources.
  async fn close(&self) -> anyhow::Result<()> {
    Ok(())
  }
}

#[async_trait]
impl<S> Store for Arc<S>
where
  S: Store + ?Sized,
{
  async fn set(&self, utterance: &Utterance) -> anyhow::Result<()> {
    (**self).set(utterance).await
  }

  async fn get(&self, text: &str) -> anyhow::Result<Option<Vec<f64>>> {
    (**self).get(text).await
  }

  async fn close(&self) -> anyhow::Result<()> {
    (**self).close().await
  }
}
