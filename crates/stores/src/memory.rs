use std::collections::HashMap;

use async_trait::async_trait;
use semroute_shared::{Store, Utterance};
use tokio::sync::RwLock;

/// In-memory embedding cache.
#[derive(Debug, Default)]
pub struct MemoryStore {
  entries: RwLock<HashMap<String, Vec<f64>>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl Store for MemoryStore {
  async fn set(&self, utterance: &Utterance) -> anyhow::Result<()> {
    let mut entries = self.entries.write().await;
    entries.insert(utterance.text.clone(), utterance.embedding.clone());
    Ok(())
  }

  async fn get(&self, text: &str) -> anyhow::Result<Option<Vec<f64>>> {
    let entries = self.entries.read().await;
    Ok(entries.get(text).cloned())
  }
}
