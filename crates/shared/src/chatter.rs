use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
  System,
  User,
  Assistant,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
  pub role: ChatRole,
  pub content: String,
}

impl ChatMessage {
  pub fn system(content: impl Into<String>) -> Self {
    Self {
      role: ChatRole::System,
      content: content.into(),
    }
  }

  pub fn user(content: impl Into<String>) -> Self {
    Self {
      role: ChatRole::User,
      content: content.into(),
    }
  }
}

/// A text generation backend, for answering once a route has been picked.
#[async_trait]
pub trait Chatter: Send + Sync {
  async fn chat(&self, prompt: &[ChatMessage]) -> anyhow::Result<String>;
}
