use async_trait::async_trait;
use reqwest::Client;
use semroute_shared::Encoder;
use serde::{Deserialize, Serialize};

const DEFAULT_HOST: &str = "http://localhost:11434";

/// Encoder backed by a local Ollama server's native embeddings endpoint.
pub struct OllamaEncoder {
  http: Client,
  host: String,
  model: String,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
  model: &'a str,
  prompt: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
  embedding: Vec<f64>,
}

impl OllamaEncoder {
  pub fn new(model: impl Into<String>) -> Self {
    Self {
      http: Client::new(),
      host: DEFAULT_HOST.to_string(),
      model: model.into(),
    }
  }

  pub fn with_host(mut self, host: impl Into<String>) -> Self {
    self.host = host.into();
    self
  }
}

#[async_trait]
impl Encoder for OllamaEncoder {
  async fn encode(&self, utterance: &str) -> anyhow::Result<Vec<f64>> {
    let request = EmbeddingRequest {
      model: &self.model,
      prompt: utterance,
    };
    let response: EmbeddingResponse = self
      .http
      .post(format!("{}/api/embeddings", self.host))
      .json(&request)
      .send()
      .await?
      .error_for_status()?
      .json()
      .await?;
    Ok(response.embedding)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn request_shape() {
    let request = EmbeddingRequest {
      model: "all-minilm",
      prompt: "hello there",
    };
    let json = serde_json::to_string(&request).unwrap();
    assert_eq!(json, r#"{"model":"all-minilm","prompt":"hello there"}"#);
  }

  #[test]
  fn response_shape() {
    let response: EmbeddingResponse =
      serde_json::from_str(r#"{"embedding":[0.5,-0.25,1.0]}"#).unwrap();
    assert_eq!(response.embedding, vec![0.5, -0.25, 1.0]);
  }
}
