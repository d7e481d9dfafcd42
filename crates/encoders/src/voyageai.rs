use std::env;

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use semroute_shared::Encoder;
use serde::{Deserialize, Serialize};

const API_URL: &str = "https://api.voyageai.com/v1/embeddings";

/// Encoder backed by the VoyageAI embeddings API.
pub struct VoyageAiEncoder {
  http: Client,
  api_key: String,
  model: String,
}

#[derive(Serialize)]
struct EmbeddingsRequest<'a> {
  model: &'a str,
  input: [&'a str; 1],
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
  data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
  embedding: Vec<f64>,
}

impl VoyageAiEncoder {
  pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
    Self {
      http: Client::new(),
      api_key: api_key.into(),
      model: model.into(),
    }
  }

  /// Build from `VOYAGE_API_KEY` and `VOYAGE_MODEL`.
  pub fn from_env() -> anyhow::Result<Self> {
    let api_key = env::var("VOYAGE_API_KEY").context("VOYAGE_API_KEY must be set")?;
    let model = env::var("VOYAGE_MODEL").unwrap_or_else(|_| "voyage-3".to_string());
    Ok(Self::new(api_key, model))
  }
}

#[async_trait]
impl Encoder for VoyageAiEncoder {
  async fn encode(&self, utterance: &str) -> anyhow::Result<Vec<f64>> {
    let request = EmbeddingsRequest {
      model: &self.model,
      input: [utterance],
    };
    let response: EmbeddingsResponse = self
      .http
      .post(API_URL)
      .bearer_auth(&self.api_key)
      .json(&request)
      .send()
      .await?
      .error_for_status()?
      .json()
      .await?;
    response
      .data
      .into_iter()
      .next()
      .map(|data| data.embedding)
      .ok_or_else(|| anyhow!("empty embedding response"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn request_shape() {
    let request = EmbeddingsRequest {
      model: "voyage-3",
      input: ["hello there"],
    };
    let json = serde_json::to_string(&request).unwrap();
    assert_eq!(json, r#"{"model":"voyage-3","input":["hello there"]}"#);
  }

  #[test]
  fn response_shape() {
    let response: EmbeddingsResponse = serde_json::from_str(
      r#"{"object":"list","data":[{"object":"embedding","embedding":[0.1,0.2],"index":0}],"model":"voyage-3"}"#,
    )
    .unwrap();
    assert_eq!(response.data[0].embedding, vec![0.1, 0.2]);
  }
}
