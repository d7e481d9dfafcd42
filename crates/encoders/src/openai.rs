use std::env;

use anyhow::{Context, anyhow};
use async_openai::{Client, config::OpenAIConfig, types::embeddings::CreateEmbeddingRequestArgs};
use async_openai::types::chat::{
  ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
  ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
  CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use semroute_shared::{ChatMessage, ChatRole, Chatter, Encoder};

const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Encoder backed by the OpenAI API.
///
/// Any OpenAI-compatible server works by pointing [`OpenAiEncoder::with_api_base`]
/// at it. Also implements [`Chatter`] through the chat completions endpoint.
#[derive(Clone)]
pub struct OpenAiEncoder {
  config: OpenAIConfig,
  embedding_model: String,
  chat_model: String,
  dimensions: Option<u32>,
}

impl OpenAiEncoder {
  pub fn new(api_key: impl Into<String>, embedding_model: impl Into<String>) -> Self {
    Self {
      config: OpenAIConfig::new().with_api_key(api_key.into()),
      embedding_model: embedding_model.into(),
      chat_model: DEFAULT_CHAT_MODEL.to_string(),
      dimensions: None,
    }
  }

  /// Point the encoder at an OpenAI-compatible server.
  pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
    self.config = self.config.with_api_base(api_base.into());
    self
  }

  pub fn with_chat_model(mut self, chat_model: impl Into<String>) -> Self {
    self.chat_model = chat_model.into();
    self
  }

  /// Ask the API to truncate embeddings to this many dimensions.
  pub fn with_dimensions(mut self, dimensions: u32) -> Self {
    self.dimensions = Some(dimensions);
    self
  }

  /// Build from `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `OPENAI_EMBEDDING_MODEL`
  /// and `OPENAI_CHAT_MODEL`. Only the API key is required.
  pub fn from_env() -> anyhow::Result<Self> {
    let api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?;
    let embedding_model =
      env::var("OPENAI_EMBEDDING_MODEL").unwrap_or_else(|_| DEFAULT_EMBEDDING_MODEL.to_string());
    let mut encoder = Self::new(api_key, embedding_model);
    if let Ok(api_base) = env::var("OPENAI_BASE_URL") {
      encoder = encoder.with_api_base(api_base);
    }
    if let Ok(chat_model) = env::var("OPENAI_CHAT_MODEL") {
      encoder = encoder.with_chat_model(chat_model);
    }
    Ok(encoder)
  }

  fn client(&self) -> Client<OpenAIConfig> {
    Client::with_config(self.config.clone())
  }
}

#[async_trait]
impl Encoder for OpenAiEncoder {
  async fn encode(&self, utterance: &str) -> anyhow::Result<Vec<f64>> {
    let mut request = CreateEmbeddingRequestArgs::default();
    request.model(&self.embedding_model).input(utterance);
    if let Some(dimensions) = self.dimensions {
      request.dimensions(dimensions);
    }

    let response = self.client().embeddings().create(request.build()?).await?;
    let embedding = response
      .data
      .into_iter()
      .next()
      .ok_or_else(|| anyhow!("empty embedding response"))?
      .embedding;

    // the API returns f32 components
    Ok(embedding.into_iter().map(f64::from).collect())
  }
}

#[async_trait]
impl Chatter for OpenAiEncoder {
  async fn chat(&self, prompt: &[ChatMessage]) -> anyhow::Result<String> {
    let mut messages = Vec::with_capacity(prompt.len());
    for message in prompt {
      let content = message.content.clone();
      messages.push(match message.role {
        ChatRole::System => ChatCompletionRequestMessage::System(
          ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?,
        ),
        ChatRole::User => ChatCompletionRequestMessage::User(
          ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?,
        ),
        ChatRole::Assistant => ChatCompletionRequestMessage::Assistant(
          ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()?,
        ),
      });
    }

    let request = CreateChatCompletionRequestArgs::default()
      .model(&self.chat_model)
      .messages(messages)
      .build()?;

    let response = self.client().chat().create(request).await?;
    response
      .choices
      .into_iter()
      .next()
      .and_then(|choice| choice.message.content)
      .ok_or_else(|| anyhow!("empty chat response"))
  }
}
