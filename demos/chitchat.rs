//! Routes chat bot utterances to "politics" or "chitchat" with OpenAI
//! embeddings, caching them in SQLite, and answers chitchat with the chat
//! endpoint.

use std::sync::Arc;

use semroute::encoders::OpenAiEncoder;
use semroute::norm::normalize_scores;
use semroute::stores::SqliteStore;
use semroute::{ChatMessage, Chatter, Route, Router, Store};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "semroute=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();
  dotenvy::dotenv().ok();

  let politics = Route::new(
    "politics",
    [
      "isn't politics the best thing ever",
      "why don't you tell me about your political opinions",
      "don't you just love the president",
      "they're going to destroy this country!",
      "they will save the country!",
    ],
  );
  let chitchat = Route::new(
    "chitchat",
    [
      "how's the weather today?",
      "how are things going?",
      "lovely weather today",
      "the weather is horrendous",
      "let's go to the chippy",
    ],
  );

  let encoder = OpenAiEncoder::from_env()?;
  let store = Arc::new(SqliteStore::open("chitchat-embeddings.db")?);

  let router = Router::builder()
    .routes([politics, chitchat])
    .encoder(encoder.clone())
    .store(Arc::clone(&store))
    .build()
    .await?;

  let utterance = "how's the weather today?";
  let matches = router.top_matches(utterance, 2).await?;
  let scores: Vec<f64> = matches.iter().map(|found| found.score).collect();
  let normalized = normalize_scores(&scores);
  for (found, normalized) in matches.iter().zip(normalized) {
    println!("{}: p = {} (normalized {})", found.route, found.score, normalized);
  }

  if matches[0].route == "chitchat" {
    let reply = encoder
      .chat(&[
        ChatMessage::system("You are a friendly small-talk companion."),
        ChatMessage::user(utterance),
      ])
      .await?;
    println!("reply: {reply}");
  }

  store.close().await?;
  Ok(())
}
