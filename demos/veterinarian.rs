//! Routes utterances from a veterinarian appointment to "noteworthy" or
//! "chitchat" using a local Ollama server for embeddings.

use semroute::encoders::OllamaEncoder;
use semroute::stores::MemoryStore;
use semroute::{Route, Router};
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

  let noteworthy = Route::new(
    "noteworthy",
    [
      "what is the best way to treat a dog with a cold?",
      "my cat has been limping, what should I do?",
    ],
  );
  let chitchat = Route::new(
    "chitchat",
    ["what is your favorite color?", "what is your favorite animal?"],
  );

  let router = Router::builder()
    .routes([noteworthy, chitchat])
    .encoder(OllamaEncoder::new("mxbai-embed-large"))
    .store(MemoryStore::new())
    .build()
    .await?;

  let found = router.best_match("how's the weather today?").await?;
  println!("Found: {}", found.route);
  println!("p: {}", found.score);
  Ok(())
}
