use std::path::Path;

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, params};
use semroute_shared::{Store, Utterance};
use tokio::sync::Mutex;

/// SQLite-backed embedding cache.
///
/// Embeddings are stored as JSON text in a single `utterances` table. The
/// connection is synchronous, so it sits behind an async mutex.
pub struct SqliteStore {
  conn: Mutex<Connection>,
}

impl SqliteStore {
  pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
    Self::init(Connection::open(path)?)
  }

  pub fn open_in_memory() -> anyhow::Result<Self> {
    Self::init(Connection::open_in_memory()?)
  }

  fn init(conn: Connection) -> anyhow::Result<Self> {
    conn.execute(
      "CREATE TABLE IF NOT EXISTS utterances (
        text TEXT PRIMARY KEY,
        embedding TEXT NOT NULL
      )",
      [],
    )?;
    Ok(Self {
      conn: Mutex::new(conn),
    })
  }
}

#[async_trait]
impl Store for SqliteStore {
  async fn set(&self, utterance: &Utterance) -> anyhow::Result<()> {
    let embedding = serde_json::to_string(&utterance.embedding)?;
    let conn = self.conn.lock().await;
    conn.execute(
      "INSERT OR REPLACE INTO utterances (text, embedding) VALUES (?1, ?2)",
      params![utterance.text, embedding],
    )?;
    Ok(())
  }

  async fn get(&self, text: &str) -> anyhow::Result<Option<Vec<f64>>> {
    let conn = self.conn.lock().await;
    let row: Option<String> = conn
      .query_row(
        "SELECT embedding FROM utterances WHERE text = ?1",
        params![text],
        |row| row.get(0),
      )
      .optional()?;
    match row {
      Some(json) => Ok(Some(serde_json::from_str(&json)?)),
      None => Ok(None),
    }
  }
}
