mod memory;
pub use memory::MemoryStore;

mod sqlite;
pub use sqlite::SqliteStore;
