mod sqlite;

pub use sqlite::SqliteLogStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::LogEntry;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage task join error: {0}")]
    Task(String),
}

/// Append-only audit log of completed generation requests
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Create the log table if it does not exist yet
    async fn init(&self) -> StorageResult<()>;

    /// Append one row and return its id
    async fn append(&self, ingredients: &str, result_text: &str) -> StorageResult<i64>;

    /// Most recent rows first, at most `limit` of them
    async fn recent(&self, limit: usize) -> StorageResult<Vec<LogEntry>>;
}
