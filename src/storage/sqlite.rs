use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::debug;
use rusqlite::{params, Connection};

use super::{LogStore, StorageError, StorageResult};
use crate::model::LogEntry;

const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `recipe_logs` table in a SQLite file. Every call opens its own connection.
#[derive(Debug, Clone)]
pub struct SqliteLogStore {
    db_path: PathBuf,
}

impl SqliteLogStore {
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    async fn with_connection<T, F>(&self, func: F) -> StorageResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> StorageResult<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        tokio::task::spawn_blocking(move || {
            let connection = open_connection(&db_path)?;
            func(&connection)
        })
        .await
        .map_err(|error| StorageError::Task(error.to_string()))?
    }
}

#[async_trait]
impl LogStore for SqliteLogStore {
    async fn init(&self) -> StorageResult<()> {
        self.with_connection(|connection| {
            connection.execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS recipe_logs (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    ingredients TEXT NOT NULL,
                    result_text TEXT NOT NULL,
                    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
                );
                "#,
            )?;
            Ok(())
        })
        .await
    }

    async fn append(&self, ingredients: &str, result_text: &str) -> StorageResult<i64> {
        let ingredients = ingredients.to_string();
        let result_text = result_text.to_string();
        self.with_connection(move |connection| {
            connection.execute(
                "INSERT INTO recipe_logs (ingredients, result_text) VALUES (?1, ?2)",
                params![ingredients, result_text],
            )?;
            let id = connection.last_insert_rowid();
            debug!("Inserted recipe_logs row {}", id);
            Ok(id)
        })
        .await
    }

    async fn recent(&self, limit: usize) -> StorageResult<Vec<LogEntry>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.with_connection(move |connection| {
            let mut statement = connection.prepare(
                "SELECT id, ingredients, result_text, created_at
                 FROM recipe_logs ORDER BY id DESC LIMIT ?1",
            )?;
            let rows = statement.query_map(params![limit], |row| {
                let created_at: NaiveDateTime = row.get(3)?;
                Ok(LogEntry {
                    id: row.get(0)?,
                    ingredients: row.get(1)?,
                    result_text: row.get(2)?,
                    created_at: created_at.format(CREATED_AT_FORMAT).to_string(),
                })
            })?;
            Ok(rows.collect::<Result<Vec<_>, _>>()?)
        })
        .await
    }
}

fn open_connection(path: &Path) -> StorageResult<Connection> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let connection = Connection::open(path)?;
    connection.execute_batch("PRAGMA journal_mode = WAL;")?;
    Ok(connection)
}
