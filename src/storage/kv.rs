use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension};

use crate::error::{JotterError, Result};

const JOTTER_DIR: &str = ".jotter";
const NOTES_DB: &str = "notes.db";

/// SQLite-backed key-value store: one table, text keys, text values.
pub struct KvStore {
    conn: Connection,
    path: PathBuf,
}

impl KvStore {
    /// Open the store under `root`, creating the directory, the database,
    /// and the schema on first use. There is no separate init step.
    pub fn open(root: &Path) -> Result<Self> {
        let jotter_dir = root.join(JOTTER_DIR);
        fs::create_dir_all(&jotter_dir)?;

        let path = jotter_dir.join(NOTES_DB);
        let conn = Connection::open(&path)?;

        let store = Self { conn, path };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Read the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let result: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(result)
    }

    /// Write `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            [key, value],
        )?;
        Ok(())
    }

    /// Get the jotter directory path
    pub fn jotter_dir(&self) -> &Path {
        self.path.parent().unwrap()
    }
}

impl From<rusqlite::Error> for JotterError {
    fn from(e: rusqlite::Error) -> Self {
        JotterError::Storage(format!("SQLite error: {}", e))
    }
}
