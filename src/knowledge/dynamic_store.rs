//! Persistence-backed dynamic response lookup.
//!
//! The dynamic store maps exact question text to a previously stored answer,
//! backed by a relational table. The pipeline treats it as an optional
//! collaborator: errors are logged by the caller and count as a miss, never a
//! user-visible failure.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use rusqlite::{Connection, params};

use crate::error::Result;

/// A lookup/update capability over stored (question, response) rows.
pub trait ResponseStore: Send {
    /// Fetch the stored response for the exact question text, if any.
    fn query(&self, question: &str) -> Result<Option<String>>;

    /// Insert or replace the stored response for a question.
    fn insert(&self, question: &str, response: &str) -> Result<()>;

    /// Get the name of this store for logging.
    fn name(&self) -> &'static str;
}

/// SQLite-backed response store.
///
/// Owns a single connection behind a mutex. The schema is created on open;
/// all statements are parameterized. A busy timeout bounds how long a locked
/// database can stall a lookup.
#[derive(Debug)]
pub struct SqliteResponseStore {
    conn: Mutex<Connection>,
}

impl SqliteResponseStore {
    /// Open (or create) the database at `path` and initialize the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::initialize(conn)
    }

    /// Open an in-memory database, mainly for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> Result<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS chatbot_responses (
                question TEXT PRIMARY KEY,
                response TEXT NOT NULL
            );",
        )?;

        Ok(SqliteResponseStore {
            conn: Mutex::new(conn),
        })
    }
}

impl ResponseStore for SqliteResponseStore {
    fn query(&self, question: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().expect("connection lock poisoned");
        let result = conn.query_row(
            "SELECT response FROM chatbot_responses WHERE question = ?1",
            params![question],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(response) => Ok(Some(response)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn insert(&self, question: &str, response: &str) -> Result<()> {
        let conn = self.conn.lock().expect("connection lock poisoned");
        conn.execute(
            "INSERT OR REPLACE INTO chatbot_responses (question, response) VALUES (?1, ?2)",
            params![question, response],
        )?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "sqlite"
    }
}

/// In-memory response store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryResponseStore {
    rows: Mutex<HashMap<String, String>>,
}

impl MemoryResponseStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.lock().expect("rows lock poisoned").len()
    }

    /// Whether the store has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResponseStore for MemoryResponseStore {
    fn query(&self, question: &str) -> Result<Option<String>> {
        let rows = self.rows.lock().expect("rows lock poisoned");
        Ok(rows.get(question).cloned())
    }

    fn insert(&self, question: &str, response: &str) -> Result<()> {
        let mut rows = self.rows.lock().expect("rows lock poisoned");
        rows.insert(question.to_string(), response.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_round_trip() {
        let store = SqliteResponseStore::open_in_memory().unwrap();

        store
            .insert("when does the library open", "The library opens at 8am.")
            .unwrap();

        let hit = store.query("when does the library open").unwrap();
        assert_eq!(hit.as_deref(), Some("The library opens at 8am."));
    }

    #[test]
    fn test_sqlite_miss_returns_none() {
        let store = SqliteResponseStore::open_in_memory().unwrap();

        assert_eq!(store.query("never stored").unwrap(), None);
    }

    #[test]
    fn test_sqlite_replace_on_duplicate_question() {
        let store = SqliteResponseStore::open_in_memory().unwrap();

        store.insert("q", "first").unwrap();
        store.insert("q", "second").unwrap();

        assert_eq!(store.query("q").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_sqlite_injection_is_inert() {
        let store = SqliteResponseStore::open_in_memory().unwrap();
        let hostile = "x'; DROP TABLE chatbot_responses; --";

        store.insert(hostile, "stored safely").unwrap();

        assert_eq!(store.query(hostile).unwrap().as_deref(), Some("stored safely"));
        assert_eq!(store.query("x").unwrap(), None);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryResponseStore::new();
        assert!(store.is_empty());

        store.insert("q", "a").unwrap();
        assert_eq!(store.query("q").unwrap().as_deref(), Some("a"));
        assert_eq!(store.query("other").unwrap(), None);
        assert_eq!(store.len(), 1);
    }
}
