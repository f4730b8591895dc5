//! Key/value storage contract with SQLite and in-memory implementations.
//!
//! # Responsibility
//! - Provide the minimal `get`/`set` surface a browser-style local storage
//!   offers.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `set` replaces any previous value for the same key.
//! - `get` on an unknown key returns `Ok(None)`, not an error.

use crate::db::DbError;
use log::debug;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for storage access and snapshot encoding.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Stored payload could not be encoded or decoded.
    Codec(serde_json::Error),
    MissingRequiredTable(&'static str),
    /// Backend refused the write: read-only medium or no space left.
    ///
    /// Third-party backends should report quota-style refusals here too.
    Unavailable(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "invalid stored payload: {err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; run migrations first")
            }
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Codec(err) => Some(err),
            Self::MissingRequiredTable(_) | Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Codec(value)
    }
}

/// String key/value storage.
pub trait KeyValueRepository {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> RepoResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> RepoResult<()>;
}

/// SQLite-backed key/value repository over the `kv_store` table.
pub struct SqliteKeyValueRepository {
    conn: Connection,
}

impl SqliteKeyValueRepository {
    /// Wraps a migrated connection.
    ///
    /// Fails with `MissingRequiredTable` when `kv_store` is absent.
    pub fn try_new(conn: Connection) -> RepoResult<Self> {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = 'kv_store'
            );",
            [],
            |row| row.get(0),
        )?;
        if exists != 1 {
            return Err(RepoError::MissingRequiredTable("kv_store"));
        }
        Ok(Self { conn })
    }

    /// Returns the underlying connection for inspection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueRepository for SqliteKeyValueRepository {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )
        .map_err(map_write_error)?;
        debug!(
            "event=kv_set module=repo status=ok backend=sqlite bytes={}",
            value.len()
        );
        Ok(())
    }
}

fn map_write_error(err: rusqlite::Error) -> RepoError {
    match err.sqlite_error_code() {
        Some(ErrorCode::ReadOnly) => RepoError::Unavailable(format!("database is read-only: {err}")),
        Some(ErrorCode::DiskFull) => RepoError::Unavailable(format!("storage is full: {err}")),
        _ => RepoError::from(err),
    }
}

/// Process-local key/value repository; contents vanish with the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryKeyValueRepository {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueRepository for MemoryKeyValueRepository {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> RepoResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
