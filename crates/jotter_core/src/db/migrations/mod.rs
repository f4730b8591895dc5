//! Schema migrations for the key/value store.
//!
//! # Responsibility
//! - List schema steps in version order.
//! - Bring a connection up to the latest version in one transaction.
//!
//! # Invariants
//! - Versions are strictly increasing; the schema version lives in
//!   `PRAGMA user_version`.
//! - A failed step leaves the database at its previous version.
//! - Databases written by a newer build are refused, never downgraded.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// One schema step: SQL that moves the schema to `version`.
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    // kv_store: one row per storage key, holding the serialized snapshot.
    Migration {
        version: 1,
        sql: include_str!("0001_init.sql"),
    },
];

/// Schema versions before and after `apply_migrations`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationReport {
    pub from: u32,
    pub to: u32,
}

impl MigrationReport {
    /// Number of steps run by this call.
    pub fn applied(&self) -> usize {
        MIGRATIONS
            .iter()
            .filter(|step| step.version > self.from && step.version <= self.to)
            .count()
    }
}

/// Highest schema version this build knows.
pub fn latest_version() -> u32 {
    MIGRATIONS.iter().map(|step| step.version).max().unwrap_or(0)
}

/// Runs every step newer than the connection's schema version.
///
/// # Errors
/// - `DbError::UnsupportedSchemaVersion` when the database is newer than
///   this build.
/// - SQLite failures; the transaction is rolled back.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<MigrationReport> {
    let from: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let latest = latest_version();
    if from > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: latest,
        });
    }

    let pending: Vec<&Migration> = MIGRATIONS.iter().filter(|step| step.version > from).collect();
    if pending.is_empty() {
        return Ok(MigrationReport { from, to: from });
    }

    let tx = conn.transaction()?;
    for step in &pending {
        tx.execute_batch(step.sql)?;
        tx.pragma_update(None, "user_version", step.version)?;
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from={} to={} steps={}",
        from,
        latest,
        pending.len()
    );
    Ok(MigrationReport { from, to: latest })
}
