//! Note collection snapshot persistence.
//!
//! # Responsibility
//! - Encode the whole note collection as one JSON array under a fixed key.
//! - Decode it back, dropping records whose id was already seen.
//! - Report, but keep, records that break field limits.
//!
//! # Invariants
//! - A missing key decodes to an empty collection.
//! - Record order is preserved across a write/read cycle.

use crate::model::note::Note;
use crate::repo::kv_repo::{KeyValueRepository, RepoResult};
use log::warn;
use std::collections::HashSet;

/// Storage key holding the serialized note array.
pub const NOTES_STORAGE_KEY: &str = "notes_v1";

/// Reads and writes the full note collection through a key/value backend.
pub struct NoteSnapshotRepository<R: KeyValueRepository> {
    kv: R,
}

impl<R: KeyValueRepository> NoteSnapshotRepository<R> {
    pub fn new(kv: R) -> Self {
        Self { kv }
    }

    /// Loads the stored collection.
    ///
    /// Returns `Ok(vec![])` when nothing was stored yet.
    ///
    /// # Errors
    /// - Backend read failures.
    /// - `RepoError::Codec` when the payload is not a JSON array of notes.
    pub fn load(&self) -> RepoResult<Vec<Note>> {
        let Some(payload) = self.kv.get(NOTES_STORAGE_KEY)? else {
            return Ok(Vec::new());
        };
        let notes: Vec<Note> = serde_json::from_str(&payload)?;
        let invalid = notes.iter().filter(|note| note.validate().is_err()).count();
        if invalid > 0 {
            // Kept verbatim; the next save of each note re-validates it.
            warn!("event=notes_load module=repo status=degraded invalid_records={invalid}");
        }
        Ok(dedupe_by_id(notes))
    }

    /// Replaces the stored collection with `notes`.
    pub fn save(&mut self, notes: &[Note]) -> RepoResult<()> {
        let payload = serde_json::to_string(notes)?;
        self.kv.set(NOTES_STORAGE_KEY, &payload)
    }

    pub fn backend(&self) -> &R {
        &self.kv
    }
}

fn dedupe_by_id(notes: Vec<Note>) -> Vec<Note> {
    let mut seen = HashSet::new();
    let before = notes.len();
    let kept: Vec<Note> = notes
        .into_iter()
        .filter(|note| seen.insert(note.id.clone()))
        .collect();
    if kept.len() != before {
        warn!(
            "event=notes_load module=repo status=degraded dropped_duplicates={}",
            before - kept.len()
        );
    }
    kept
}
