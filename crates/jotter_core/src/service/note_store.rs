//! Note store: the single owner of application state.
//!
//! # Responsibility
//! - Hold the note collection, the active selection and the editor draft.
//! - Expose the only mutation entry points (`create`, `delete`, `save`,
//!   `select`, `save_draft`).
//! - Mirror the collection to storage after every change.
//!
//! # Invariants
//! - Note ids are unique within the collection.
//! - `id` and `created` never change after creation.
//! - Persistence is best-effort: a failed write is logged and remembered,
//!   never returned, and never rolls back the in-memory change.
//! - Switching the selection discards unsaved draft edits.

use crate::model::note::{validate_fields, Note, NoteId, NoteValidationError};
use crate::repo::kv_repo::KeyValueRepository;
use crate::repo::note_repo::NoteSnapshotRepository;
use crate::search::filter::filter_notes;
use crate::service::editor::Draft;
use chrono::Utc;
use log::{debug, info, warn};

/// Owned application state with defined mutation entry points.
pub struct NoteStore<R: KeyValueRepository> {
    notes: Vec<Note>,
    active: Option<NoteId>,
    draft: Draft,
    repo: NoteSnapshotRepository<R>,
    last_persist_error: Option<String>,
}

impl<R: KeyValueRepository> NoteStore<R> {
    /// Loads the stored collection from `kv`.
    ///
    /// Absent or unreadable data yields an empty collection.
    pub fn open(kv: R) -> Self {
        let repo = NoteSnapshotRepository::new(kv);
        let notes = match repo.load() {
            Ok(notes) => {
                info!(
                    "event=notes_load module=store status=ok count={}",
                    notes.len()
                );
                notes
            }
            Err(err) => {
                warn!(
                    "event=notes_load module=store status=error fallback=empty error={}",
                    err
                );
                Vec::new()
            }
        };

        Self {
            notes,
            active: None,
            draft: Draft::default(),
            repo,
            last_persist_error: None,
        }
    }

    /// Full collection in stored order (newest created first).
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    pub fn active_id(&self) -> Option<&NoteId> {
        self.active.as_ref()
    }

    pub fn active_note(&self) -> Option<&Note> {
        self.active.as_ref().and_then(|id| self.get(id))
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// Notes matching `query`, most recently updated first.
    pub fn visible(&self, query: &str) -> Vec<&Note> {
        filter_notes(&self.notes, query)
    }

    /// Last persistence failure message, if the latest write failed.
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    pub fn repository(&self) -> &NoteSnapshotRepository<R> {
        &self.repo
    }

    /// Inserts a new empty note at the front and makes it active.
    pub fn create(&mut self) -> NoteId {
        let note = Note::new_empty(Utc::now());
        let id = note.id.clone();
        self.notes.insert(0, note);
        self.active = Some(id.clone());
        self.draft.clear();
        info!("event=note_create module=store status=ok note_id={id}");
        self.persist();
        id
    }

    /// Removes the note with `id`.
    ///
    /// Clears the active selection and draft when the removed note was
    /// active. Returns `false` when no such note exists.
    pub fn delete(&mut self, id: &NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| &note.id != id);
        if self.notes.len() == before {
            debug!("event=note_delete module=store status=skipped reason=not_found note_id={id}");
            return false;
        }

        if self.active.as_ref() == Some(id) {
            self.active = None;
            self.draft.clear();
        }
        info!("event=note_delete module=store status=ok note_id={id}");
        self.persist();
        true
    }

    /// Replaces title/body of note `id` and refreshes its `updated` stamp.
    ///
    /// Returns `Ok(false)` without touching anything when `id` is absent.
    ///
    /// # Errors
    /// - `NoteValidationError` when title or body exceed their limits; the
    ///   note is left unchanged.
    pub fn save(
        &mut self,
        id: &NoteId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<bool, NoteValidationError> {
        let Some(note) = self.notes.iter_mut().find(|note| &note.id == id) else {
            debug!("event=note_save module=store status=skipped reason=not_found note_id={id}");
            return Ok(false);
        };

        let title = title.into();
        let body = body.into();
        validate_fields(&title, &body)?;
        note.apply_edit(title, body, Utc::now());

        if self.active.as_ref() == Some(id) {
            self.draft.load(note);
        }
        info!("event=note_save module=store status=ok note_id={id}");
        self.persist();
        Ok(true)
    }

    /// Commits the draft into the active note.
    ///
    /// Returns `Ok(false)` when nothing is selected.
    pub fn save_draft(&mut self) -> Result<bool, NoteValidationError> {
        let Some(id) = self.active.clone() else {
            return Ok(false);
        };
        let title = self.draft.title().to_string();
        let body = self.draft.body().to_string();
        self.save(&id, title, body)
    }

    /// Makes `id` the active note and loads it into the draft.
    ///
    /// An empty or unknown `id` clears both the selection and the draft.
    /// Unsaved draft edits are discarded either way.
    pub fn select(&mut self, id: &str) {
        let found = if id.is_empty() {
            None
        } else {
            self.notes.iter().find(|note| note.id.as_str() == id)
        };

        match found {
            Some(note) => {
                self.draft.load(note);
                self.active = Some(note.id.clone());
            }
            None => {
                self.draft.clear();
                self.active = None;
            }
        }
    }

    fn persist(&mut self) {
        match self.repo.save(&self.notes) {
            Ok(()) => {
                self.last_persist_error = None;
            }
            Err(err) => {
                warn!(
                    "event=notes_persist module=store status=error count={} error={}",
                    self.notes.len(),
                    err
                );
                self.last_persist_error = Some(err.to_string());
            }
        }
    }
}
