//! Core domain logic for Jotter.
//! This crate is the single source of truth for note invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteId, NoteValidationError, BODY_MAX_CHARS, TITLE_MAX_CHARS};
pub use repo::kv_repo::{
    KeyValueRepository, MemoryKeyValueRepository, RepoError, RepoResult, SqliteKeyValueRepository,
};
pub use repo::note_repo::{NoteSnapshotRepository, NOTES_STORAGE_KEY};
pub use search::filter::filter_notes;
pub use service::editor::Draft;
pub use service::note_store::NoteStore;
pub use service::sidebar::{editor_pane, sidebar_view, EditorPane, SidebarItem, SidebarView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
