//! Read-only view projections for the sidebar and the editor pane.
//!
//! # Responsibility
//! - Derive list labels, body previews and empty-state messages from the
//!   store so every front end renders the same text.

use crate::model::note::{Note, NoteId};
use crate::repo::kv_repo::KeyValueRepository;
use crate::service::editor::Draft;
use crate::service::note_store::NoteStore;
use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

pub const UNTITLED_LABEL: &str = "(untitled)";
pub const PREVIEW_MAX_CHARS: usize = 28;
pub const EMPTY_LIST_MESSAGE: &str = "No notes found.";
pub const NO_NOTES_MESSAGE: &str = "No notes yet. Click + New Note to get started!";
pub const SELECT_NOTE_MESSAGE: &str = "Select a note from the left to view or edit.";
pub const DELETE_CONFIRM_PROMPT: &str = "Are you sure you want to permanently delete this note?";

/// One row of the note list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub id: NoteId,
    /// Title, or `UNTITLED_LABEL` when the title is empty.
    pub label: String,
    pub untitled: bool,
    pub preview: String,
    pub active: bool,
}

/// Filtered note list plus the message to show when it is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    pub items: Vec<SidebarItem>,
    pub empty_message: Option<&'static str>,
}

/// What the editor area shows.
#[derive(Debug, PartialEq, Eq)]
pub enum EditorPane<'a> {
    Placeholder(&'static str),
    Editing {
        note: &'a Note,
        draft: &'a Draft,
        dirty: bool,
    },
}

/// Builds the sidebar for the current search `query`.
pub fn sidebar_view<R: KeyValueRepository>(store: &NoteStore<R>, query: &str) -> SidebarView {
    let active = store.active_id();
    let items: Vec<SidebarItem> = store
        .visible(query)
        .into_iter()
        .map(|note| SidebarItem {
            id: note.id.clone(),
            label: if note.title.is_empty() {
                UNTITLED_LABEL.to_string()
            } else {
                note.title.clone()
            },
            untitled: note.title.is_empty(),
            preview: body_preview(&note.body),
            active: active == Some(&note.id),
        })
        .collect();
    let empty_message = items.is_empty().then_some(EMPTY_LIST_MESSAGE);
    SidebarView {
        items,
        empty_message,
    }
}

/// Builds the editor pane for the active selection.
pub fn editor_pane<R: KeyValueRepository>(store: &NoteStore<R>) -> EditorPane<'_> {
    match store.active_note() {
        Some(note) => EditorPane::Editing {
            note,
            draft: store.draft(),
            dirty: store.draft().is_dirty(note),
        },
        None if store.is_empty() => EditorPane::Placeholder(NO_NOTES_MESSAGE),
        None => EditorPane::Placeholder(SELECT_NOTE_MESSAGE),
    }
}

/// Collapses whitespace runs and keeps the first `PREVIEW_MAX_CHARS` chars.
pub fn body_preview(body: &str) -> String {
    WHITESPACE_RE
        .replace_all(body.trim(), " ")
        .chars()
        .take(PREVIEW_MAX_CHARS)
        .collect()
}

/// `Last updated: ...` footer in the local time zone.
pub fn last_updated_label(note: &Note) -> String {
    format!(
        "Last updated: {}",
        note.updated
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
    )
}
