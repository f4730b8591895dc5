//! Case-insensitive substring filter over the note collection.
//!
//! # Invariants
//! - A note matches when its title or body contains the query, ignoring case.
//! - Results are ordered by `updated` descending; ties keep collection order.
//! - An empty query matches every note.

use crate::model::note::Note;

/// Returns notes matching `query`, most recently updated first.
///
/// The query is matched as typed; surrounding whitespace is significant.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    let needle = query.to_lowercase();
    let mut hits: Vec<&Note> = notes
        .iter()
        .filter(|note| note_matches(note, &needle))
        .collect();
    hits.sort_by(|a, b| b.updated.cmp(&a.updated));
    hits
}

/// Returns whether `note` contains the already lowercased `needle`.
fn note_matches(note: &Note, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    note.title.to_lowercase().contains(needle) || note.body.to_lowercase().contains(needle)
}
