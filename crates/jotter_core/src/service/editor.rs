//! Editor draft buffer.
//!
//! # Responsibility
//! - Hold in-progress title/body edits apart from the committed note.
//!
//! # Invariants
//! - Draft fields never exceed the note field limits; setters truncate.
//! - Nothing here persists; committing goes through `NoteStore::save_draft`.

use crate::model::note::{Note, BODY_MAX_CHARS, TITLE_MAX_CHARS};

/// Unsaved title/body edits for the active note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    title: String,
    body: String,
}

impl Draft {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Replaces the title, keeping at most `TITLE_MAX_CHARS` chars.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = truncate_chars(title.into(), TITLE_MAX_CHARS);
    }

    /// Replaces the body, keeping at most `BODY_MAX_CHARS` chars.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = truncate_chars(body.into(), BODY_MAX_CHARS);
    }

    /// Adds `line` to the end of the body on its own line.
    pub fn append_body_line(&mut self, line: &str) {
        let mut body = std::mem::take(&mut self.body);
        if !body.is_empty() {
            body.push('\n');
        }
        body.push_str(line);
        self.set_body(body);
    }

    /// Returns whether the draft differs from the committed note.
    pub fn is_dirty(&self, note: &Note) -> bool {
        self.title != note.title || self.body != note.body
    }

    /// Copies the committed fields, clipped to the field limits.
    ///
    /// Stored notes may exceed the limits; the clipped draft stays savable.
    pub(crate) fn load(&mut self, note: &Note) {
        self.set_title(note.title.as_str());
        self.set_body(note.body.as_str());
    }

    pub(crate) fn clear(&mut self) {
        self.title.clear();
        self.body.clear();
    }
}

fn truncate_chars(mut value: String, max_chars: usize) -> String {
    if let Some((byte_idx, _)) = value.char_indices().nth(max_chars) {
        value.truncate(byte_idx);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::{truncate_chars, Draft};
    use crate::model::note::{Note, BODY_MAX_CHARS, TITLE_MAX_CHARS};
    use chrono::Utc;

    #[test]
    fn setters_truncate_to_field_limits() {
        let mut draft = Draft::default();
        draft.set_title("x".repeat(TITLE_MAX_CHARS + 10));
        draft.set_body("y".repeat(BODY_MAX_CHARS + 1));
        assert_eq!(draft.title().chars().count(), TITLE_MAX_CHARS);
        assert_eq!(draft.body().chars().count(), BODY_MAX_CHARS);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("ééé".to_string(), 2), "éé");
        assert_eq!(truncate_chars("ab".to_string(), 5), "ab");
    }

    #[test]
    fn append_joins_lines_with_newline() {
        let mut draft = Draft::default();
        draft.append_body_line("first");
        draft.append_body_line("second");
        assert_eq!(draft.body(), "first\nsecond");
    }

    #[test]
    fn dirty_tracks_difference_from_committed_note() {
        let mut note = Note::new_empty(Utc::now());
        note.title = "Foo".into();
        let mut draft = Draft::default();
        draft.load(&note);
        assert!(!draft.is_dirty(&note));
        draft.set_body("changed");
        assert!(draft.is_dirty(&note));
    }
}
