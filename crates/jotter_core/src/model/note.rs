//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record and its identifier.
//! - Provide validation for field limits and timestamp ordering.
//!
//! # Invariants
//! - `id` is stable and never reassigned after creation.
//! - `created` is immutable; `updated >= created`.
//! - `title` holds at most `TITLE_MAX_CHARS` chars, `body` at most
//!   `BODY_MAX_CHARS` chars.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Maximum title length in Unicode scalar values.
pub const TITLE_MAX_CHARS: usize = 60;
/// Maximum body length in Unicode scalar values.
pub const BODY_MAX_CHARS: usize = 10_240;

/// Opaque note identifier.
///
/// Generated ids are hyphen-less UUID v4 strings, but any non-empty string
/// loaded from storage is accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Validation error for note field invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    EmptyId,
    TitleTooLong { chars: usize, max: usize },
    BodyTooLong { chars: usize, max: usize },
    UpdatedBeforeCreated,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "note id cannot be empty"),
            Self::TitleTooLong { chars, max } => {
                write!(f, "title has {chars} chars; at most {max} allowed")
            }
            Self::BodyTooLong { chars, max } => {
                write!(f, "body has {chars} chars; at most {max} allowed")
            }
            Self::UpdatedBeforeCreated => write!(f, "updated timestamp precedes created"),
        }
    }
}

impl Error for NoteValidationError {}

/// Canonical persisted note record.
///
/// Field names match the stored JSON shape:
/// `{"id","title","body","created","updated"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub body: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Note {
    /// Creates an empty note with a generated id, stamped at `now`.
    pub fn new_empty(now: DateTime<Utc>) -> Self {
        Self {
            id: NoteId::generate(),
            title: String::new(),
            body: String::new(),
            created: now,
            updated: now,
        }
    }

    /// Replaces title/body and refreshes `updated`.
    ///
    /// `updated` never moves before `created`, even if the clock went back.
    pub fn apply_edit(&mut self, title: String, body: String, now: DateTime<Utc>) {
        self.title = title;
        self.body = body;
        self.updated = now.max(self.created);
    }

    /// Validates field limits and timestamp ordering.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.id.is_empty() {
            return Err(NoteValidationError::EmptyId);
        }
        validate_fields(&self.title, &self.body)?;
        if self.updated < self.created {
            return Err(NoteValidationError::UpdatedBeforeCreated);
        }
        Ok(())
    }
}

/// Validates editable field lengths without touching a note.
pub fn validate_fields(title: &str, body: &str) -> Result<(), NoteValidationError> {
    let title_chars = title.chars().count();
    if title_chars > TITLE_MAX_CHARS {
        return Err(NoteValidationError::TitleTooLong {
            chars: title_chars,
            max: TITLE_MAX_CHARS,
        });
    }
    let body_chars = body.chars().count();
    if body_chars > BODY_MAX_CHARS {
        return Err(NoteValidationError::BodyTooLong {
            chars: body_chars,
            max: BODY_MAX_CHARS,
        });
    }
    Ok(())
}
