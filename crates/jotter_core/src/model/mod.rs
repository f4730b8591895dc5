//! Domain model for notes.
//!
//! # Responsibility
//! - Define the canonical note record shared by store, storage and views.
//!
//! # Invariants
//! - Every note is identified by a `NoteId` that is unique within a collection.
//! - Deletion is a hard delete; there are no tombstones.

pub mod note;
