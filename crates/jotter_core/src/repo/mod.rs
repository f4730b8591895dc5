//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key/value storage contract the note snapshot is written to.
//! - Isolate SQLite and JSON encoding details from the note store.
//!
//! # Invariants
//! - The whole note collection lives under one fixed key.
//! - Repository errors are typed; callers decide whether they are fatal.

pub mod kv_repo;
pub mod note_repo;
