//! Core use-case services.
//!
//! # Responsibility
//! - Own application state and its mutation entry points.
//! - Keep front ends decoupled from storage details.

pub mod editor;
pub mod note_store;
pub mod sidebar;
