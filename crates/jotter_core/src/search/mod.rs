//! Note search entry points.
//!
//! # Responsibility
//! - Filter the in-memory collection for the sidebar search box.
//! - Keep result ordering rules inside core.

pub mod filter;
