//! Domain logic for Museboard, independent of persistence and transport.
//!
//! Contains the slug/key resolver, input validation helpers, the shared
//! error type, and common type aliases. Nothing in this crate touches the
//! database; fallible collaborators are passed in as closures.

pub mod error;
pub mod slug;
pub mod types;
pub mod validate;
