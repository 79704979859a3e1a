//! Domain layer for shelfsync.
//!
//! Core types for the book-lending client, independent of the HTTP transport
//! and of any presentation concern.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`book`]: Book record, drafts, and form patches

pub mod book;
pub mod error;

pub use book::{Book, BookDraft, DraftPatch};
pub use error::{Result, ShelfsyncError};
