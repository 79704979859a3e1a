//! Book domain model, drafts, and form patches.
//!
//! This module defines the core `Book` record mirrored from the remote
//! lending service, plus the `BookDraft` scratch type bound to an open
//! editing modal and the `DraftPatch` partial update emitted by a form.
//!
//! Drafts are deliberately detached from the canonical collection: they
//! are created when a modal opens, mutated field by field, and discarded
//! when the modal closes. Only a successful re-fetch from the remote
//! store produces collection members.

use serde::{Deserialize, Serialize};

use super::error::{Result, ShelfsyncError};

/// Default publication year for a new-book draft.
const DEFAULT_PUBLISHED_DATE: i64 = 2000;

/// A book record as held by the remote lending service.
///
/// The wire format uses snake_case field names (`published_date`), which
/// the serde derive produces directly from the Rust field names.
///
/// # Fields
///
/// - `id`: Service-assigned identifier. `None` for a record that has not
///   been persisted yet; serialized as `null` on create, which the
///   service ignores when assigning its own id.
/// - `title`, `author`, `description`: Free text, no length constraints
///   enforced client-side.
/// - `rating`: Integer rating.
/// - `published_date`: Publication year as an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: i64,
    pub published_date: i64,
}

/// A mutable scratch copy of a book's fields bound to an open modal.
///
/// Two kinds exist, distinguished by `id`:
/// - a *new-book draft* (`id == None`) starting from defined defaults,
/// - an *edit draft* (`id == Some`) starting as a copy of the targeted
///   canonical record.
///
/// A draft is never placed into the canonical collection. Confirming it
/// triggers a remote mutation followed by an authoritative re-fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    /// Identity carried over from the canonical record for edit drafts,
    /// `None` for new-book drafts.
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: i64,
    pub published_date: i64,
}

impl BookDraft {
    /// Creates a new-book draft with default field values.
    ///
    /// Defaults match the initial form state of the lending UI: empty
    /// strings, rating 0, publication year 2000.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: None,
            title: String::new(),
            author: String::new(),
            description: String::new(),
            rating: 0,
            published_date: DEFAULT_PUBLISHED_DATE,
        }
    }

    /// Creates an edit draft as a field-for-field copy of a canonical record.
    #[must_use]
    pub fn from_book(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            description: book.description.clone(),
            rating: book.rating,
            published_date: book.published_date,
        }
    }

    /// Merges a partial field update into the draft.
    ///
    /// Numeric fields arrive as raw form text and are parsed strictly.
    /// The patch is applied atomically: if any numeric value fails to
    /// parse, the whole patch is rejected and the draft is left
    /// untouched. This replaces the original UI's submit-time `parseInt`,
    /// which could silently produce non-numeric values.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfsyncError::InvalidField`] when `rating` or
    /// `published_date` is not integer-parseable.
    pub fn apply_patch(&mut self, patch: DraftPatch) -> Result<()> {
        let rating = patch
            .rating
            .as_deref()
            .map(|raw| parse_numeric_field("rating", raw))
            .transpose()?;
        let published_date = patch
            .published_date
            .as_deref()
            .map(|raw| parse_numeric_field("published_date", raw))
            .transpose()?;

        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(rating) = rating {
            self.rating = rating;
        }
        if let Some(published_date) = published_date {
            self.published_date = published_date;
        }
        Ok(())
    }

    /// Converts the draft into a full `Book` for submission.
    ///
    /// New-book drafts yield `id == None` (serialized as `null`), edit
    /// drafts carry the original record's id.
    #[must_use]
    pub fn to_book(&self) -> Book {
        Book {
            id: self.id,
            title: self.title.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
            rating: self.rating,
            published_date: self.published_date,
        }
    }
}

impl Default for BookDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// A partial field update emitted by an editing form.
///
/// All fields are optional; absent fields leave the draft value
/// untouched. Numeric fields carry the raw form text and are parsed when
/// the patch is applied, see [`BookDraft::apply_patch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    /// Raw form input for the rating field.
    pub rating: Option<String>,
    /// Raw form input for the publication year field.
    pub published_date: Option<String>,
}

/// Strictly parses a numeric form field, trimming surrounding whitespace.
fn parse_numeric_field(field: &'static str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ShelfsyncError::InvalidField {
            field,
            value: raw.to_string(),
        })
}
