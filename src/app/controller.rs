//! Entity state controller: the single owner of client-side book state.
//!
//! The controller mediates between presentation-layer intents and the record
//! store. It owns three pieces of state and nothing else touches them:
//!
//! - the **canonical collection** of books, always exactly the most recent
//!   successful `list` response (order preserved, no client-side sort),
//! - the **draft** bound to whichever editing modal is open,
//! - the **modal workflow** state gating which mutation is in flight.
//!
//! # Refresh-after-mutation
//!
//! Every successful create, update, or delete is followed by a full
//! [`refresh`](Controller::refresh) instead of patching the collection
//! locally. This trades an extra round trip for a hard consistency
//! guarantee: the collection is always what the remote store reports, never
//! a client-side approximation. Implementations must not replace this with
//! optimistic updates.
//!
//! # Concurrency
//!
//! The controller is single-threaded and event-driven: every operation takes
//! `&mut self`, so no other core operation can run underneath an in-flight
//! remote call and no locking is needed. An additional in-flight flag guards
//! confirm and delete against double submission at the API boundary and is
//! surfaced through [`ViewState`] so a presentation layer can disable its
//! confirm control.

use crate::app::modal::ModalState;
use crate::app::view::ViewState;
use crate::domain::error::{Result, ShelfsyncError};
use crate::domain::{Book, BookDraft, DraftPatch};
use crate::store::RecordStore;

/// Owner of the canonical book collection, the active draft, and the modal
/// workflow state.
///
/// Generic over the record store so the state-transition rules can be tested
/// against an in-memory fake while production wires in
/// [`HttpRecordStore`](crate::store::HttpRecordStore).
///
/// Failures are never fatal: after any error the controller remains usable
/// and all local state is exactly as it was before the failing call, except
/// that a failed confirm keeps the modal open so the user can retry without
/// re-entering data.
#[derive(Debug)]
pub struct Controller<S: RecordStore> {
    store: S,
    books: Vec<Book>,
    draft: Option<BookDraft>,
    modal: ModalState,
    mutation_in_flight: bool,
}

impl<S: RecordStore> Controller<S> {
    /// Creates a controller with an empty canonical collection.
    ///
    /// Callers perform the initial [`refresh`](Self::refresh) themselves
    /// (the CLI driver does this at startup), so that a failing first fetch
    /// still yields a usable controller.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            books: Vec::new(),
            draft: None,
            modal: ModalState::Closed,
            mutation_in_flight: false,
        }
    }

    /// Returns a read-only snapshot for the presentation layer.
    #[must_use]
    pub fn view(&self) -> ViewState<'_> {
        ViewState {
            books: &self.books,
            modal: self.modal,
            draft: self.draft.as_ref(),
            mutation_in_flight: self.mutation_in_flight,
        }
    }

    /// Fetches the collection and atomically replaces the local copy.
    ///
    /// On failure the previous canonical collection is left untouched.
    /// Called once at startup and after every successful mutation.
    ///
    /// # Errors
    ///
    /// Propagates the transport error from [`RecordStore::list`].
    pub async fn refresh(&mut self) -> Result<()> {
        let books = self.store.list().await.inspect_err(|error| {
            tracing::warn!(%error, "refresh failed, keeping previous collection");
        })?;
        tracing::debug!(count = books.len(), "canonical collection replaced");
        self.books = books;
        Ok(())
    }

    /// Opens the create modal bound to a new-book draft with default values.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfsyncError::Contract`] if a modal is already open; the
    /// presentation layer must not expose both open triggers at once.
    pub fn begin_create(&mut self) -> Result<()> {
        self.require_closed("begin_create")?;
        self.draft = Some(BookDraft::new());
        self.modal = ModalState::CreateOpen;
        tracing::debug!("create modal opened");
        Ok(())
    }

    /// Opens the edit modal bound to a copy of the canonical record `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfsyncError::Contract`] if a modal is already open or if
    /// `id` is not in the canonical collection. The presentation layer only
    /// ever offers edit buttons for records it was handed, so an unknown id
    /// is a caller bug, not a normal error path.
    pub fn begin_edit(&mut self, id: i64) -> Result<()> {
        self.require_closed("begin_edit")?;
        let book = self
            .books
            .iter()
            .find(|book| book.id == Some(id))
            .ok_or_else(|| {
                ShelfsyncError::Contract(format!("begin_edit: no canonical record with id {id}"))
            })?;
        self.draft = Some(BookDraft::from_book(book));
        self.modal = ModalState::EditOpen { id };
        tracing::debug!(id, "edit modal opened");
        Ok(())
    }

    /// Merges a partial field update into the open draft.
    ///
    /// Does not touch the canonical collection. Numeric fields are parsed
    /// from the raw form text; a non-parseable value rejects the whole patch
    /// and leaves the draft unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfsyncError::Contract`] when no modal is open, or
    /// [`ShelfsyncError::InvalidField`] on a non-parseable numeric value.
    pub fn edit_field(&mut self, patch: DraftPatch) -> Result<()> {
        let draft = self.draft.as_mut().ok_or_else(|| {
            ShelfsyncError::Contract("edit_field: no modal is open".to_string())
        })?;
        draft.apply_patch(patch)
    }

    /// Submits the new-book draft and re-fetches the collection.
    ///
    /// On success the modal closes, the draft is discarded, and the
    /// collection is refreshed from the store. On create failure the modal
    /// stays open with the draft intact so the user can retry.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfsyncError::Contract`] when the create modal is not
    /// open or a mutation is already in flight, otherwise propagates the
    /// transport error from the create call or the follow-up refresh.
    pub async fn confirm_create(&mut self) -> Result<()> {
        if self.modal != ModalState::CreateOpen {
            return Err(ShelfsyncError::Contract(
                "confirm_create: create modal is not open".to_string(),
            ));
        }
        let book = self.open_draft()?.to_book();
        self.begin_submission("confirm_create")?;
        let result = self.store.create(&book).await;
        self.mutation_in_flight = false;
        self.finish_mutation(result, "create")?;
        self.close_modal();
        self.refresh().await
    }

    /// Submits the edit draft as a full-record update and re-fetches.
    ///
    /// The draft carries the original record's id; edits replace the whole
    /// record, never individual fields. Failure keeps the modal open with
    /// the draft intact.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfsyncError::Contract`] when the edit modal is not open
    /// or a mutation is already in flight, otherwise propagates the
    /// transport error from the update call or the follow-up refresh.
    pub async fn confirm_edit(&mut self) -> Result<()> {
        let ModalState::EditOpen { id } = self.modal else {
            return Err(ShelfsyncError::Contract(
                "confirm_edit: edit modal is not open".to_string(),
            ));
        };
        let book = self.open_draft()?.to_book();
        debug_assert_eq!(book.id, Some(id), "edit draft lost its identity");
        self.begin_submission("confirm_edit")?;
        let result = self.store.update(&book).await;
        self.mutation_in_flight = false;
        self.finish_mutation(result, "update")?;
        self.close_modal();
        self.refresh().await
    }

    /// Discards the open draft and closes the modal without contacting the
    /// remote store. No-op when no modal is open.
    pub fn cancel_modal(&mut self) {
        if self.modal.is_open() {
            tracing::debug!(modal = ?self.modal, "modal cancelled, draft discarded");
        }
        self.close_modal();
    }

    /// Deletes the record with `id` and re-fetches the collection.
    ///
    /// Independent of any open modal. The record is never optimistically
    /// removed: on failure the collection is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfsyncError::Contract`] when a mutation is already in
    /// flight, otherwise propagates the transport error from the delete call
    /// or the follow-up refresh.
    pub async fn delete_record(&mut self, id: i64) -> Result<()> {
        self.begin_submission("delete_record")?;
        let result = self.store.delete(id).await;
        self.mutation_in_flight = false;
        self.finish_mutation(result, "delete")?;
        self.refresh().await
    }

    /// Arms the double-submission guard, rejecting re-entry.
    fn begin_submission(&mut self, operation: &str) -> Result<()> {
        if self.mutation_in_flight {
            return Err(ShelfsyncError::Contract(format!(
                "{operation}: a mutation is already in flight"
            )));
        }
        self.mutation_in_flight = true;
        Ok(())
    }

    /// Logs a failed mutation; local state is unchanged either way.
    fn finish_mutation(&self, result: Result<()>, operation: &'static str) -> Result<()> {
        result.inspect_err(|error| {
            tracing::warn!(operation, %error, "mutation failed, local state unchanged");
        })
    }

    fn open_draft(&self) -> Result<&BookDraft> {
        self.draft.as_ref().ok_or_else(|| {
            ShelfsyncError::Contract("no draft is bound to the open modal".to_string())
        })
    }

    fn require_closed(&self, operation: &str) -> Result<()> {
        if self.modal.is_open() {
            return Err(ShelfsyncError::Contract(format!(
                "{operation}: a modal is already open"
            )));
        }
        Ok(())
    }

    fn close_modal(&mut self) {
        self.draft = None;
        self.modal = ModalState::Closed;
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
