//! Presentation-layer intents and their dispatch.
//!
//! The presentation layer never calls controller operations directly; it
//! emits [`Intent`] values (field edits, button presses) which are applied
//! one at a time. This keeps the control flow unidirectional:
//!
//! ```text
//! Presentation → Intent → Controller → RecordStore → remote service
//!      ▲                                                   │
//!      └───────────── ViewState ◀── refresh ◀──────────────┘
//! ```

use crate::app::controller::Controller;
use crate::domain::error::Result;
use crate::domain::DraftPatch;
use crate::store::RecordStore;

/// A user intent forwarded by the presentation layer.
///
/// Each variant maps to exactly one controller operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Re-fetch the canonical collection.
    Refresh,
    /// Open the create modal with a default draft.
    BeginCreate,
    /// Open the edit modal for the canonical record with this id.
    BeginEdit {
        /// Id of the record to edit.
        id: i64,
    },
    /// Merge a partial field update into the open draft.
    EditField(DraftPatch),
    /// Submit the new-book draft.
    ConfirmCreate,
    /// Submit the edit draft as a full-record update.
    ConfirmEdit,
    /// Discard the open draft and close the modal.
    CancelModal,
    /// Delete the record with this id, independent of any open modal.
    DeleteRecord {
        /// Id of the record to delete.
        id: i64,
    },
}

impl<S: RecordStore> Controller<S> {
    /// Applies a single presentation-layer intent.
    ///
    /// Intents are processed one at a time; the caller awaits each before
    /// issuing the next, which is what serializes mutations as seen by the
    /// canonical collection.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation; see the individual
    /// controller methods for their failure semantics.
    pub async fn apply(&mut self, intent: Intent) -> Result<()> {
        tracing::debug!(intent = ?intent_name(&intent), "applying intent");
        match intent {
            Intent::Refresh => self.refresh().await,
            Intent::BeginCreate => self.begin_create(),
            Intent::BeginEdit { id } => self.begin_edit(id),
            Intent::EditField(patch) => self.edit_field(patch),
            Intent::ConfirmCreate => self.confirm_create().await,
            Intent::ConfirmEdit => self.confirm_edit().await,
            Intent::CancelModal => {
                self.cancel_modal();
                Ok(())
            }
            Intent::DeleteRecord { id } => self.delete_record(id).await,
        }
    }
}

/// Stable name of an intent for log lines, without draft field contents.
fn intent_name(intent: &Intent) -> &'static str {
    match intent {
        Intent::Refresh => "refresh",
        Intent::BeginCreate => "begin_create",
        Intent::BeginEdit { .. } => "begin_edit",
        Intent::EditField(_) => "edit_field",
        Intent::ConfirmCreate => "confirm_create",
        Intent::ConfirmEdit => "confirm_edit",
        Intent::CancelModal => "cancel_modal",
        Intent::DeleteRecord { .. } => "delete_record",
    }
}
