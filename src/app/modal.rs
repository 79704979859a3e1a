//! Modal workflow state machine.
//!
//! A single exclusive editing surface gates which mutation is in flight:
//! either the create form or the edit form is open, never both. The
//! controller owns the transitions; this module only defines the states.
//!
//! # Transitions
//!
//! ```text
//! Closed ──begin_create()──────────▶ CreateOpen
//! Closed ──begin_edit(id)──────────▶ EditOpen { id }
//! CreateOpen ──confirm ok/cancel──▶ Closed
//! EditOpen   ──confirm ok/cancel──▶ Closed
//! ```
//!
//! Opening a modal while one is already open is a contract violation on the
//! presentation layer, reported by the controller rather than silently
//! switching drafts.

/// Which editing surface is currently visible, if any.
///
/// At most one modal is open at any time. While a modal is open the
/// controller holds the draft it is bound to; when it closes the draft is
/// discarded, never merged into the canonical collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    /// No editing surface is visible.
    Closed,

    /// The create form is open, bound to a new-book draft.
    CreateOpen,

    /// The edit form is open, bound to an edit draft copied from the
    /// canonical record with this id.
    EditOpen {
        /// Id of the record being edited.
        id: i64,
    },
}

impl ModalState {
    /// Returns `true` when either editing surface is visible.
    #[must_use]
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}
