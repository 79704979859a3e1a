//! View snapshot consumed by the presentation layer.
//!
//! The presentation layer is a pure consumer: it renders whatever this
//! snapshot contains and forwards user intents back into the controller. It
//! never mutates the canonical collection or the draft directly.

use crate::app::modal::ModalState;
use crate::domain::{Book, BookDraft};

/// Borrowed snapshot of everything the presentation layer renders.
///
/// Produced by [`Controller::view`](crate::app::Controller::view). The
/// snapshot is read-only; field edits and button presses flow back as
/// [`Intent`](crate::app::Intent) values.
#[derive(Debug, Clone, Copy)]
pub struct ViewState<'a> {
    /// The canonical collection, in the order the service returned it.
    pub books: &'a [Book],

    /// Which editing surface is open, if any.
    pub modal: ModalState,

    /// The draft bound to the open modal; `None` when the modal is closed.
    pub draft: Option<&'a BookDraft>,

    /// Whether a remote mutation is currently in flight.
    ///
    /// A presentation layer should disable its confirm and delete controls
    /// while this is set, closing the double-submission gap.
    pub mutation_in_flight: bool,
}
