//! shelfsync: client-side state synchronization for a book lending service.
//!
//! The crate keeps an in-memory view of a remote book collection in sync
//! through four CRUD operations, with a modal-based editing workflow gating
//! which mutation is in flight. The canonical collection is never patched
//! locally: every successful mutation is followed by an authoritative
//! re-fetch, so the local view is always exactly what the service reports.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  Presentation collaborator (out of crate)        │  ← renders ViewState,
//! └──────────────────────────────────────────────────┘    emits Intents
//!                        │
//! ┌──────────────────────────────────────────────────┐
//! │  Application Layer (app/)                        │  ← Controller,
//! │  - Entity state controller                       │    ModalState,
//! │  - Modal workflow state machine                  │    Intent dispatch
//! └──────────────────────────────────────────────────┘
//!                        │
//! ┌──────────────────────────────────────────────────┐
//! │  Record Store (store/)                           │  ← RecordStore trait,
//! │  - reqwest HTTP client                           │    HttpRecordStore
//! └──────────────────────────────────────────────────┘
//!                        │
//! ┌──────────────────────────────────────────────────┐
//! │  Domain (domain/): Book, drafts, errors          │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use shelfsync::{Controller, HttpRecordStore, Intent};
//!
//! # async fn run() -> shelfsync::Result<()> {
//! let store = HttpRecordStore::new("http://localhost:8000");
//! let mut controller = Controller::new(store);
//! controller.refresh().await?;
//!
//! controller.apply(Intent::BeginCreate).await?;
//! controller.apply(Intent::EditField(shelfsync::DraftPatch {
//!     title: Some("Dune".to_string()),
//!     rating: Some("5".to_string()),
//!     ..Default::default()
//! })).await?;
//! controller.apply(Intent::ConfirmCreate).await?;
//!
//! for book in controller.view().books {
//!     println!("{} by {}", book.title, book.author);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Key Design Decisions
//!
//! ## Refresh-after-mutation
//!
//! Every create, update, and delete is followed by a full re-fetch instead
//! of a local patch. This trades extra round trips for a hard consistency
//! guarantee and eliminates an entire class of drift bugs (stale fields
//! after a partially failed update).
//!
//! ## Failures are local no-ops
//!
//! A failed remote call is reported once, never retried, and leaves the
//! collection, draft, and modal state exactly as they were. The one
//! exception: a failed confirm keeps the modal open so unsaved input
//! survives.

pub mod app;
pub mod config;
pub mod domain;
pub mod observability;
pub mod store;

pub use app::{Controller, Intent, ModalState, ViewState};
pub use config::Config;
pub use domain::{Book, BookDraft, DraftPatch, Result, ShelfsyncError};
pub use store::{HttpRecordStore, RecordStore};
