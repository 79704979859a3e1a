//! Application layer: entity state controller and modal workflow.
//!
//! This layer sits between the presentation collaborator and the record
//! store, and is the only place allowed to mutate the canonical collection.
//!
//! # Modules
//!
//! - [`controller`]: The entity state controller owning collection, draft,
//!   and modal state
//! - [`intents`]: Presentation-layer intents and their dispatch
//! - [`modal`]: Modal workflow state machine
//! - [`view`]: Read-only snapshot consumed by the presentation layer

pub mod controller;
pub mod intents;
pub mod modal;
pub mod view;

pub use controller::Controller;
pub use intents::Intent;
pub use modal::ModalState;
pub use view::ViewState;
