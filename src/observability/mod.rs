//! Tracing setup for the CLI driver.
//!
//! The library itself only emits `tracing` spans and events; installing a
//! subscriber is the binary's responsibility so that embedders keep control
//! of their own observability pipeline.

pub mod init;

pub use init::init_tracing;
