//! Record store layer: the boundary to the remote lending service.
//!
//! - [`backend`]: The [`RecordStore`] trait the controller depends on
//! - [`http`]: Reqwest-backed implementation of that trait

pub mod backend;
pub mod http;

pub use backend::RecordStore;
pub use http::HttpRecordStore;
