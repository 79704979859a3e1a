//! Record store abstraction.
//!
//! This module defines the [`RecordStore`] trait that abstracts over the
//! remote book collection endpoint. The trait is the seam between the entity
//! state controller and the wire transport: the controller only depends on
//! these four operations and their failure semantics, which also makes it
//! testable against an in-memory fake.
//!
//! # Design Philosophy
//!
//! The trait is minimal and mirrors the remote service contract exactly, not
//! a generic repository. Each call is a single request/response round trip
//! with no retries and no client-side timeout; a failure is reported once and
//! never automatically repeated.

use async_trait::async_trait;

use crate::domain::error::Result;
use crate::domain::Book;

/// Abstraction over the remote book collection endpoint.
///
/// Mutating operations intentionally return no body: the controller never
/// trusts a mutation response and always re-fetches the collection via
/// [`list`](Self::list) afterwards.
///
/// # Implementations
///
/// - [`HttpRecordStore`](crate::store::HttpRecordStore): reqwest-backed
///   client for the lending service (default)
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Retrieves all book records, in the order the service returns them.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfsyncError::Transport`](crate::domain::ShelfsyncError::Transport)
    /// on network failure, non-success status, or a malformed response body.
    async fn list(&self) -> Result<Vec<Book>>;

    /// Submits a book without an id; the service assigns one.
    ///
    /// The response body, if any, is not consumed.
    ///
    /// # Errors
    ///
    /// Returns a transport error on any remote failure.
    async fn create(&self, book: &Book) -> Result<()>;

    /// Submits a full book including its id; the service replaces the
    /// matching record.
    ///
    /// # Errors
    ///
    /// Returns a transport error on any remote failure.
    async fn update(&self, book: &Book) -> Result<()>;

    /// Removes the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns a transport error on any remote failure.
    async fn delete(&self, id: i64) -> Result<()>;
}
