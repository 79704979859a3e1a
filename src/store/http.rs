//! HTTP implementation of the record store.
//!
//! Maps the [`RecordStore`] operations onto the lending service's REST
//! endpoints using a shared [`reqwest::Client`]. The store owns no state
//! beyond the client and base URL; it is a stateless request/response
//! mapping layer.
//!
//! Endpoints, matching the service:
//!
//! ```text
//! GET    {base}/books
//! POST   {base}/create-book
//! PUT    {base}/books/update_book
//! DELETE {base}/books/{id}
//! ```

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::error::Result;
use crate::domain::Book;
use crate::store::backend::RecordStore;

/// Reqwest-backed client for the book collection endpoint.
///
/// Cloning is cheap; the inner `reqwest::Client` holds a shared connection
/// pool. No retries and no timeout are configured here: the core reports a
/// failure once, and timeouts belong to the transport layer if a deployment
/// needs them.
#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    base_url: String,
    http: Client,
}

impl HttpRecordStore {
    /// Creates a store for the service at `base_url`.
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: Client::new(),
        }
    }

    /// Returns the configured base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn list(&self) -> Result<Vec<Book>> {
        let response = self
            .http
            .get(format!("{}/books", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        let books: Vec<Book> = response.json().await?;
        tracing::debug!(count = books.len(), "fetched book collection");
        Ok(books)
    }

    async fn create(&self, book: &Book) -> Result<()> {
        self.http
            .post(format!("{}/create-book", self.base_url))
            .json(book)
            .send()
            .await?
            .error_for_status()?;
        tracing::debug!(title = %book.title, "created book");
        Ok(())
    }

    async fn update(&self, book: &Book) -> Result<()> {
        self.http
            .put(format!("{}/books/update_book", self.base_url))
            .json(book)
            .send()
            .await?
            .error_for_status()?;
        tracing::debug!(id = ?book.id, "updated book");
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.http
            .delete(format!("{}/books/{id}", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        tracing::debug!(id, "deleted book");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/http_tests.rs"]
mod tests;
