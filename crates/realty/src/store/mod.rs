//! Access to the backing document store.
//!
//! Two backends implement [`DocumentStore`]: [`MongoStore`] for deployments
//! and [`MemoryStore`], a volatile store for local development and tests.
//! Backends report every failure; the availability policy for search reads
//! lives in the catalog facade, not here.

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::Document;

use crate::catalog::filter::Predicate;

/// Failure taxonomy for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("'{0}' is not a well-formed document id")]
    InvalidId(String),
    #[error("document not found")]
    NotFound,
    #[error("document store unavailable: {0}")]
    Unavailable(String),
    #[error("document store rejected the write: {0}")]
    Write(String),
}

/// Raw collection operations against the backing store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents in `collection` matching `predicate`.
    async fn find(
        &self,
        collection: &str,
        predicate: &Predicate,
    ) -> Result<Vec<Document>, StoreError>;

    /// Point lookup by store identity; `Ok(None)` when no document has `id`.
    async fn find_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<Option<Document>, StoreError>;

    /// Insert one document and return its assigned identity.
    async fn insert(&self, collection: &str, document: Document) -> Result<ObjectId, StoreError>;

    /// Number of documents currently in `collection`.
    async fn count(&self, collection: &str) -> Result<u64, StoreError>;
}
