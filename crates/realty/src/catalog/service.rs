//! Facade executing catalog operations against the configured store.

use std::sync::Arc;

use bson::oid::ObjectId;
use bson::Document;
use serde::Serialize;
use tracing::warn;

use super::filter::Predicate;
use crate::store::{DocumentStore, StoreError};

/// Store facade shared by the HTTP layer and the seeder.
///
/// Constructed once at startup around the configured [`DocumentStore`] and
/// passed by reference to every operation; no component reaches for an
/// ambient store handle.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn DocumentStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All documents in `collection` matching `predicate`.
    ///
    /// Search reads degrade instead of failing: any store error is logged and
    /// reported as an empty result, so an outage reads as "no matching
    /// listings". Callers that must observe failures use
    /// [`CatalogService::get_by_id`] or [`CatalogService::create`].
    pub async fn list(&self, collection: &str, predicate: &Predicate) -> Vec<Document> {
        match self.store.find(collection, predicate).await {
            Ok(documents) => documents,
            Err(error) => {
                warn!(collection, %error, "list degraded to an empty result");
                Vec::new()
            }
        }
    }

    /// Point lookup by the string form of a store identity.
    pub async fn get_by_id(&self, collection: &str, id: &str) -> Result<Document, StoreError> {
        let identity =
            ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))?;
        self.store
            .find_by_id(collection, identity)
            .await?
            .ok_or(StoreError::NotFound)
    }

    /// Insert `value` into `collection`, returning the assigned identity.
    pub async fn create<T: Serialize>(
        &self,
        collection: &str,
        value: &T,
    ) -> Result<ObjectId, StoreError> {
        let document =
            bson::to_document(value).map_err(|error| StoreError::Write(error.to_string()))?;
        self.store.insert(collection, document).await
    }

    /// Number of documents currently stored in `collection`.
    pub async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        self.store.count(collection).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FailingStore;

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn find(
            &self,
            _collection: &str,
            _predicate: &Predicate,
        ) -> Result<Vec<Document>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn find_by_id(
            &self,
            _collection: &str,
            _id: ObjectId,
        ) -> Result<Option<Document>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn insert(
            &self,
            _collection: &str,
            _document: Document,
        ) -> Result<ObjectId, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn count(&self, _collection: &str) -> Result<u64, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn list_swallows_store_failures() {
        let catalog = CatalogService::new(Arc::new(FailingStore));
        let documents = catalog.list("property", &Predicate::default()).await;
        assert!(documents.is_empty());
    }

    #[tokio::test]
    async fn malformed_id_is_rejected_before_the_store_is_touched() {
        let catalog = CatalogService::new(Arc::new(FailingStore));
        let error = catalog
            .get_by_id("property", "definitely-not-an-object-id")
            .await
            .expect_err("malformed id");
        assert!(matches!(error, StoreError::InvalidId(_)));
    }

    #[tokio::test]
    async fn writes_surface_store_failures() {
        let catalog = CatalogService::new(Arc::new(FailingStore));
        let error = catalog
            .create("inquiry", &bson::doc! { "name": "Ada" })
            .await
            .expect_err("unavailable store");
        assert!(matches!(error, StoreError::Unavailable(_)));
    }
}
