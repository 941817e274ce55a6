use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::Document;

use super::{DocumentStore, StoreError};
use crate::catalog::filter::Predicate;

/// Volatile [`DocumentStore`] holding collections in process memory.
///
/// Serves local development when no `DATABASE_URL` is configured, and the
/// test suites. Contents are lost on shutdown.
#[derive(Default, Clone)]
pub struct MemoryStore {
    collections: Arc<Mutex<HashMap<String, Vec<Document>>>>,
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(
        &self,
        collection: &str,
        predicate: &Predicate,
    ) -> Result<Vec<Document>, StoreError> {
        let guard = self.collections.lock().expect("store mutex poisoned");
        Ok(guard
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| predicate.matches(document))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<Option<Document>, StoreError> {
        let guard = self.collections.lock().expect("store mutex poisoned");
        Ok(guard.get(collection).and_then(|documents| {
            documents
                .iter()
                .find(|document| matches!(document.get_object_id("_id"), Ok(oid) if oid == id))
                .cloned()
        }))
    }

    async fn insert(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<ObjectId, StoreError> {
        let id = ObjectId::new();
        document.insert("_id", id);
        let mut guard = self.collections.lock().expect("store mutex poisoned");
        guard.entry(collection.to_string()).or_default().push(document);
        Ok(id)
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        let guard = self.collections.lock().expect("store mutex poisoned");
        Ok(guard
            .get(collection)
            .map(|documents| documents.len() as u64)
            .unwrap_or(0))
    }
}
