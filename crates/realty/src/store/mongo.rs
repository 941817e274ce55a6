use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{doc, Bson, Document};
use futures_util::stream::TryStreamExt;
use mongodb::error::ErrorKind;
use mongodb::{Client, Database};

use super::{DocumentStore, StoreError};
use crate::catalog::filter::{Clause, Constraint, Predicate};

/// MongoDB-backed [`DocumentStore`].
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connect to the deployment at `uri` and scope all operations to
    /// `database`.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        Ok(Self {
            database: client.database(database),
        })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(
        &self,
        collection: &str,
        predicate: &Predicate,
    ) -> Result<Vec<Document>, StoreError> {
        let cursor = self
            .database
            .collection::<Document>(collection)
            .find(predicate_to_filter(predicate))
            .await
            .map_err(read_error)?;
        cursor.try_collect().await.map_err(read_error)
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<Option<Document>, StoreError> {
        self.database
            .collection::<Document>(collection)
            .find_one(doc! { "_id": id })
            .await
            .map_err(read_error)
    }

    async fn insert(&self, collection: &str, document: Document) -> Result<ObjectId, StoreError> {
        let outcome = self
            .database
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(write_error)?;
        match outcome.inserted_id {
            Bson::ObjectId(id) => Ok(id),
            other => Err(StoreError::Write(format!(
                "store assigned a non-ObjectId identity: {other}"
            ))),
        }
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        self.database
            .collection::<Document>(collection)
            .count_documents(doc! {})
            .await
            .map_err(read_error)
    }
}

fn read_error(err: mongodb::error::Error) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

fn write_error(err: mongodb::error::Error) -> StoreError {
    match err.kind.as_ref() {
        ErrorKind::Write(_) => StoreError::Write(err.to_string()),
        _ => StoreError::Unavailable(err.to_string()),
    }
}

/// Translate a predicate into a MongoDB filter document.
///
/// Text constraints become case-insensitive regexes with metacharacters
/// escaped, whole-value matches are anchored, and the free-text group maps
/// onto `$or`.
fn predicate_to_filter(predicate: &Predicate) -> Document {
    let mut filter = Document::new();
    for clause in predicate.clauses() {
        match clause {
            Clause::Field { field, constraint } => {
                filter.insert(*field, constraint_to_bson(constraint));
            }
            Clause::Any(branches) => {
                let alternatives: Vec<Bson> = branches
                    .iter()
                    .map(|(field, constraint)| {
                        Bson::Document(doc! { *field: constraint_to_bson(constraint) })
                    })
                    .collect();
                filter.insert("$or", alternatives);
            }
        }
    }
    filter
}

fn constraint_to_bson(constraint: &Constraint) -> Bson {
    match constraint {
        Constraint::Contains(text) => {
            Bson::Document(doc! { "$regex": regex::escape(text), "$options": "i" })
        }
        Constraint::Equals(text) => Bson::Document(
            doc! { "$regex": format!("^{}$", regex::escape(text)), "$options": "i" },
        ),
        Constraint::Between { min, max } => {
            let mut range = Document::new();
            if let Some(min) = min {
                range.insert("$gte", *min);
            }
            if let Some(max) = max {
                range.insert("$lte", *max);
            }
            Bson::Document(range)
        }
        Constraint::AtLeast(bound) => Bson::Document(doc! { "$gte": *bound }),
        Constraint::Flag(value) => Bson::Boolean(*value),
    }
}
