//! External representation of stored documents.

use bson::{Bson, Document};
use serde_json::{Map, Value};

/// Convert a raw stored document into its external JSON representation.
///
/// The store identity field `_id` is renamed to `id` and rendered as a
/// string; timestamp values become ISO-8601 strings; everything else converts
/// structurally. An empty document maps to an empty object. The transform is
/// pure and never touches the store.
pub fn serialize_document(document: &Document) -> Map<String, Value> {
    let mut external = Map::with_capacity(document.len());
    for (key, value) in document {
        if key == "_id" {
            external.insert("id".to_string(), Value::String(identity_string(value)));
        } else {
            external.insert(key.clone(), external_value(value.clone()));
        }
    }
    external
}

fn identity_string(value: &Bson) -> String {
    match value {
        Bson::ObjectId(id) => id.to_hex(),
        Bson::String(id) => id.clone(),
        other => other.to_string(),
    }
}

fn external_value(value: Bson) -> Value {
    match value {
        Bson::DateTime(timestamp) => Value::String(timestamp.to_chrono().to_rfc3339()),
        other => other.into_relaxed_extjson(),
    }
}
