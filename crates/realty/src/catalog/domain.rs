use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name of the listings collection in the document store.
pub const PROPERTIES: &str = "property";

/// Name of the contact-inquiry collection.
pub const INQUIRIES: &str = "inquiry";

/// A listed property as stored in the catalog.
///
/// The store assigns the document identity on insert; it is never carried on
/// this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub area_sqft: f64,
    pub property_type: String,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub featured: bool,
    pub status: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub listed_at: DateTime<Utc>,
}

/// A contact submission, persisted exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    pub message: String,
}
