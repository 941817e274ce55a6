//! Property-listing catalog: criteria translation, store facade, external
//! serialization, and sample-data seeding.

pub mod domain;
pub mod filter;
pub mod seed;
pub mod serialize;
pub mod service;

pub use domain::{Inquiry, Property, INQUIRIES, PROPERTIES};
pub use filter::{Predicate, SearchCriteria};
pub use seed::{sample_listings, seed_properties};
pub use serialize::serialize_document;
pub use service::CatalogService;
