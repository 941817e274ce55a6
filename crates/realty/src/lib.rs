//! Core engine for the property-listing catalog.
//!
//! Search criteria are translated into store predicates by [`catalog::filter`],
//! executed through the [`catalog::CatalogService`] facade against one of the
//! [`store`] backends, and normalized for the outside world by
//! [`catalog::serialize`]. The HTTP surface lives in the `realty-api` service
//! crate and carries no logic of its own.

pub mod catalog;
pub mod config;
pub mod error;
pub mod store;
pub mod telemetry;
