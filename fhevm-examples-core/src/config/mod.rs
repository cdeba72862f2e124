//! Example catalog configuration.
//!
//! `schema` holds the serde types, `catalog` the validated, ordered catalog
//! that the generators receive.

pub mod catalog;
pub mod schema;

pub use catalog::Catalog;
pub use schema::{CatalogFile, CategoryConfig, ExampleConfig, ExampleSpec};
