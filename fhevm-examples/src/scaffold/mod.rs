//! Project scaffolding.
//!
//! `category` materializes whole categories from a [`Catalog`], `project`
//! builds a single fuller project skeleton, and `templates` holds the file
//! contents both write.
//!
//! [`Catalog`]: fhevm_examples_core::config::Catalog

pub mod category;
pub mod fs;
pub mod project;
pub mod templates;

pub use category::{
    CategoryReport, create_all_categories, create_category, create_example_structure,
};
pub use project::{ProjectReport, TemplatePolicy, create_fhevm_example};
