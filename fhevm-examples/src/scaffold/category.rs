//! Category scaffolding.
//!
//! Materializes `<output>/<category>/README.md` and one project tree per
//! example listed for that category in the catalog.

use std::path::{Path, PathBuf};

use fhevm_examples_core::config::Catalog;

use crate::error::FhevmExamplesError;
use crate::scaffold::fs::{ensure_dir, write_file};
use crate::scaffold::templates::{
    CATEGORY_ENV_TEMPLATE, PackageManifest, category_readme, example_readme,
};

/// Subdirectories created in every category example.
pub const EXAMPLE_DIRS: &[&str] = &["contracts", "test", "scripts"];

/// What [`create_category`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    /// Category id
    pub id: String,
    /// Category title
    pub title: String,
    /// `<output>/<id>`
    pub category_dir: PathBuf,
    /// One directory per example, in catalog order
    pub example_dirs: Vec<PathBuf>,
}

/// Creates the directory layout, manifest, env template and README of one
/// example. Existing directories are reused and files are overwritten.
///
/// # Errors
///
/// Returns `FhevmExamplesError::Scaffold` if a directory or file cannot be
/// written.
pub fn create_example_structure(
    example_dir: &Path,
    name: &str,
    description: &str,
) -> Result<(), FhevmExamplesError> {
    for dir in EXAMPLE_DIRS {
        ensure_dir(&example_dir.join(dir))?;
    }

    let manifest = PackageManifest::for_example(name, description).to_json()?;
    write_file(&example_dir.join("package.json"), manifest)?;
    write_file(&example_dir.join(".env.example"), CATEGORY_ENV_TEMPLATE)?;
    write_file(
        &example_dir.join("README.md"),
        example_readme(name, description),
    )?;

    Ok(())
}

/// Scaffolds the category `category_id` under `output_dir`.
///
/// The id is resolved before anything is written, so an unknown category
/// leaves the filesystem untouched.
///
/// # Errors
///
/// Returns `FhevmExamplesError::Config` for an unknown category, or
/// `FhevmExamplesError::Scaffold` if writing fails.
pub fn create_category(
    catalog: &Catalog,
    category_id: &str,
    output_dir: &Path,
) -> Result<CategoryReport, FhevmExamplesError> {
    let category = catalog.require(category_id)?;
    tracing::info!(category = %category.id, title = %category.title, "creating category");

    let category_dir = output_dir.join(&category.id);
    ensure_dir(&category_dir)?;
    write_file(&category_dir.join("README.md"), category_readme(category))?;

    let mut example_dirs = Vec::with_capacity(category.examples.len());
    for example in &category.examples {
        let example_dir = category_dir.join(&example.name);
        create_example_structure(&example_dir, &example.name, &example.description)?;
        example_dirs.push(example_dir);
    }

    tracing::info!(
        category = %category.id,
        examples = example_dirs.len(),
        "category created"
    );
    Ok(CategoryReport {
        id: category.id.clone(),
        title: category.title.clone(),
        category_dir,
        example_dirs,
    })
}

/// Scaffolds every category in catalog order.
///
/// # Errors
///
/// Stops at the first failing category and returns its error.
pub fn create_all_categories(
    catalog: &Catalog,
    output_dir: &Path,
) -> Result<Vec<CategoryReport>, FhevmExamplesError> {
    catalog
        .ids()
        .map(|id| create_category(catalog, id, output_dir))
        .collect()
}
