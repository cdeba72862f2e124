//! `category` command: scaffold categories or list the catalog.

use serde::Serialize;

use fhevm_examples_core::config::Catalog;

use crate::cli::args::{CategoryArgs, CategoryTarget, OutputFormat};
use crate::error::FhevmExamplesError;
use crate::scaffold::{CategoryReport, create_all_categories, create_category};

/// One row of `category list --format json`.
#[derive(Debug, Serialize)]
struct CategoryListing<'a> {
    id: &'a str,
    title: &'a str,
    examples: Vec<&'a str>,
}

/// Loads the catalog named by `--catalog`, or the built-in one.
///
/// # Errors
///
/// Returns a config error if the catalog file is missing or invalid.
pub fn load_catalog(args: &CategoryArgs) -> Result<Catalog, FhevmExamplesError> {
    let catalog = match &args.catalog {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading catalog");
            Catalog::load(path)?
        }
        None => Catalog::builtin()?,
    };
    Ok(catalog)
}

/// Runs `category`.
///
/// # Errors
///
/// Returns a config error for an unknown category or invalid catalog, and a
/// scaffold error if writing fails.
pub fn run(args: &CategoryArgs, quiet: bool) -> Result<(), FhevmExamplesError> {
    let catalog = load_catalog(args)?;

    match args.target() {
        CategoryTarget::List => list(&catalog, args.format),
        CategoryTarget::One(id) => {
            let report = create_category(&catalog, id, &args.output)?;
            if !quiet {
                print_report(&report);
            }
            Ok(())
        }
        CategoryTarget::All => {
            let reports = create_all_categories(&catalog, &args.output)?;
            if !quiet {
                for report in &reports {
                    print_report(report);
                }
                println!(
                    "Created {} categories in {}",
                    reports.len(),
                    args.output.display()
                );
            }
            Ok(())
        }
    }
}

fn list(catalog: &Catalog, format: OutputFormat) -> Result<(), FhevmExamplesError> {
    match format {
        OutputFormat::Human => {
            println!("Available categories:");
            for category in catalog.iter() {
                println!("  {} - {}", category.id, category.title);
            }
        }
        OutputFormat::Json => {
            let rows: Vec<CategoryListing<'_>> = catalog
                .iter()
                .map(|c| CategoryListing {
                    id: &c.id,
                    title: &c.title,
                    examples: c.examples.iter().map(|e| e.name.as_str()).collect(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}

fn print_report(report: &CategoryReport) {
    println!(
        "Created {} ({} examples) in {}",
        report.title,
        report.example_dirs.len(),
        report.category_dir.display()
    );
    for dir in &report.example_dirs {
        println!("  {}", dir.display());
    }
}
