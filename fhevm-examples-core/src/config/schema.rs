//! Catalog schema types
//!
//! These types are deserialized from catalog YAML files (including the
//! built-in catalog embedded in this crate).

use serde::{Deserialize, Serialize};

use crate::naming;

// ============================================================================
// Catalog File
// ============================================================================

/// Root of a catalog YAML document.
///
/// Categories are listed in the order they should be generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    /// Ordered category definitions
    pub categories: Vec<CategoryConfig>,
}

/// One category of examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryConfig {
    /// Identifier, also the category directory name (e.g. `access-control`)
    pub id: String,

    /// Human-readable title (e.g. "Access Control Examples")
    pub title: String,

    /// One-line summary shown in the category README
    pub description: String,

    /// Examples generated for this category, in order
    #[serde(default)]
    pub examples: Vec<ExampleSpec>,
}

/// A single example project within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExampleSpec {
    /// Example name, also the project directory name
    pub name: String,

    /// One-line description written to the manifest and README
    pub description: String,
}

// ============================================================================
// Single-Example Configuration
// ============================================================================

/// Category used by the single-example generator when none is given.
pub const DEFAULT_EXAMPLE_CATEGORY: &str = "basic";

/// Categories the single-example generator documents in its usage text.
///
/// The generator does not enforce membership; any tag is echoed as-is.
pub const KNOWN_EXAMPLE_CATEGORIES: &[&str] = &["basic", "encryption", "access-control", "advanced"];

/// Settings for the single-example project generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleConfig {
    /// Project directory name
    pub name: String,

    /// Free-form description for the README
    pub description: String,

    /// Category tag, echoed into the README without validation
    pub category: String,

    /// Solidity contract name referenced by the README
    pub contract_name: String,

    /// Test file name referenced by the README
    pub test_file: String,
}

impl ExampleConfig {
    /// Derives a full configuration from an example name and category tag.
    #[must_use]
    pub fn new(name: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            description: format!("FHEVM example demonstrating {category} concepts"),
            category: category.to_string(),
            contract_name: naming::contract_name(name),
            test_file: format!("{name}.test.ts"),
        }
    }
}
