//! Validated example catalog.
//!
//! A [`Catalog`] is an immutable, ordered map from category id to
//! [`CategoryConfig`]. The generators take it as a parameter, so tests and
//! users can swap in their own catalog file in place of the built-in one.

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;

use crate::config::schema::{CatalogFile, CategoryConfig};
use crate::error::ConfigError;
use crate::naming::validate_component;

/// Embedded YAML for the built-in catalog.
const BUILTIN_CATALOG: &str = include_str!("../../catalog/builtin.yaml");

/// Category id the CLI reads as a request to list the catalog.
pub const LIST_KEYWORD: &str = "list";

/// Maximum edit distance for "did you mean" suggestions.
const SUGGESTION_DISTANCE: usize = 3;

/// Ordered, validated set of example categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: IndexMap<String, CategoryConfig>,
}

impl Catalog {
    /// Builds a catalog, checking that ids and names are unique and usable as
    /// directory names. [`LIST_KEYWORD`] is not a valid category id.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateCategory`, `ConfigError::DuplicateExample`
    /// or `ConfigError::InvalidName` on the first violation found.
    pub fn new(categories: Vec<CategoryConfig>) -> Result<Self, ConfigError> {
        let mut map = IndexMap::with_capacity(categories.len());

        for category in categories {
            validate_component("category id", &category.id)?;
            if category.id == LIST_KEYWORD {
                return Err(ConfigError::InvalidName {
                    field: "category id",
                    value: category.id,
                    reason: "is reserved for listing categories",
                });
            }

            let mut seen = HashSet::new();
            for example in &category.examples {
                validate_component("example name", &example.name)?;
                if !seen.insert(example.name.as_str()) {
                    return Err(ConfigError::DuplicateExample {
                        category: category.id.clone(),
                        example: example.name.clone(),
                    });
                }
            }

            if map.contains_key(&category.id) {
                return Err(ConfigError::DuplicateCategory { id: category.id });
            }
            map.insert(category.id.clone(), category);
        }

        Ok(Self { categories: map })
    }

    /// The catalog shipped with the tool.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` only if the embedded YAML is malformed.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_yaml_str(BUILTIN_CATALOG, Path::new("<builtin>"))
    }

    /// Parses and validates a catalog from YAML text.
    ///
    /// `origin` is used only for error messages.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` for malformed YAML, or a validation
    /// error from [`Catalog::new`].
    pub fn from_yaml_str(yaml: &str, origin: &Path) -> Result<Self, ConfigError> {
        let file: CatalogFile =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
                path: origin.to_path_buf(),
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;
        Self::new(file.categories)
    }

    /// Reads and validates a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingFile` if the file does not exist,
    /// `ConfigError::ParseError` if it cannot be read or parsed, or a
    /// validation error from [`Catalog::new`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::MissingFile {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::ParseError {
                    path: path.to_path_buf(),
                    line: None,
                    message: e.to_string(),
                }
            }
        })?;
        Self::from_yaml_str(&yaml, path)
    }

    /// Looks up a category by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CategoryConfig> {
        self.categories.get(id)
    }

    /// Looks up a category by id, producing a descriptive error when absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownCategory` listing every valid id.
    pub fn require(&self, id: &str) -> Result<&CategoryConfig, ConfigError> {
        self.get(id).ok_or_else(|| ConfigError::UnknownCategory {
            name: id.to_string(),
            available: self.ids().map(str::to_string).collect(),
            suggestion: self.suggest(id),
        })
    }

    /// Closest category id within a small Damerau-Levenshtein distance.
    #[must_use]
    pub fn suggest(&self, input: &str) -> Option<String> {
        self.ids()
            .map(|id| (id, strsim::damerau_levenshtein(input, id)))
            .filter(|(_, dist)| *dist <= SUGGESTION_DISTANCE)
            .min_by_key(|(_, dist)| *dist)
            .map(|(id, _)| id.to_string())
    }

    /// Category ids in definition order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Categories in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryConfig> {
        self.categories.values()
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns `true` if the catalog has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ExampleSpec;

    fn category(id: &str, examples: &[&str]) -> CategoryConfig {
        CategoryConfig {
            id: id.to_string(),
            title: format!("{id} title"),
            description: format!("{id} description"),
            examples: examples
                .iter()
                .map(|name| ExampleSpec {
                    name: (*name).to_string(),
                    description: format!("{name} description"),
                })
                .collect(),
        }
    }

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(ids, ["basic", "encryption", "access-control", "advanced"]);
    }

    #[test]
    fn builtin_catalog_example_counts() {
        let catalog = Catalog::builtin().unwrap();
        let counts: Vec<usize> = catalog.iter().map(|c| c.examples.len()).collect();
        assert_eq!(counts, [3, 4, 3, 3]);
    }

    #[test]
    fn builtin_catalog_titles() {
        let catalog = Catalog::builtin().unwrap();
        let access = catalog.get("access-control").unwrap();
        assert_eq!(access.title, "Access Control Examples");
        assert_eq!(
            access.description,
            "Permission management and authorization patterns"
        );
        assert_eq!(access.examples[2].name, "input-proof");
    }

    #[test]
    fn duplicate_category_rejected() {
        let err = Catalog::new(vec![category("basic", &[]), category("basic", &[])]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateCategory { id } if id == "basic"));
    }

    #[test]
    fn duplicate_example_rejected() {
        let err = Catalog::new(vec![category("basic", &["counter", "counter"])]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateExample { ref category, ref example }
                if category == "basic" && example == "counter"
        ));
    }

    #[test]
    fn same_example_name_in_different_categories_allowed() {
        let catalog =
            Catalog::new(vec![category("a", &["counter"]), category("b", &["counter"])]).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn path_like_names_rejected() {
        let err = Catalog::new(vec![category("../escape", &[])]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidName { .. }));

        let err = Catalog::new(vec![category("ok", &["a/b"])]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidName { .. }));
    }

    #[test]
    fn list_keyword_is_reserved() {
        let err = Catalog::new(vec![category(LIST_KEYWORD, &["counter"])]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidName { field: "category id", ref value, .. } if value == "list"
        ));
        assert!(err.to_string().contains("reserved"));

        let yaml = "categories:\n  - id: list\n    title: L\n    description: D\n";
        let err = Catalog::from_yaml_str(yaml, Path::new("catalog.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidName { .. }));
    }

    #[test]
    fn definition_order_preserved() {
        let catalog = Catalog::new(vec![
            category("zeta", &[]),
            category("alpha", &[]),
            category("mid", &[]),
        ])
        .unwrap();
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(ids, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn require_unknown_lists_available() {
        let catalog = Catalog::builtin().unwrap();
        let err = catalog.require("encrypt").unwrap_err();
        match err {
            ConfigError::UnknownCategory {
                name,
                available,
                suggestion,
            } => {
                assert_eq!(name, "encrypt");
                assert_eq!(available.len(), 4);
                assert_eq!(suggestion.as_deref(), Some("encryption"));
            }
            other => panic!("expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn suggest_far_input_is_none() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.suggest("zzzzzzzzzzzz").is_none());
    }

    #[test]
    fn from_yaml_reports_parse_error() {
        let err = Catalog::from_yaml_str("categories: [", Path::new("bad.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { ref path, .. } if path == Path::new("bad.yaml")));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        std::fs::write(
            &path,
            "categories:\n  - id: demo\n    title: Demo Examples\n    description: Demo\n    examples:\n      - name: one\n        description: First\n",
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("demo").unwrap().examples[0].name, "one");
    }

    #[test]
    fn load_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/fhevm/catalog.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }));
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::from_yaml_str("categories: []", Path::new("empty.yaml")).unwrap();
        assert!(catalog.is_empty());
    }
}
