//! Documentation writers.
//!
//! Both writers report what they did through an outcome value instead of
//! printing, so the CLI can narrate and tests can assert.

use std::fs;
use std::path::{Path, PathBuf};

use crate::annotation::parse_contract_docs;
use crate::error::DocsError;
use crate::markdown::{render_example_readme, render_examples_doc};
use crate::scan::{contract_sources, scan_examples};

/// File name of generated and hand-written READMEs.
pub const README_FILE: &str = "README.md";

/// Result of [`generate_example_docs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocsOutcome {
    /// The document was written.
    Written {
        /// Output file
        path: PathBuf,
        /// Number of contracts documented
        examples: usize,
    },
    /// The examples directory does not exist; nothing was written.
    NoExamplesDir {
        /// Directory that was looked for
        path: PathBuf,
    },
}

/// Result of [`generate_example_readme`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadmeOutcome {
    /// A new README was written.
    Written {
        /// README path
        path: PathBuf,
    },
    /// A README already exists and was left untouched.
    Skipped {
        /// Existing README path
        path: PathBuf,
    },
    /// No contract source was found; nothing was written.
    MissingContract {
        /// Directory that was searched
        contracts_dir: PathBuf,
    },
}

/// Scan `examples_dir` and write the aggregate Markdown document to
/// `output_file`, replacing any previous content.
///
/// # Errors
///
/// Returns `DocsError` if scanning fails or the output cannot be written.
pub fn generate_example_docs(
    examples_dir: &Path,
    output_file: &Path,
) -> Result<DocsOutcome, DocsError> {
    if !examples_dir.is_dir() {
        tracing::info!(path = %examples_dir.display(), "no examples directory found");
        return Ok(DocsOutcome::NoExamplesDir {
            path: examples_dir.to_path_buf(),
        });
    }

    let examples = scan_examples(examples_dir)?;
    let markdown = render_examples_doc(&examples);
    fs::write(output_file, markdown).map_err(|e| DocsError::io(output_file, e))?;

    tracing::info!(
        path = %output_file.display(),
        examples = examples.len(),
        "documentation generated"
    );
    Ok(DocsOutcome::Written {
        path: output_file.to_path_buf(),
        examples: examples.len(),
    })
}

/// Write a README for the example in `example_dir` from its first contract's
/// annotations. An existing README is never overwritten.
///
/// # Errors
///
/// Returns `DocsError` if the contract cannot be read or the README cannot
/// be written. A missing contract is reported as
/// [`ReadmeOutcome::MissingContract`], not as an error.
pub fn generate_example_readme(example_dir: &Path) -> Result<ReadmeOutcome, DocsError> {
    let readme_path = example_dir.join(README_FILE);
    if readme_path.exists() {
        tracing::debug!(path = %readme_path.display(), "README exists, leaving it alone");
        return Ok(ReadmeOutcome::Skipped { path: readme_path });
    }

    let contracts_dir = example_dir.join("contracts");
    let Some(contract_path) = contract_sources(&contracts_dir)?.into_iter().next() else {
        tracing::error!(path = %contracts_dir.display(), "no Solidity files found");
        return Ok(ReadmeOutcome::MissingContract { contracts_dir });
    };

    let docs = parse_contract_docs(&contract_path)?;
    let contract_file = contract_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    fs::write(&readme_path, render_example_readme(&docs, &contract_file))
        .map_err(|e| DocsError::io(&readme_path, e))?;

    tracing::info!(path = %readme_path.display(), "README generated");
    Ok(ReadmeOutcome::Written { path: readme_path })
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTER: &str = "/**\n * @title Encrypted Counter\n * @description Counts privately\n * @chapter: basic\n */\ncontract FHECounter {}\n";

    fn example_with_contract(root: &Path, name: &str, file: &str, body: &str) -> PathBuf {
        let dir = root.join(name);
        fs::create_dir_all(dir.join("contracts")).unwrap();
        fs::write(dir.join("contracts").join(file), body).unwrap();
        dir
    }

    #[test]
    fn docs_missing_examples_dir_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("EXAMPLES_DOCS.md");

        let outcome = generate_example_docs(&dir.path().join("missing"), &output).unwrap();
        assert!(matches!(outcome, DocsOutcome::NoExamplesDir { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn docs_group_access_control_under_access() {
        let dir = tempfile::tempdir().unwrap();
        let examples = dir.path().join("examples");
        example_with_contract(&examples, "access-control-basic", "AccessControl.sol", "@title ACL\n");
        example_with_contract(&examples, "basic-counter", "FHECounter.sol", COUNTER);
        let output = dir.path().join("EXAMPLES_DOCS.md");

        let outcome = generate_example_docs(&examples, &output).unwrap();
        assert_eq!(
            outcome,
            DocsOutcome::Written {
                path: output.clone(),
                examples: 2
            }
        );

        let doc = fs::read_to_string(&output).unwrap();
        assert!(doc.contains("## Access Examples"));
        assert!(doc.contains("## Basic Examples"));
        assert!(doc.contains("### Encrypted Counter"));
        assert!(doc.contains("**Chapter**: basic"));
    }

    #[test]
    fn docs_include_contracts_with_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let examples = dir.path().join("examples");
        let counter = example_with_contract(&examples, "basic-counter", "Counter.sol", "");
        fs::write(
            counter.join("contracts/Counter.sol"),
            b"// \xa9 Acme\n/// @title Latin Counter\ncontract Counter {}\n",
        )
        .unwrap();
        example_with_contract(&examples, "user-decrypt", "U.sol", "@title User Decrypt\n");
        let output = dir.path().join("EXAMPLES_DOCS.md");

        let outcome = generate_example_docs(&examples, &output).unwrap();
        assert!(matches!(outcome, DocsOutcome::Written { examples: 2, .. }));

        let doc = fs::read_to_string(&output).unwrap();
        assert!(doc.contains("### Latin Counter"));
        assert!(doc.contains("### User Decrypt"));
    }

    #[test]
    fn docs_overwrite_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let examples = dir.path().join("examples");
        fs::create_dir_all(&examples).unwrap();
        let output = dir.path().join("EXAMPLES_DOCS.md");
        fs::write(&output, "stale content").unwrap();

        generate_example_docs(&examples, &output).unwrap();
        let doc = fs::read_to_string(&output).unwrap();
        assert!(!doc.contains("stale content"));
        assert!(doc.starts_with("# FHEVM Examples Documentation"));
    }

    #[test]
    fn readme_written_from_first_contract() {
        let dir = tempfile::tempdir().unwrap();
        let example = example_with_contract(dir.path(), "basic-counter", "FHECounter.sol", COUNTER);
        fs::write(example.join("contracts/Zeta.sol"), "@title Zeta\n").unwrap();

        let outcome = generate_example_readme(&example).unwrap();
        assert_eq!(
            outcome,
            ReadmeOutcome::Written {
                path: example.join(README_FILE)
            }
        );

        let readme = fs::read_to_string(example.join(README_FILE)).unwrap();
        assert!(readme.starts_with("# Encrypted Counter\n\nCounts privately\n"));
        assert!(readme.contains("Main contract: `FHECounter.sol`"));
    }

    #[test]
    fn readme_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let example = example_with_contract(dir.path(), "basic-counter", "FHECounter.sol", COUNTER);
        let readme_path = example.join(README_FILE);
        fs::write(&readme_path, "hand-written\n").unwrap();

        let outcome = generate_example_readme(&example).unwrap();
        assert!(matches!(outcome, ReadmeOutcome::Skipped { .. }));
        assert_eq!(fs::read(&readme_path).unwrap(), b"hand-written\n");

        // A generated README is equally left alone on the next run.
        fs::remove_file(&readme_path).unwrap();
        generate_example_readme(&example).unwrap();
        let first = fs::read(&readme_path).unwrap();
        generate_example_readme(&example).unwrap();
        assert_eq!(fs::read(&readme_path).unwrap(), first);
    }

    #[test]
    fn readme_without_contract_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let example = dir.path().join("empty");
        fs::create_dir_all(example.join("contracts")).unwrap();

        let outcome = generate_example_readme(&example).unwrap();
        assert!(matches!(outcome, ReadmeOutcome::MissingContract { .. }));
        assert!(!example.join(README_FILE).exists());
    }

    #[test]
    fn readme_without_contracts_dir_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let example = dir.path().join("bare");
        fs::create_dir_all(&example).unwrap();

        let outcome = generate_example_readme(&example).unwrap();
        assert!(matches!(outcome, ReadmeOutcome::MissingContract { .. }));
        assert!(!example.join(README_FILE).exists());
    }
}
