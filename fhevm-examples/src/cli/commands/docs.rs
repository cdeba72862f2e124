//! `docs` commands: aggregate document and per-example README.

use fhevm_examples_core::naming::validate_component;
use fhevm_examples_docs::{
    DocsOutcome, ReadmeOutcome, generate_example_docs, generate_example_readme,
};

use crate::cli::args::{DocsExamplesArgs, DocsSingleArgs};
use crate::error::FhevmExamplesError;

/// Runs `docs examples`.
///
/// A missing examples directory is reported and is not an error.
///
/// # Errors
///
/// Returns a docs error if a contract cannot be read or the output cannot be
/// written.
pub fn examples(args: &DocsExamplesArgs, quiet: bool) -> Result<(), FhevmExamplesError> {
    match generate_example_docs(&args.examples_dir, &args.output)? {
        DocsOutcome::Written { path, examples } => {
            if !quiet {
                println!("Generated {} ({examples} examples)", path.display());
            }
        }
        DocsOutcome::NoExamplesDir { path } => {
            if !quiet {
                println!("No examples directory found at {}", path.display());
            }
        }
    }
    Ok(())
}

/// Runs `docs single`.
///
/// An example without contract sources is reported on stderr and is not an
/// error.
///
/// # Errors
///
/// Returns a config error if the name is not a single path component, or a
/// docs error if the contract cannot be read or the README cannot be written.
pub fn single(args: &DocsSingleArgs, quiet: bool) -> Result<(), FhevmExamplesError> {
    validate_component("example name", &args.name)?;
    let example_dir = args.examples_dir.join(&args.name);

    match generate_example_readme(&example_dir)? {
        ReadmeOutcome::Written { path } => {
            if !quiet {
                println!("Generated {}", path.display());
            }
        }
        ReadmeOutcome::Skipped { path } => {
            if !quiet {
                println!("README already exists at {}, leaving it unchanged", path.display());
            }
        }
        ReadmeOutcome::MissingContract { contracts_dir } => {
            eprintln!(
                "error: no contract source found in {}",
                contracts_dir.display()
            );
        }
    }
    Ok(())
}
