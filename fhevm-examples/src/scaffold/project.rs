//! Single-example project generator.
//!
//! Produces `<output>/<name>/` with a Hardhat-style layout. Base-template
//! files are copied when present; how an absent one is treated depends on
//! [`TemplatePolicy`].

use std::path::{Path, PathBuf};

use fhevm_examples_core::config::ExampleConfig;
use fhevm_examples_core::naming::validate_component;

use crate::error::{FhevmExamplesError, ScaffoldError};
use crate::scaffold::fs::{copy_file, ensure_dir, write_file};
use crate::scaffold::templates::{GITIGNORE, PROJECT_ENV_TEMPLATE, TsConfig, project_readme};

/// Files copied from the base-template directory.
pub const TEMPLATE_FILES: &[&str] = &["hardhat.config.ts", "package.json"];

/// Subdirectories created in every generated project.
pub const PROJECT_DIRS: &[&str] = &["contracts", "test", "scripts", "artifacts"];

/// Handling of base-template files that do not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TemplatePolicy {
    /// Log a warning and continue without the file.
    #[default]
    Skip,
    /// Fail before anything is written.
    Require,
}

/// What [`create_fhevm_example`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReport {
    /// `<output>/<name>`
    pub project_dir: PathBuf,
    /// Template files copied into the project
    pub copied: Vec<PathBuf>,
    /// Template files that were absent and skipped
    pub skipped: Vec<PathBuf>,
}

/// Generates the project described by `config` under `output_dir`.
///
/// # Errors
///
/// Returns `FhevmExamplesError::Config` if the project name is not a single
/// path component, `ScaffoldError::MissingTemplate` under
/// [`TemplatePolicy::Require`] when a template file is absent, or
/// `ScaffoldError::Io` if writing fails.
pub fn create_fhevm_example(
    config: &ExampleConfig,
    output_dir: &Path,
    template_dir: &Path,
    policy: TemplatePolicy,
) -> Result<ProjectReport, FhevmExamplesError> {
    validate_component("example name", &config.name)?;

    let (present, missing): (Vec<PathBuf>, Vec<PathBuf>) = TEMPLATE_FILES
        .iter()
        .map(|file| template_dir.join(file))
        .partition(|path| path.is_file());

    if policy == TemplatePolicy::Require {
        if let Some(path) = missing.first() {
            return Err(ScaffoldError::MissingTemplate { path: path.clone() }.into());
        }
    }

    tracing::info!(
        name = %config.name,
        category = %config.category,
        "creating example project"
    );

    ensure_dir(output_dir)?;
    let project_dir = output_dir.join(&config.name);
    for dir in PROJECT_DIRS {
        ensure_dir(&project_dir.join(dir))?;
    }

    let mut copied = Vec::with_capacity(present.len());
    for source in present {
        let Some(file_name) = source.file_name() else {
            continue;
        };
        let target = project_dir.join(file_name);
        copy_file(&source, &target)?;
        copied.push(target);
    }
    for path in &missing {
        tracing::warn!(path = %path.display(), "base template file not found, skipping");
    }

    write_file(&project_dir.join(".env.example"), PROJECT_ENV_TEMPLATE)?;
    write_file(&project_dir.join(".gitignore"), GITIGNORE)?;
    write_file(&project_dir.join("README.md"), project_readme(config))?;
    write_file(
        &project_dir.join("tsconfig.json"),
        TsConfig::default().to_json()?,
    )?;

    tracing::info!(path = %project_dir.display(), "example project created");
    Ok(ProjectReport {
        project_dir,
        copied,
        skipped: missing,
    })
}
