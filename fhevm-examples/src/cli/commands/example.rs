//! `example` command: generate a single project.

use fhevm_examples_core::config::ExampleConfig;

use crate::cli::args::ExampleArgs;
use crate::error::FhevmExamplesError;
use crate::scaffold::{TemplatePolicy, create_fhevm_example};

/// Runs `example`.
///
/// # Errors
///
/// Returns a config error for an invalid name, a missing-template error
/// under `--require-templates`, or a scaffold error if writing fails.
pub fn run(args: &ExampleArgs, quiet: bool) -> Result<(), FhevmExamplesError> {
    let config = ExampleConfig::new(&args.name, &args.category);
    let policy = if args.require_templates {
        TemplatePolicy::Require
    } else {
        TemplatePolicy::Skip
    };

    let report = create_fhevm_example(&config, &args.output, &args.template_dir, policy)?;

    if !quiet {
        println!("Created example project at {}", report.project_dir.display());
        for path in &report.skipped {
            println!("  skipped missing template {}", path.display());
        }
        println!();
        println!("Next steps:");
        println!("  cd {}", report.project_dir.display());
        println!("  npm install");
        println!("  npm run compile");
        println!("  npm run test");
    }
    Ok(())
}
