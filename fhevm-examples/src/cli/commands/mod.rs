//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod category;
pub mod completions;
pub mod docs;
pub mod example;
pub mod version;

use crate::cli::args::{Cli, Commands, DocsSubcommand};
use crate::error::FhevmExamplesError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), FhevmExamplesError> {
    let quiet = cli.quiet;
    match cli.command {
        Commands::Category(args) => category::run(&args, quiet),
        Commands::Example(args) => example::run(&args, quiet),
        Commands::Docs(cmd) => match cmd.subcommand {
            DocsSubcommand::Examples(args) => docs::examples(&args, quiet),
            DocsSubcommand::Single(args) => docs::single(&args, quiet),
        },
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}
