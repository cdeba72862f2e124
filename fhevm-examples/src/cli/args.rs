//! CLI argument definitions
//!
//! All Clap derive structs for `fhevm-examples` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

pub use fhevm_examples_core::config::catalog::LIST_KEYWORD;
use fhevm_examples_core::config::schema::DEFAULT_EXAMPLE_CATEGORY;

use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Scaffold FHEVM example projects and generate their documentation.
#[derive(Parser, Debug)]
#[command(name = "fhevm-examples", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress logging and progress output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "FHEVM_EXAMPLES_COLOR")]
    pub color: ColorChoice,

    /// Log line format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold one category, every category, or list the catalog.
    Category(CategoryArgs),

    /// Generate a single example project.
    Example(ExampleArgs),

    /// Generate documentation from annotated contracts.
    Docs(DocsCommand),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Category Command
// ============================================================================

/// Arguments for `category`.
#[derive(Args, Debug)]
pub struct CategoryArgs {
    /// Category id to scaffold, `list` to print the catalog, or nothing to
    /// scaffold every category.
    pub category: Option<String>,

    /// Root directory for generated categories.
    #[arg(short, long, default_value = "./examples", env = "FHEVM_EXAMPLES_DIR")]
    pub output: PathBuf,

    /// YAML catalog replacing the built-in category table.
    #[arg(long, env = "FHEVM_EXAMPLES_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Output format for `list`.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

impl CategoryArgs {
    /// What the positional argument asks for.
    #[must_use]
    pub fn target(&self) -> CategoryTarget<'_> {
        match self.category.as_deref() {
            None => CategoryTarget::All,
            Some(LIST_KEYWORD) => CategoryTarget::List,
            Some(id) => CategoryTarget::One(id),
        }
    }
}

/// Resolved `category` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryTarget<'a> {
    /// Scaffold every category
    All,
    /// Print category ids and titles
    List,
    /// Scaffold one category
    One(&'a str),
}

// ============================================================================
// Example Command
// ============================================================================

/// Arguments for `example`.
#[derive(Args, Debug)]
pub struct ExampleArgs {
    /// Project directory name.
    pub name: String,

    /// Category tag written into the README (basic, encryption,
    /// access-control, advanced; not validated).
    #[arg(default_value = DEFAULT_EXAMPLE_CATEGORY)]
    pub category: String,

    /// Directory the project is created in.
    #[arg(short, long, default_value = "./examples", env = "FHEVM_EXAMPLES_DIR")]
    pub output: PathBuf,

    /// Directory holding `hardhat.config.ts` and `package.json` to copy.
    #[arg(
        long,
        default_value = "./base-template",
        env = "FHEVM_EXAMPLES_TEMPLATE_DIR"
    )]
    pub template_dir: PathBuf,

    /// Fail instead of warning when a base-template file is missing.
    #[arg(long)]
    pub require_templates: bool,
}

// ============================================================================
// Docs Command
// ============================================================================

/// Documentation commands.
#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct DocsCommand {
    /// Docs subcommand.
    #[command(subcommand)]
    pub subcommand: DocsSubcommand,
}

/// Docs subcommands.
#[derive(Subcommand, Debug)]
pub enum DocsSubcommand {
    /// Regenerate the aggregate examples document.
    Examples(DocsExamplesArgs),

    /// Generate one example's README if it has none.
    Single(DocsSingleArgs),
}

/// Arguments for `docs examples`.
#[derive(Args, Debug)]
pub struct DocsExamplesArgs {
    /// Directory whose subdirectories are scanned.
    #[arg(long, default_value = "./examples", env = "FHEVM_EXAMPLES_DIR")]
    pub examples_dir: PathBuf,

    /// Markdown file to write.
    #[arg(short, long, default_value = "./EXAMPLES_DOCS.md")]
    pub output: PathBuf,
}

/// Arguments for `docs single`.
#[derive(Args, Debug)]
pub struct DocsSingleArgs {
    /// Example directory name.
    pub name: String,

    /// Directory containing the example.
    #[arg(long, default_value = "./examples", env = "FHEVM_EXAMPLES_DIR")]
    pub examples_dir: PathBuf,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
