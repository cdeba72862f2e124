//! `fhevm-examples` Docs - documentation generation from contract annotations
//!
//! Scans example projects, extracts `@title` / `@description` / `@chapter:`
//! annotations from Solidity sources without compiling them, and renders an
//! aggregate Markdown report or per-example READMEs.

pub mod annotation;
pub mod error;
pub mod generate;
pub mod markdown;
pub mod scan;

pub use annotation::{Annotations, ParsedAnnotation, parse_annotations, parse_contract_docs};
pub use error::DocsError;
pub use generate::{DocsOutcome, ReadmeOutcome, generate_example_docs, generate_example_readme};
pub use scan::{ParsedExample, category_for_dir, scan_examples};
