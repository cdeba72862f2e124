//! `fhevm-examples` - scaffolding and documentation tooling for FHEVM examples
//!
//! This library provides the category scaffolder, the single-example project
//! generator and the CLI that drives them together with the documentation
//! generator from `fhevm-examples-docs`.

pub mod cli;
pub mod error;
pub mod observability;
pub mod scaffold;
