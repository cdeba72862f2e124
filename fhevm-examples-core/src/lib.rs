//! `fhevm-examples` Core - catalog schema and shared types
//!
//! This crate provides the example catalog, naming helpers and configuration
//! errors shared across `fhevm-examples` (CLI/scaffolder) and
//! `fhevm-examples-docs` (documentation generation).

pub mod config;
pub mod error;
pub mod naming;
