//! mocha-lens - Find and run individual Mocha tests from an editor
//!
//! This crate provides functionality to:
//! - Discover `describe`/`it` blocks in test source text, nesting inferred from indentation
//! - Build the exact `--grep` pattern that selects one test or one suite's subtree
//! - Generate mocha invocations for running or debugging a block or a whole file
pub mod command;
pub mod config;
pub mod error;
pub mod parser;
pub mod patterns;
pub mod runner;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::{CommandBuilder, MochaCommand, RunMode};
pub use config::Config;
pub use parser::extract;
pub use patterns::{build_pattern, escape_regex};
pub use runner::{Analysis, AnalyzedBlock, Lens, MochaLens};
