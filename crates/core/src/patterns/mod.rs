//! Synthesis of test-runner grep patterns from extracted blocks

pub mod grep;

pub use grep::{build_pattern, escape_regex};
