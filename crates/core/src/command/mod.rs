//! Construction of mocha invocations for blocks and files

pub mod builder;
pub mod mocha_command;

pub use builder::{CommandBuilder, RunMode};
pub use mocha_command::{MochaCommand, shell_quote};
