use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{analyze_command, command_command, init_command, pattern_command};

#[derive(Parser, Debug)]
#[command(name = "mocha-lens")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every describe/it block in a test file with its grep pattern
    #[command(visible_alias = "a")]
    Analyze {
        /// Path to the test file with optional line number (e.g., test/app.spec.js:10)
        filepath: String,

        /// Print the analysis as JSON
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print the grep pattern selecting the block at a line
    #[command(visible_alias = "p")]
    Pattern {
        /// Path to the test file with a line number (e.g., test/app.spec.js:10)
        filepath: String,
    },
    /// Print the mocha invocation for a block or a whole file
    #[command(visible_alias = "c")]
    Command {
        /// Path to the test file with optional line number (e.g., test/app.spec.js:10)
        filepath: String,

        /// Launch mocha under the node inspector
        #[arg(short, long)]
        debug: bool,

        /// Print the command as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a default .mocha-lens.json
    Init {
        /// Directory to write the configuration to (defaults to current directory)
        #[arg(long)]
        cwd: Option<String>,

        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Analyze { filepath, verbose } => analyze_command(&filepath, verbose),
            Commands::Pattern { filepath } => pattern_command(&filepath),
            Commands::Command {
                filepath,
                debug,
                json,
            } => command_command(&filepath, debug, json),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
