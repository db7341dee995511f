pub mod analyze;
pub mod command;
pub mod init;
pub mod pattern;

pub use analyze::analyze_command;
pub use command::command_command;
pub use init::init_command;
pub use pattern::pattern_command;

use anyhow::{Result, bail};
use std::path::PathBuf;

/// Absolute path of `filepath`, failing if it does not exist
pub(crate) fn resolve_existing(filepath: &str) -> Result<PathBuf> {
    let path = PathBuf::from(filepath);
    let absolute = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()?.join(path)
    };
    if !absolute.exists() {
        bail!("File not found: {}", absolute.display());
    }
    Ok(absolute)
}
