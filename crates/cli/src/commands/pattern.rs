use anyhow::{Result, bail};
use mocha_lens_core::MochaLens;
use tracing::debug;

use crate::utils::parse_filepath_with_line;

use super::resolve_existing;

pub fn pattern_command(filepath_arg: &str) -> Result<()> {
    let (filepath, line) = parse_filepath_with_line(filepath_arg);
    let Some(line) = line else {
        bail!("A line number is required, e.g. {filepath}:10");
    };
    let path = resolve_existing(&filepath)?;
    debug!("Selecting block in {} at line {}", path.display(), line);

    match MochaLens::with_path(&path)?.pattern_at_line(&path, line)? {
        Some(pattern) => {
            println!("{pattern}");
            Ok(())
        }
        None => bail!("No describe/it block at {}:{}", filepath, line + 1),
    }
}
