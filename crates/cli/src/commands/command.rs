use anyhow::Result;
use mocha_lens_core::{MochaLens, RunMode};
use tracing::{debug, info};

use crate::utils::parse_filepath_with_line;

use super::resolve_existing;

pub fn command_command(filepath_arg: &str, debug_mode: bool, json: bool) -> Result<()> {
    let (filepath, line) = parse_filepath_with_line(filepath_arg);
    debug!("Building command for {} at line {:?}", filepath, line);

    let path = resolve_existing(&filepath)?;
    let mode = if debug_mode {
        RunMode::Debug
    } else {
        RunMode::Run
    };

    let runner = MochaLens::with_path(&path)?;
    let command = runner.build_command(&path, line, mode)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&command)?);
        return Ok(());
    }

    info!("Built {:?} command", mode);
    println!("{}", command.to_shell_command());
    if let Some(ref dir) = command.working_dir {
        println!("Working directory: {}", dir);
    }
    Ok(())
}
