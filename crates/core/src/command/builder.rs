use serde::Serialize;
use std::path::Path;
use tracing::debug;

use super::MochaCommand;
use crate::{
    config::Config,
    error::{Error, Result},
    types::{BlockId, TestBlocks},
};

/// Whether the command runs mocha normally or under the inspector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    #[default]
    Run,
    Debug,
}

pub struct CommandBuilder {
    config: Config,
}

impl CommandBuilder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Command running only the block `id` (a suite runs its whole subtree)
    pub fn build_for_block(
        &self,
        file_path: &Path,
        blocks: &TestBlocks,
        id: BlockId,
        mode: RunMode,
    ) -> Result<MochaCommand> {
        let block = blocks.get(id).ok_or(Error::NoBlockFound)?;
        let pattern = blocks.pattern_for(id);
        debug!(
            "Building {:?} command for {} '{}' with pattern {}",
            mode, block.kind, block.qualified_name, pattern
        );
        Ok(self.build_for_file(file_path, mode).with_grep(pattern))
    }

    /// Command running every test in `file_path`
    pub fn build_for_file(&self, file_path: &Path, mode: RunMode) -> MochaCommand {
        let working_dir = self
            .config
            .root
            .clone()
            .or_else(|| file_path.parent().map(Path::to_path_buf))
            .filter(|dir| !dir.as_os_str().is_empty());

        let file_arg = working_dir
            .as_deref()
            .and_then(|dir| file_path.strip_prefix(dir).ok())
            .unwrap_or(file_path)
            .to_string_lossy()
            .into_owned();

        let mocha = self.config.resolved_mocha_path();
        let (program, mut args) = match (mode, &self.config.node_path) {
            (RunMode::Run, None) => (mocha, Vec::new()),
            (RunMode::Run, Some(node)) => (node.clone(), vec![mocha]),
            (RunMode::Debug, node) => (
                node.clone().unwrap_or_else(|| "node".to_string()),
                vec![
                    format!("--inspect-brk={}", self.config.debug_port),
                    mocha,
                    "--no-timeouts".to_string(),
                ],
            ),
        };
        args.extend(self.config.mocha_args.iter().cloned());
        args.push(file_arg);

        let mut command = MochaCommand::new(program, args);
        if let Some(dir) = working_dir {
            command = command.with_working_dir(dir.to_string_lossy().into_owned());
        }

        let mut env: Vec<_> = self.config.env.iter().collect();
        env.sort();
        for (key, value) in env {
            command = command.with_env(key.clone(), value.clone());
        }
        command
    }
}
