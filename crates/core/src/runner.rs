//! Main runner that coordinates parsing, pattern synthesis, and command generation

use crate::{
    command::{CommandBuilder, MochaCommand, RunMode},
    config::Config,
    error::Result,
    parser::{declaration::indent_column, extract},
    types::{BlockKind, Position, TestBlock, TestBlocks},
    utils::{SourceLanguage, is_test_file},
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An action a decoration layer places at a block's position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lens {
    pub position: Position,
    pub title: String,
    pub mode: RunMode,
    pub pattern: String,
}

/// A block together with the pattern that selects it
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedBlock {
    #[serde(flatten)]
    pub block: TestBlock,
    pub pattern: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub file_path: PathBuf,
    pub language: SourceLanguage,
    pub is_test_file: bool,
    pub blocks: Vec<AnalyzedBlock>,
    pub file_command: MochaCommand,
}

pub struct MochaLens {
    config: Config,
}

impl MochaLens {
    /// Runner configured from the nearest config above the current directory
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::with_path(&cwd)
    }

    /// Runner configured from the nearest config above `path`
    pub fn with_path(path: &Path) -> Result<Self> {
        Ok(Self::with_config(Config::discover(path)?))
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse `file_path` from disk; every call is a fresh parse
    pub fn detect_blocks(&self, file_path: &Path) -> Result<TestBlocks> {
        let source = read_source(file_path)?;
        debug!("Parsing {} ({} bytes)", file_path.display(), source.len());
        Ok(extract(&source))
    }

    /// Run and debug lenses for every block, in declaration order
    pub fn lenses(&self, file_path: &Path) -> Result<Vec<Lens>> {
        let blocks = self.detect_blocks(file_path)?;
        Ok(blocks
            .iter()
            .flat_map(|block| {
                let pattern = blocks.pattern_for(block.id);
                let noun = match block.kind {
                    BlockKind::Suite => "suite",
                    BlockKind::Case => "test",
                };
                [RunMode::Run, RunMode::Debug].map(|mode| Lens {
                    position: block.start,
                    title: match mode {
                        RunMode::Run => format!("Run {noun}"),
                        RunMode::Debug => format!("Debug {noun}"),
                    },
                    mode,
                    pattern: pattern.clone(),
                })
            })
            .collect())
    }

    /// The block a cursor on `line` refers to
    pub fn block_at_line(&self, file_path: &Path, line: u32) -> Result<Option<TestBlock>> {
        let source = read_source(file_path)?;
        let blocks = extract(&source);
        Ok(select_block(&source, &blocks, line).cloned())
    }

    /// Grep pattern of the block a cursor on `line` refers to
    pub fn pattern_at_line(&self, file_path: &Path, line: u32) -> Result<Option<String>> {
        let source = read_source(file_path)?;
        let blocks = extract(&source);
        Ok(select_block(&source, &blocks, line).map(|block| blocks.pattern_for(block.id)))
    }

    /// Command for the block at `line`, or for the whole file when there is none
    pub fn build_command(
        &self,
        file_path: &Path,
        line: Option<u32>,
        mode: RunMode,
    ) -> Result<MochaCommand> {
        let builder = CommandBuilder::new(self.config.clone());
        let Some(line) = line else {
            return Ok(builder.build_for_file(file_path, mode));
        };

        let source = read_source(file_path)?;
        let blocks = extract(&source);
        match select_block(&source, &blocks, line) {
            Some(block) => builder.build_for_block(file_path, &blocks, block.id, mode),
            None => {
                debug!("No block at line {line}, falling back to file command");
                Ok(builder.build_for_file(file_path, mode))
            }
        }
    }

    pub fn build_file_command(&self, file_path: &Path, mode: RunMode) -> MochaCommand {
        CommandBuilder::new(self.config.clone()).build_for_file(file_path, mode)
    }

    pub fn analysis(&self, file_path: &Path) -> Result<Analysis> {
        let blocks = self.detect_blocks(file_path)?;
        let analyzed = blocks
            .iter()
            .map(|block| AnalyzedBlock {
                block: block.clone(),
                pattern: blocks.pattern_for(block.id),
            })
            .collect();

        Ok(Analysis {
            file_path: file_path.to_path_buf(),
            language: SourceLanguage::from_path(file_path),
            is_test_file: is_test_file(file_path, &self.config),
            blocks: analyzed,
            file_command: self.build_file_command(file_path, RunMode::Run),
        })
    }

    /// Analysis as pretty JSON
    pub fn analyze(&self, file_path: &Path) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.analysis(file_path)?)?)
    }
}

/// Read a source file, dropping a leading byte order mark
fn read_source(file_path: &Path) -> Result<String> {
    let source = std::fs::read_to_string(file_path)?;
    Ok(match source.strip_prefix('\u{FEFF}') {
        Some(stripped) => stripped.to_string(),
        None => source,
    })
}

/// Pick the block for a cursor on `line`, using indentation as structure
///
/// A blank line takes the indentation of the next non-blank line, or of the
/// previous one at the end of the file.
fn select_block<'a>(source: &str, blocks: &'a TestBlocks, line: u32) -> Option<&'a TestBlock> {
    let lines: Vec<&str> = source.lines().collect();
    let index = line as usize;
    let is_code = |text: &&str| !text.trim().is_empty();

    let column = lines
        .get(index)
        .copied()
        .filter(is_code)
        .or_else(|| lines.iter().skip(index + 1).copied().find(is_code))
        .or_else(|| {
            lines[..index.min(lines.len())]
                .iter()
                .rev()
                .copied()
                .find(is_code)
        })
        .map(indent_column)
        .unwrap_or(u32::MAX);
    blocks.enclosing(line, column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SOURCE: &str = r#"const assert = require('assert');

describe('Array', function () {
  describe('#indexOf()', function () {
    it('returns -1 when missing', function () {
      assert.equal([1, 2, 3].indexOf(4), -1);
    });
  });

  it('has length', function () {});
});
"#;

    fn write_source() -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".spec.js").tempfile().unwrap();
        write!(file, "{SOURCE}").unwrap();
        file
    }

    fn runner() -> MochaLens {
        MochaLens::with_config(Config {
            mocha_path: "mocha".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_block_at_line() -> Result<()> {
        let file = write_source();
        let runner = runner();

        let on_declaration = runner.block_at_line(file.path(), 4)?.unwrap();
        assert_eq!(on_declaration.label, "returns -1 when missing");

        let in_body = runner.block_at_line(file.path(), 5)?.unwrap();
        assert_eq!(in_body.label, "returns -1 when missing");

        let after_inner = runner.block_at_line(file.path(), 7)?.unwrap();
        assert_eq!(after_inner.label, "Array");

        let blank = runner.block_at_line(file.path(), 8)?.unwrap();
        assert_eq!(blank.label, "Array");

        assert!(runner.block_at_line(file.path(), 0)?.is_none());
        Ok(())
    }

    #[test]
    fn test_blank_line_between_closed_siblings() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".spec.js").tempfile()?;
        write!(
            file,
            "describe('S', () => {{\n  it('first', () => {{\n    x();\n  }});\n\n  it('second', () => {{}});\n}});\n"
        )?;
        let runner = runner();

        let cmd = runner.build_command(file.path(), Some(4), RunMode::Run)?;
        assert_eq!(cmd.grep.as_deref(), Some("^S"));

        // No line follows, so the previous line's indentation is used
        let mut trailing = tempfile::Builder::new().suffix(".spec.js").tempfile()?;
        write!(trailing, "describe('S', () => {{\n  it('only', () => {{\n    x();\n\n")?;
        assert_eq!(
            runner.pattern_at_line(trailing.path(), 3)?.as_deref(),
            Some("^S only$")
        );
        Ok(())
    }

    #[test]
    fn test_byte_order_mark_is_ignored() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".spec.js").tempfile()?;
        write!(file, "\u{FEFF}describe('S', () => {{\n  it('a', () => {{}});\n}});\n")?;

        let blocks = runner().detect_blocks(file.path())?;
        let names: Vec<_> = blocks
            .iter()
            .map(|b| (b.qualified_name.as_str(), b.parent))
            .collect();
        assert_eq!(names, vec![("S", None), ("S a", Some(crate::BlockId(0)))]);
        assert_eq!(blocks[crate::BlockId(0)].start, Position::new(0, 0));
        Ok(())
    }

    #[test]
    fn test_pattern_at_line() -> Result<()> {
        let file = write_source();
        let runner = runner();
        assert_eq!(
            runner.pattern_at_line(file.path(), 5)?.as_deref(),
            Some("^Array #indexOf\\(\\) returns -1 when missing$")
        );
        assert_eq!(runner.pattern_at_line(file.path(), 1)?, None);
        Ok(())
    }

    #[test]
    fn test_build_command_for_line() -> Result<()> {
        let file = write_source();
        let runner = runner();

        let cmd = runner.build_command(file.path(), Some(3), RunMode::Run)?;
        assert_eq!(cmd.grep.as_deref(), Some(r"^Array #indexOf\(\)"));

        let cmd = runner.build_command(file.path(), Some(9), RunMode::Debug)?;
        assert_eq!(cmd.grep.as_deref(), Some("^Array has length$"));
        assert_eq!(cmd.program, "node");

        let file_cmd = runner.build_command(file.path(), Some(0), RunMode::Run)?;
        assert!(file_cmd.grep.is_none());
        assert_eq!(file_cmd, runner.build_command(file.path(), None, RunMode::Run)?);
        Ok(())
    }

    #[test]
    fn test_lenses() -> Result<()> {
        let file = write_source();
        let lenses = runner().lenses(file.path())?;
        assert_eq!(lenses.len(), 8);
        assert_eq!(lenses[0].title, "Run suite");
        assert_eq!(lenses[1].title, "Debug suite");
        assert_eq!(lenses[0].position, Position::new(2, 0));
        assert_eq!(lenses[4].title, "Run test");
        assert_eq!(lenses[4].pattern, r"^Array #indexOf\(\) returns -1 when missing$");
        Ok(())
    }

    #[test]
    fn test_analysis() -> Result<()> {
        let file = write_source();
        let analysis = runner().analysis(file.path())?;
        assert!(analysis.is_test_file);
        assert_eq!(analysis.language, SourceLanguage::JavaScript);
        assert_eq!(analysis.blocks.len(), 4);
        assert_eq!(analysis.blocks[3].pattern, "^Array has length$");

        let json: serde_json::Value = serde_json::from_str(&runner().analyze(file.path())?)?;
        assert_eq!(json["blocks"][1]["qualified_name"], "Array #indexOf()");
        assert_eq!(json["blocks"][1]["kind"], "suite");
        assert_eq!(json["blocks"][1]["parent"], 0);
        assert!(json["blocks"][0].get("parent").is_none());
        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = runner()
            .detect_blocks(Path::new("/definitely/not/here.spec.js"))
            .unwrap_err();
        assert!(matches!(err, crate::Error::IoError(_)));
    }
}
