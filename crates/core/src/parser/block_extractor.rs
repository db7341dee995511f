use tracing::{debug, trace};

use super::declaration::match_declaration;
use crate::types::{BlockId, BlockKind, Position, TestBlocks};

/// Discover every `describe`/`it` block in `source`
///
/// Nesting is inferred from indentation alone: a declaration closes every
/// open suite indented at or beyond its own column. Lines that are not
/// single-line declarations are skipped, so this never fails and returns an
/// empty set for files without tests.
pub fn extract(source: &str) -> TestBlocks {
    let mut blocks = TestBlocks::new();
    // Open suites, outermost first, with their indentation column
    let mut open_suites: Vec<(BlockId, u32)> = Vec::new();

    for (line_number, line) in source.lines().enumerate() {
        let Some(declaration) = match_declaration(line) else {
            continue;
        };

        while open_suites
            .last()
            .is_some_and(|&(_, column)| column >= declaration.column)
        {
            open_suites.pop();
        }

        let parent = open_suites.last().map(|&(id, _)| id);
        let start = Position::new(line_number as u32, declaration.column);
        let id = blocks.push(
            declaration.kind,
            declaration.label.to_string(),
            start,
            parent,
        );
        trace!(
            "{} '{}' at {}:{} (parent: {:?})",
            declaration.kind.keyword(),
            declaration.label,
            start.line,
            start.character,
            parent
        );

        if declaration.kind == BlockKind::Suite {
            open_suites.push((id, declaration.column));
        }
    }

    debug!("Extracted {} test blocks", blocks.len());
    blocks
}
