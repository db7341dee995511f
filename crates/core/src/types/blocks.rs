use serde::{Deserialize, Serialize};

use super::block::{BlockId, BlockKind, TestBlock};
use super::position::Position;

/// Arena of blocks produced by a single parse
///
/// Blocks are stored in declaration order and refer to their parent by
/// [`BlockId`]. A parent is always stored before its children, so walking
/// `parent` links terminates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestBlocks {
    blocks: Vec<TestBlock>,
}

impl TestBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block under `parent`, deriving its id and qualified name
    pub(crate) fn push(
        &mut self,
        kind: BlockKind,
        label: String,
        start: Position,
        parent: Option<BlockId>,
    ) -> BlockId {
        let id = BlockId(self.blocks.len());
        let qualified_name = match parent.and_then(|p| self.get(p)) {
            Some(parent) => format!("{} {}", parent.qualified_name, label),
            None => label.clone(),
        };
        self.blocks.push(TestBlock {
            id,
            kind,
            label,
            start,
            qualified_name,
            parent,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestBlock> {
        self.blocks.iter()
    }

    pub fn as_slice(&self) -> &[TestBlock] {
        &self.blocks
    }

    pub fn get(&self, id: BlockId) -> Option<&TestBlock> {
        self.blocks.get(id.index())
    }

    pub fn parent_of(&self, block: &TestBlock) -> Option<&TestBlock> {
        block.parent.and_then(|id| self.get(id))
    }

    /// The chain from the outermost ancestor down to `id` itself
    pub fn ancestry(&self, id: BlockId) -> Vec<&TestBlock> {
        let mut chain = Vec::new();
        let mut current = self.get(id);
        while let Some(block) = current {
            chain.push(block);
            current = self.parent_of(block);
        }
        chain.reverse();
        chain
    }

    pub fn children_of(&self, id: BlockId) -> impl Iterator<Item = &TestBlock> {
        self.blocks.iter().filter(move |b| b.parent == Some(id))
    }

    pub fn suites(&self) -> impl Iterator<Item = &TestBlock> {
        self.blocks.iter().filter(|b| b.is_suite())
    }

    pub fn cases(&self) -> impl Iterator<Item = &TestBlock> {
        self.blocks.iter().filter(|b| b.is_case())
    }

    /// Blocks declared on `line`, in declaration order
    pub fn at_line(&self, line: u32) -> impl Iterator<Item = &TestBlock> {
        self.blocks.iter().filter(move |b| b.start.line == line)
    }

    /// Innermost block that plausibly contains a position
    ///
    /// A block declared on `line` wins. Otherwise the latest block declared
    /// before `line` whose column is smaller than `column` is chosen, using
    /// indentation as the only structural signal.
    pub fn enclosing(&self, line: u32, column: u32) -> Option<&TestBlock> {
        if let Some(block) = self.at_line(line).next() {
            return Some(block);
        }
        self.blocks
            .iter()
            .rev()
            .filter(|b| b.start.line < line)
            .find(|b| b.start.character < column)
    }
}

impl<'a> IntoIterator for &'a TestBlocks {
    type Item = &'a TestBlock;
    type IntoIter = std::slice::Iter<'a, TestBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl std::ops::Index<BlockId> for TestBlocks {
    type Output = TestBlock;

    fn index(&self, id: BlockId) -> &Self::Output {
        &self.blocks[id.index()]
    }
}
