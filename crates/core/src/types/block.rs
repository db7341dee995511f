use serde::{Deserialize, Serialize};
use std::fmt;

use super::position::Position;

/// Index of a block inside the [`TestBlocks`](super::TestBlocks) arena it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub usize);

impl BlockId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of test declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// A `describe(...)` grouping
    Suite,
    /// A leaf `it(...)` test
    Case,
}

impl BlockKind {
    /// The identifier this kind is declared with in source
    pub fn keyword(self) -> &'static str {
        match self {
            BlockKind::Suite => "describe",
            BlockKind::Case => "it",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "describe" => Some(BlockKind::Suite),
            "it" => Some(BlockKind::Case),
            _ => None,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Suite => f.write_str("suite"),
            BlockKind::Case => f.write_str("case"),
        }
    }
}

/// A `describe`/`it` declaration discovered in a test file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestBlock {
    pub id: BlockId,
    pub kind: BlockKind,
    /// The quoted name passed to the declaration, without its quotes
    pub label: String,
    pub start: Position,
    /// Ancestor labels followed by `label`, joined with single spaces
    pub qualified_name: String,
    /// Nearest enclosing suite, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<BlockId>,
}

impl TestBlock {
    pub fn source_line(&self) -> u32 {
        self.start.line
    }

    pub fn source_column(&self) -> u32 {
        self.start.character
    }

    pub fn is_suite(&self) -> bool {
        self.kind == BlockKind::Suite
    }

    pub fn is_case(&self) -> bool {
        self.kind == BlockKind::Case
    }
}
