use serde::{Deserialize, Serialize};

/// Zero-indexed location in a source file
///
/// `character` counts characters, not bytes. For a declaration it is the
/// offset of the first non-whitespace character on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}
