pub mod block;
pub mod blocks;
pub mod position;

// Re-export commonly used types
pub use block::{BlockId, BlockKind, TestBlock};
pub use blocks::TestBlocks;
pub use position::Position;
