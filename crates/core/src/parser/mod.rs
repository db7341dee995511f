//! Discovery of `describe`/`it` blocks in test source text

pub mod block_extractor;
pub mod declaration;

// Re-export commonly used items
pub use block_extractor::extract;
pub use declaration::{Declaration, match_declaration};
