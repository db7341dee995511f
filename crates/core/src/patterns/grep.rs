use crate::types::{BlockId, BlockKind, TestBlocks};

/// Characters that carry meaning in a regular expression
const REGEX_METACHARACTERS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Backslash-escape every regex metacharacter in `label`
pub fn escape_regex(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        if REGEX_METACHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build the `--grep` pattern selecting one block
///
/// A case is anchored at both ends so that a test whose name is a prefix of
/// another never selects both. A suite is anchored only at the start and so
/// selects its whole subtree.
///
/// Returns an empty string if `id` is not part of `blocks`.
pub fn build_pattern(blocks: &TestBlocks, id: BlockId) -> String {
    let Some(block) = blocks.get(id) else {
        return String::new();
    };

    let escaped = blocks
        .ancestry(id)
        .iter()
        .map(|b| escape_regex(&b.label))
        .collect::<Vec<_>>()
        .join(" ");

    match block.kind {
        BlockKind::Case => format!("^{escaped}$"),
        BlockKind::Suite => format!("^{escaped}"),
    }
}

impl TestBlocks {
    /// Shorthand for [`build_pattern`]
    pub fn pattern_for(&self, id: BlockId) -> String {
        build_pattern(self, id)
    }
}
