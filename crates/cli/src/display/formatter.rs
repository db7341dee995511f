use mocha_lens_core::{BlockKind, Config, TestBlock, utils::SourceLanguage, utils::is_test_file};
use std::path::Path;

/// Describe the file for display purposes
pub fn determine_file_type(path: &Path, config: &Config) -> String {
    let language = SourceLanguage::from_path(path);
    if is_test_file(path, config) {
        format!("{language} test file")
    } else if language == SourceLanguage::Unknown {
        "Unrecognized file".to_string()
    } else {
        format!("{language} file (not matched as a test file)")
    }
}

/// One line describing a block, indented by nesting depth
pub fn render_block(block: &TestBlock, depth: usize, pattern: &str) -> String {
    let icon = match block.kind {
        BlockKind::Suite => "📦",
        BlockKind::Case => "🧪",
    };
    format!(
        "{}{icon} {} '{}' (line {}, col {})\n{}   🔎 {}",
        "  ".repeat(depth),
        block.kind.keyword(),
        block.label,
        block.source_line() + 1,
        block.source_column() + 1,
        "  ".repeat(depth),
        pattern
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mocha_lens_core::{BlockId, extract};
    use std::path::PathBuf;

    #[test]
    fn test_determine_file_type() {
        let config = Config::default();
        assert_eq!(
            determine_file_type(&PathBuf::from("test/app.spec.ts"), &config),
            "TypeScript test file"
        );
        assert_eq!(
            determine_file_type(&PathBuf::from("src/app.js"), &config),
            "JavaScript file (not matched as a test file)"
        );
        assert_eq!(
            determine_file_type(&PathBuf::from("README.md"), &config),
            "Unrecognized file"
        );
    }

    #[test]
    fn test_render_block() {
        let blocks = extract("describe('App', () => {\n  it('boots', () => {});\n});");
        let case = &blocks[BlockId(1)];
        let rendered = render_block(case, 1, &blocks.pattern_for(case.id));
        assert_eq!(
            rendered,
            "  🧪 it 'boots' (line 2, col 3)\n     🔎 ^App boots$"
        );
    }
}
