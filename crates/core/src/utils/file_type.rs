use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::config::Config;

/// Source language of a test file, by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceLanguage {
    JavaScript,
    TypeScript,
    Unknown,
}

impl SourceLanguage {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("js" | "mjs" | "cjs" | "jsx") => SourceLanguage::JavaScript,
            Some("ts" | "mts" | "cts" | "tsx") => SourceLanguage::TypeScript,
            _ => SourceLanguage::Unknown,
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLanguage::JavaScript => f.write_str("JavaScript"),
            SourceLanguage::TypeScript => f.write_str("TypeScript"),
            SourceLanguage::Unknown => f.write_str("Unknown"),
        }
    }
}

const TEST_DIRECTORIES: &[&str] = &["test", "tests", "__tests__"];

/// Whether `path` looks like a mocha test file
///
/// True for names ending with a configured suffix, and for JS/TS sources
/// under a `test`, `tests` or `__tests__` directory.
pub fn is_test_file(path: &Path, config: &Config) -> bool {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

    if config
        .test_file_patterns
        .iter()
        .any(|suffix| file_name.ends_with(suffix.as_str()))
    {
        return true;
    }

    if SourceLanguage::from_path(path) == SourceLanguage::Unknown {
        return false;
    }

    path.parent()
        .map(|dir| {
            dir.components().any(|c| {
                c.as_os_str()
                    .to_str()
                    .is_some_and(|name| TEST_DIRECTORIES.contains(&name))
            })
        })
        .unwrap_or(false)
}
