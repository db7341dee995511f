use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File names searched for, in order, in each directory
pub const CONFIG_FILE_NAMES: &[&str] = &[".mocha-lens.json", "mocha-lens.json"];

pub const DEFAULT_MOCHA_PATH: &str = "node_modules/.bin/mocha";
pub const DEFAULT_DEBUG_PORT: u16 = 9229;

fn default_mocha_path() -> String {
    DEFAULT_MOCHA_PATH.to_string()
}

fn default_debug_port() -> u16 {
    DEFAULT_DEBUG_PORT
}

fn default_test_file_patterns() -> Vec<String> {
    [".test.js", ".spec.js", ".test.ts", ".spec.ts"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Mocha executable or script, relative to the config root unless absolute
    #[serde(default = "default_mocha_path")]
    pub mocha_path: String,

    /// Node binary used to launch mocha; mocha is invoked directly when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_path: Option<String>,

    /// Arguments placed before the test file
    #[serde(default)]
    pub mocha_args: Vec<String>,

    #[serde(default)]
    pub env: HashMap<String, String>,

    #[serde(default = "default_debug_port")]
    pub debug_port: u16,

    /// File name suffixes that mark a test file
    #[serde(default = "default_test_file_patterns")]
    pub test_file_patterns: Vec<String>,

    /// Directory holding the config file this was loaded from
    #[serde(skip)]
    pub root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mocha_path: default_mocha_path(),
            node_path: None,
            mocha_args: Vec::new(),
            env: HashMap::new(),
            debug_port: default_debug_port(),
            test_file_patterns: default_test_file_patterns(),
            root: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;
        config.root = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = if start_path.is_file() {
            start_path.parent()?
        } else {
            start_path
        };

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest config above `start_path`, or the defaults if none exists
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            None => {
                tracing::debug!("No config found above {}", start_path.display());
                Ok(Self::default())
            }
        }
    }

    /// `mocha_path` resolved against the config root
    pub fn resolved_mocha_path(&self) -> String {
        let mocha = Path::new(&self.mocha_path);
        match &self.root {
            Some(root) if mocha.is_relative() && self.mocha_path.contains('/') => {
                root.join(mocha).to_string_lossy().into_owned()
            }
            _ => self.mocha_path.clone(),
        }
    }
}
