//! Configuration loaded from `.mocha-lens.json`

pub mod settings;

pub use settings::{CONFIG_FILE_NAMES, Config, DEFAULT_DEBUG_PORT, DEFAULT_MOCHA_PATH};
