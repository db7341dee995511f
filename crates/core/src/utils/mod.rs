pub mod file_type;

pub use file_type::{SourceLanguage, is_test_file};
