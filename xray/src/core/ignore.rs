// src/core/ignore.rs
pub mod loader;
pub mod patterns;

pub use loader::{IGNORE_FILE_NAME, find_upwards, load_ignore_patterns, read_ignore_file};
pub use patterns::Patterns;
