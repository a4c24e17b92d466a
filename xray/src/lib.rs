// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::{Args, OutputFormat, render, run};
pub use config::{CONFIG_FILE_NAME, Settings, load_settings, read_settings};
pub use crate::core::arrange::{EmptyDirPolicy, prune_empty, sort_children};
pub use crate::core::builder::build_project_tree;
pub use crate::core::collapse::collapse_degenerate;
pub use crate::core::filter::Exclusions;
pub use crate::core::fuse::{DEFAULT_COMPOSITE_NAME, fuse_projects};
pub use crate::core::ignore::{IGNORE_FILE_NAME, Patterns, load_ignore_patterns};
pub use crate::core::pipeline::{TreeOptions, build_explosion, combined_language_stats};
pub use crate::core::reducer::{reduce_by_name, sort_descending_by};
pub use crate::core::scanner::{find_reports, load_project, load_projects};
pub use error::BuildError;
pub use models::{
    DirNode, FileRecord, LanguageStat, LanguageStats, NodeKind, Project, ProjectSummary, StatKey,
};
