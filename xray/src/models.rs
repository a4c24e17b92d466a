// src/models.rs
pub mod dir_node;
pub mod file_record;
pub mod language_stat;
pub mod project;
pub mod stat_list;

pub use dir_node::{DirNode, NodeKind};
pub use file_record::FileRecord;
pub use language_stat::{LanguageStat, StatKey};
pub use project::{Project, ProjectSummary};
pub use stat_list::LanguageStats;
