// src/error.rs
use thiserror::Error;

/// Input shape problems found while building a project tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("project name must not be empty")]
    EmptyProjectName,

    #[error("project '{project}': a language in directory '{dir}' has an empty name")]
    EmptyLanguageName { project: String, dir: String },

    #[error("project '{project}': language '{language}' listed twice for directory '{dir}'")]
    DuplicateLanguage {
        project: String,
        dir: String,
        language: String,
    },

    #[error("project '{project}': directory '{dir}' contains an empty path segment")]
    EmptySegment { project: String, dir: String },
}
