// src/core/scanner.rs
use anyhow::{Context as _, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::models::Project;
use crate::utils::is_hidden;


const REPORT_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    Json,
    Yaml,
}

fn report_format(path: &Path) -> Option<ReportFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "json" => Some(ReportFormat::Json),
        "yaml" | "yml" => Some(ReportFormat::Yaml),
        _ => None,
    }
}

/// Reads one project report (`.json`, `.yaml` or `.yml`).
///
/// A report without a `name` is named after its file stem.
///
/// # Errors
///
/// This function may return an error if:
/// * The extension is not a known report format
/// * The file cannot be read
/// * The content does not describe a project
#[inline]
pub fn load_project(path: &Path) -> Result<Project> {
    let Some(format) = report_format(path) else {
        bail!(
            "Unsupported report format: {} (expected one of {})",
            path.display(),
            REPORT_EXTENSIONS.join(", ")
        );
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read report: {}", path.display()))?;

    let mut project: Project = match format {
        ReportFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON report: {}", path.display()))?,
        ReportFormat::Yaml => serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse YAML report: {}", path.display()))?,
    };

    if project.name.trim().is_empty() {
        project.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
    }
    debug!(path = %path.display(), project = %project.name, files = project.files.len(), "loaded report");
    Ok(project)
}

/// Report files under `dir`, sorted by path. Hidden entries are skipped.
///
/// # Errors
///
/// This function may return an error if the directory cannot be traversed.
#[inline]
pub fn find_reports(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut reports = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = entry.with_context(|| format!("Failed to scan {}", dir.display()))?;
        if entry.file_type().is_file() && report_format(entry.path()).is_some() {
            reports.push(entry.into_path());
        }
    }

    reports.sort();
    Ok(reports)
}

/// Loads every report named on the command line. Directories are searched
/// recursively; files found that way which fail to parse are skipped with a
/// warning, while explicitly named files must parse.
///
/// # Errors
///
/// This function may return an error if:
/// * An explicitly named file cannot be loaded
/// * A directory cannot be traversed
#[inline]
pub fn load_projects(inputs: &[PathBuf]) -> Result<Vec<Project>> {
    let mut projects = Vec::new();
    for input in inputs {
        if input.is_dir() {
            for path in find_reports(input)? {
                match load_project(&path) {
                    Ok(project) => projects.push(project),
                    Err(err) => warn!(path = %path.display(), error = %format!("{err:#}"), "skipping report"),
                }
            }
        } else {
            projects.push(load_project(input)?);
        }
    }
    Ok(projects)
}
