// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use xray::{FileRecord, LanguageStat, Project};

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn create_ignore_file(dir: &Path, patterns: &[&str]) -> Result<()> {
    let content = patterns.join("\n");
    create_test_file(dir, xray::IGNORE_FILE_NAME, &content)?;
    Ok(())
}

pub fn write_json_report(dir: &Path, file_name: &str, project: &Project) -> Result<PathBuf> {
    create_test_file(dir, file_name, &serde_json::to_string_pretty(project)?)
}

pub fn stat(language: &str, code: u64) -> LanguageStat {
    LanguageStat::new(language, code, 0, 0)
}

pub fn record(dir: &str, stats: &[(&str, u64)]) -> FileRecord {
    FileRecord::new(
        dir,
        stats.iter().map(|&(language, code)| stat(language, code)).collect(),
    )
}

/// A small web project: backend code, a frontend, vendored libraries and docs.
pub fn webshop() -> Project {
    Project::new(
        "webshop",
        vec![
            record("", &[("TOML", 12)]),
            record("server/src", &[("Rust", 800)]),
            record("server/src/db", &[("Rust", 300), ("SQL", 120)]),
            record("client/app/components", &[("TypeScript", 500), ("CSS", 90)]),
            record("client/vendor/jquery", &[("JavaScript", 9000)]),
            record("docs", &[("Markdown", 40)]),
        ],
    )
}

pub fn toolbox() -> Project {
    Project::new(
        "toolbox",
        vec![
            record("cmd/toolbox", &[("Go", 150)]),
            record("internal/parse", &[("Go", 420)]),
        ],
    )
}

pub fn setup_report_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    write_json_report(temp_dir.path(), "webshop.json", &webshop())?;
    create_test_file(
        temp_dir.path(),
        "go/toolbox.yml",
        &serde_yaml_ng::to_string(&toolbox())?,
    )?;
    create_test_file(temp_dir.path(), ".old/stale.json", r#"{"name": "stale"}"#)?;
    create_test_file(temp_dir.path(), "notes.md", "# not a report")?;
    Ok(temp_dir)
}
