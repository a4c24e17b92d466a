// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use tracing::warn;

use crate::config::{Settings, load_settings, read_settings};
use crate::core::arrange::EmptyDirPolicy;
use crate::core::filter::Exclusions;
use crate::core::ignore::load_ignore_patterns;
use crate::core::pipeline::{TreeOptions, build_explosion, combined_language_stats};
use crate::core::scanner::load_projects;
use crate::models::{ProjectSummary, StatKey};
use crate::utils::{render_language_table, render_summary, render_tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Report files (.json, .yaml, .yml) or directories to search for them
    #[arg(required = true)]
    pub reports: Vec<PathBuf>,

    /// Project-qualified folder to leave out, e.g. "myproject/vendor" (repeatable)
    #[arg(short = 'x', long = "exclude-folder")]
    pub exclude_folders: Vec<String>,

    /// Language whose directories are left out (repeatable)
    #[arg(short = 'l', long = "exclude-language")]
    pub exclude_languages: Vec<String>,

    /// Keep single-child directory chains expanded
    #[arg(long)]
    pub no_collapse: bool,

    /// Drop directories without any counted lines
    #[arg(long)]
    pub prune_empty: bool,

    /// Order children by this total, largest first
    #[arg(short, long, value_enum)]
    pub sort: Option<StatKey>,

    /// Directory separator used in reports and folder arguments
    #[arg(long)]
    pub separator: Option<char>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print combined per-language totals instead of the tree
    #[arg(long)]
    pub languages: bool,

    /// Print one summary per project instead of the tree
    #[arg(long, conflicts_with = "languages")]
    pub summary: bool,

    /// Deepest tree level printed in text output
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Settings file (defaults to the nearest xray.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Settings-file values with command-line flags applied on top.
    #[must_use]
    pub fn tree_options(&self, settings: &Settings) -> TreeOptions {
        let mut options = settings.tree_options();
        if let Some(separator) = self.separator {
            options.separator = separator;
        }
        if self.no_collapse {
            options.collapse = false;
        }
        if self.prune_empty {
            options.empty_dirs = EmptyDirPolicy::Prune;
        }
        if self.sort.is_some() {
            options.sort = self.sort;
        }
        options
    }

    #[must_use]
    pub fn exclusions(&self, settings: &Settings, separator: char) -> Exclusions {
        let mut exclusions = Exclusions::new();
        settings.apply_exclusions(&mut exclusions, separator);
        for folder in &self.exclude_folders {
            exclusions.exclude_folder_str(folder, separator);
        }
        for language in &self.exclude_languages {
            exclusions.exclude_language(language);
        }
        exclusions
    }
}

/// Produces everything `run` would print.
///
/// # Errors
///
/// This function may return an error if:
/// * The settings or ignore file cannot be read
/// * A report cannot be loaded
/// * A report has an invalid shape
/// * Serialization of the output fails
pub fn render(args: &Args) -> Result<String> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let settings = match &args.config {
        Some(path) => read_settings(path)?,
        None => load_settings(&cwd)?,
    };
    let options = args.tree_options(&settings);
    let exclusions = args
        .exclusions(&settings, options.separator)
        .with_patterns(load_ignore_patterns(&cwd)?);

    let projects = load_projects(&args.reports)?;
    if projects.is_empty() {
        warn!("no project reports found");
    }

    if args.languages {
        let stats = combined_language_stats(&projects);
        return match args.format {
            OutputFormat::Text => Ok(render_language_table(&stats)),
            format => serialize(&stats, format),
        };
    }

    if args.summary {
        let summaries: Vec<ProjectSummary> =
            projects.iter().map(ProjectSummary::from_project).collect();
        return match args.format {
            OutputFormat::Text => Ok(summaries
                .iter()
                .map(render_summary)
                .collect::<Vec<_>>()
                .join("\n")),
            format => serialize(&summaries, format),
        };
    }

    let root = build_explosion(&projects, &exclusions, &options)?;
    match args.format {
        OutputFormat::Text => Ok(render_tree(&root, options.separator, args.depth)),
        format => serialize(&root, format),
    }
}

fn serialize<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
        }
        OutputFormat::Yaml | OutputFormat::Text => {
            serde_yaml_ng::to_string(value).context("Failed to serialize output as YAML")
        }
    }
}

/// # Errors
///
/// See [`render`].
pub fn run(args: Args) -> Result<()> {
    let output = render(&args)?;
    print!("{output}");
    if !output.is_empty() && !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
