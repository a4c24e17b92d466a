// tests/integration_tests/edge_cases_test.rs
use super::common::record;
use anyhow::Result;
use xray::{
    BuildError, DirNode, EmptyDirPolicy, Exclusions, FileRecord, NodeKind, Project, StatKey,
    TreeOptions, build_explosion, build_project_tree, collapse_degenerate, fuse_projects,
};

#[test]
fn test_no_projects_yield_empty_composite_root() -> Result<()> {
    let root = build_explosion(&[], &Exclusions::new(), &TreeOptions::default())?;
    assert_eq!(root.kind, NodeKind::MultiProjectRoot);
    assert!(root.children.is_empty());
    assert!(root.subtree_stats.is_empty());
    Ok(())
}

#[test]
fn test_project_without_records_is_a_bare_root() -> Result<()> {
    let root = build_project_tree("empty", &[], '/')?;
    assert_eq!(root.kind, NodeKind::ProjectRoot);
    assert!(root.children.is_empty());
    assert!(root.own_stats.is_empty());
    Ok(())
}

#[test]
fn test_files_at_project_root_stay_on_the_root() -> Result<()> {
    let root = build_project_tree("p", &[record("", &[("Make", 3)])], '/')?;
    assert!(root.children.is_empty());
    assert_eq!(root.own_stats.get("Make").map(|s| s.code), Some(3));
    Ok(())
}

#[test]
fn test_repeated_directory_records_accumulate() -> Result<()> {
    let records = vec![
        record("src", &[("Rust", 10)]),
        record("src", &[("Rust", 5), ("C", 1)]),
    ];
    let root = build_project_tree("p", &records, '/')?;
    let src = root.child(&["src"]).expect("src exists");
    let rust = src.own_stats.get("Rust").expect("Rust counted");
    assert_eq!((rust.code, rust.files), (15, 2));
    assert_eq!(src.own_stats.len(), 2);
    Ok(())
}

#[test]
fn test_backslash_separator() -> Result<()> {
    let records = vec![record(r"src\win\io", &[("C", 9)])];
    let options = TreeOptions {
        separator: '\\',
        ..TreeOptions::default()
    };
    let root = build_explosion(&[Project::new("p", records)], &Exclusions::new(), &options)?;
    assert_eq!(root.children[0].display_name('\\'), r"src\win\io");
    assert_eq!(root.children[0].name, vec!["src", "win", "io"]);
    Ok(())
}

#[test]
fn test_deep_chain_of_empty_leaf_collapses_fully() -> Result<()> {
    let mut root = build_project_tree("p", &[FileRecord::new("a/b/c/d/e", vec![])], '/')?;
    assert_eq!(collapse_degenerate(&mut root), 4);
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].display_name('/'), "a/b/c/d/e");
    assert!(root.children[0].children.is_empty());
    Ok(())
}

#[test]
fn test_empty_directories_are_kept_by_default() -> Result<()> {
    let project = Project::new(
        "p",
        vec![record("code", &[("Rust", 1)]), FileRecord::new("empty", vec![])],
    );
    let kept = build_explosion(
        std::slice::from_ref(&project),
        &Exclusions::new(),
        &TreeOptions::default(),
    )?;
    assert_eq!(kept.children.len(), 2);

    let options = TreeOptions {
        empty_dirs: EmptyDirPolicy::Prune,
        ..TreeOptions::default()
    };
    let pruned = build_explosion(&[project], &Exclusions::new(), &options)?;
    assert_eq!(pruned.children.len(), 1);
    assert_eq!(pruned.weight(StatKey::Files), 1);
    Ok(())
}

#[test]
fn test_same_named_projects_are_not_merged() -> Result<()> {
    let a = build_project_tree("same", &[record("x", &[("Go", 1)])], '/')?;
    let b = build_project_tree("same", &[record("y", &[("Go", 2)])], '/')?;
    let root = fuse_projects(vec![a, b], "All");
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.display_name('/'), "All");
    Ok(())
}

#[test]
fn test_invalid_input_shapes() {
    assert_eq!(
        build_project_tree("", &[], '/'),
        Err(BuildError::EmptyProjectName)
    );
    assert!(matches!(
        build_project_tree("p", &[record("a", &[("", 1)])], '/'),
        Err(BuildError::EmptyLanguageName { .. })
    ));
    assert!(matches!(
        build_project_tree("p", &[record("a", &[("Go", 1), ("Go", 2)])], '/'),
        Err(BuildError::DuplicateLanguage { .. })
    ));
    assert!(matches!(
        build_project_tree("p", &[record("/a", &[("Go", 1)])], '/'),
        Err(BuildError::EmptySegment { .. })
    ));
}

#[test]
fn test_multi_root_is_never_collapsed() {
    let mut lone = DirNode::multi_project_root("All");
    lone.children.push(DirNode::project_root("only"));
    let before = lone.clone();
    collapse_degenerate(&mut lone);
    assert_eq!(lone, before);
}
