// tests/integration_tests/properties_test.rs
use proptest::prelude::*;
use xray::{
    DirNode, FileRecord, LanguageStat, LanguageStats, StatKey, build_project_tree,
    collapse_degenerate, fuse_projects, prune_empty, reduce_by_name, sort_children,
};

const LANGUAGES: [&str; 4] = ["Rust", "Go", "C", "Python"];
const SEGMENTS: [&str; 4] = ["a", "b", "c", "d"];

fn stat_strategy() -> impl Strategy<Value = LanguageStat> {
    (0..LANGUAGES.len(), 0_u64..500, 0_u64..50, 0_u64..50, 0_u64..4).prop_map(
        |(language, code, comment, blank, files)| {
            LanguageStat::new(LANGUAGES[language], code, comment, blank).with_files(files)
        },
    )
}

fn record_strategy() -> impl Strategy<Value = FileRecord> {
    (
        prop::collection::vec(0..SEGMENTS.len(), 0..5),
        prop::collection::vec(stat_strategy(), 0..3),
    )
        .prop_map(|(segments, stats)| {
            let dir = segments
                .iter()
                .map(|&i| SEGMENTS[i])
                .collect::<Vec<_>>()
                .join("/");
            // one entry per language inside a record
            FileRecord::new(dir, reduce_by_name(&stats))
        })
}

fn tree_strategy() -> impl Strategy<Value = DirNode> {
    prop::collection::vec(record_strategy(), 0..12).prop_filter_map(
        "records form a valid tree",
        |records| build_project_tree("p", &records, '/').ok(),
    )
}

fn names(node: &DirNode) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    node.visit(&mut |n| out.push(n.path.clone()));
    out
}

proptest! {
    #[test]
    fn built_trees_hold_the_aggregate_invariant(tree in tree_strategy()) {
        prop_assert!(tree.aggregates_consistent());
    }

    #[test]
    fn collapse_is_lossless(tree in tree_strategy()) {
        let mut collapsed = tree.clone();
        collapse_degenerate(&mut collapsed);

        prop_assert!(collapsed.aggregates_consistent());
        prop_assert_eq!(&collapsed.subtree_stats, &tree.subtree_stats);
        prop_assert_eq!(collapsed.flattened_own_stats(), tree.flattened_own_stats());
    }

    #[test]
    fn collapse_is_idempotent(tree in tree_strategy()) {
        let mut once = tree;
        collapse_degenerate(&mut once);
        let mut twice = once.clone();
        prop_assert_eq!(collapse_degenerate(&mut twice), 0);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn collapsed_paths_extend_parent_paths(tree in tree_strategy()) {
        let mut collapsed = tree;
        collapse_degenerate(&mut collapsed);
        let mut ok = true;
        collapsed.visit(&mut |node| {
            for child in &node.children {
                let mut expected = node.path.clone();
                expected.extend(child.name.iter().cloned());
                ok &= child.path == expected;
            }
        });
        prop_assert!(ok);
    }

    #[test]
    fn prune_and_sort_keep_the_invariant(tree in tree_strategy()) {
        let mut arranged = tree.clone();
        prune_empty(&mut arranged);
        sort_children(&mut arranged, StatKey::Code);

        prop_assert!(arranged.aggregates_consistent());
        for key in [StatKey::Code, StatKey::Comment, StatKey::Blank, StatKey::Files] {
            prop_assert_eq!(arranged.weight(key), tree.weight(key));
        }
        let mut ordered = true;
        arranged.visit(&mut |node| {
            ordered &= node
                .children
                .windows(2)
                .all(|pair| pair[0].weight(StatKey::Code) >= pair[1].weight(StatKey::Code));
        });
        prop_assert!(ordered);
    }

    #[test]
    fn sort_only_reorders(tree in tree_strategy()) {
        let mut sorted = tree.clone();
        sort_children(&mut sorted, StatKey::Lines);
        let mut before = names(&tree);
        let mut after = names(&sorted);
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn fusing_one_tree_is_identity(tree in tree_strategy()) {
        prop_assert_eq!(fuse_projects(vec![tree.clone()], "All"), tree);
    }

    #[test]
    fn fusing_two_trees_reduces_both(a in tree_strategy(), b in tree_strategy()) {
        let fused = fuse_projects(vec![a.clone(), b.clone()], "All");
        let mut expected = a.subtree_stats.clone();
        expected.merge(&b.subtree_stats);

        prop_assert_eq!(&fused.subtree_stats, &expected);
        prop_assert_eq!(fused.children, vec![a, b]);
    }

    #[test]
    fn reducing_a_list_with_itself_doubles_it(stats in prop::collection::vec(stat_strategy(), 0..10)) {
        let single = LanguageStats::reduce(&stats);
        let doubled = LanguageStats::reduce(stats.iter().chain(stats.iter()));

        prop_assert_eq!(single.len(), doubled.len());
        for stat in &single {
            let twice = doubled.get(&stat.name).cloned().unwrap_or_else(|| LanguageStat::zero(""));
            prop_assert_eq!(twice.code, stat.code * 2);
            prop_assert_eq!(twice.comment, stat.comment * 2);
            prop_assert_eq!(twice.blank, stat.blank * 2);
            prop_assert_eq!(twice.files, stat.files * 2);
        }
    }
}
