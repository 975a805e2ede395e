//! Property tests for status aggregation over real directory trees.

use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use logview::infrastructure::LocalFs;
use logview::{DirectoryNode, SeverityOrder, Status, StatusClassifier, TreeAggregator, TreeNode};

const CONTENTS: &[&str] = &[
    "plain output",
    "ERROR: step failed",
    "OVERRIDE applied",
    "RETRY 1/3",
    "SUCCESS",
    "",
];

const DIRS: &[&str] = &["", "a", "a/b", "c", "c/d/e"];

fn layout() -> impl Strategy<Value = Vec<(usize, usize)>> {
    proptest::collection::vec((0..DIRS.len(), 0..CONTENTS.len()), 0..12)
}

fn order() -> impl Strategy<Value = SeverityOrder> {
    Just(Status::ALL.to_vec())
        .prop_shuffle()
        .prop_map(|ranked| SeverityOrder::new(ranked).unwrap())
}

fn materialize(files: &[(usize, usize)]) -> TempDir {
    let root = tempfile::tempdir().unwrap();
    for (i, (dir, content)) in files.iter().enumerate() {
        let dir = root.path().join(DIRS[*dir]);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("f{i}.txt")), CONTENTS[*content]).unwrap();
    }
    root
}

fn check(node: &DirectoryNode, order: &SeverityOrder, classifier: &StatusClassifier) {
    let expected = order.most_dominant(node.children.iter().map(TreeNode::status));
    assert_eq!(node.status, expected, "folder {:?}", node.relative_path);

    for child in &node.children {
        if let TreeNode::Directory(dir) = child {
            check(dir, order, classifier);
        }
    }
}

fn file_statuses(node: &DirectoryNode, out: &mut Vec<Status>) {
    for child in &node.children {
        match child {
            TreeNode::File(file) => out.push(file.status),
            TreeNode::Directory(dir) => file_statuses(dir, out),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every folder carries the most dominant status of its children.
    #[test]
    fn property_folder_status_is_most_dominant_child(files in layout(), order in order()) {
        let root = materialize(&files);
        let classifier = StatusClassifier::default();
        let aggregator = TreeAggregator::new(LocalFs::new(), classifier.clone(), order.clone());

        let tree = aggregator.build_tree(root.path());
        check(&tree, &order, &classifier);
    }

    /// PROPERTY: file statuses match classifying their content directly.
    #[test]
    fn property_file_status_matches_content(files in layout()) {
        let root = materialize(&files);
        let classifier = StatusClassifier::default();
        let aggregator =
            TreeAggregator::new(LocalFs::new(), classifier.clone(), SeverityOrder::default());

        let tree = aggregator.build_tree(root.path());
        let mut found = Vec::new();
        file_statuses(&tree, &mut found);
        found.sort_by_key(|s| s.as_str());

        let mut expected: Vec<Status> = files
            .iter()
            .map(|(_, content)| classifier.classify(CONTENTS[*content]))
            .collect();
        expected.sort_by_key(|s| s.as_str());

        prop_assert_eq!(found, expected);
    }

    /// PROPERTY: walking the same tree twice gives the same result.
    #[test]
    fn property_walk_is_deterministic(files in layout()) {
        let root = materialize(&files);
        let aggregator = TreeAggregator::new(
            LocalFs::new(),
            StatusClassifier::default(),
            SeverityOrder::default(),
        );
        prop_assert_eq!(aggregator.build_tree(root.path()), aggregator.build_tree(root.path()));
    }
}
