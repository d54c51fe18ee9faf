//! Integration tests for the name index against a live tree

use vigil::{NameIndex, Tree, VerifyResult};

#[test]
fn test_caller_population_loop() {
    let tree = Tree::from_records(&["a.txt", "b.txt", "c.txt"], &["1", "2", "3"]);

    // The documented caller-side flow: iterate leaves in order, put each.
    let mut index = NameIndex::new();
    for (position, leaf) in tree.leaves().iter().enumerate() {
        index.put(leaf.name(), position);
    }

    for (position, name) in ["a.txt", "b.txt", "c.txt"].iter().enumerate() {
        assert_eq!(index.get(name), Some(position));
        assert_eq!(index.leaf(&tree, name).unwrap().name(), *name);
    }
    assert_eq!(index.get("missing"), None);
}

#[test]
fn test_index_survives_build_and_verify() {
    let mut tree = Tree::from_records(&["x.txt", "y.txt"], &["ex", "why"]);
    let index = NameIndex::from_tree(&tree);

    // Building above the leaves never invalidates leaf positions.
    tree.build().unwrap();
    assert_eq!(tree.verify("x.txt"), VerifyResult::Intact);

    assert_eq!(index.leaf(&tree, "y.txt").unwrap().content(), b"why");
}

#[test]
fn test_index_sees_tampered_content() {
    let mut tree = Tree::from_records(&["x.txt"], &["original"]);
    tree.build().unwrap();
    let index = NameIndex::from_tree(&tree);

    tree.tamper("x.txt", "overwritten").unwrap();

    // The index resolves to the leaf itself, so it observes the raw content
    // while the cached digest is still the pre-tamper value.
    assert_eq!(index.leaf(&tree, "x.txt").unwrap().content(), b"overwritten");
}
