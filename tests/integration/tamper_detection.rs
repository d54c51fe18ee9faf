//! End-to-end tamper detection over the reference three-record dataset

use vigil::{Tree, TreeError, VerifyResult};

const NAMES: [&str; 3] = ["math.txt", "ai.txt", "ethics.txt"];
const CONTENTS: [&str; 3] = [
    "Mathematics is the language of the universe.",
    "Artificial Intelligence is shaping the future.",
    "Ethics keeps technology human-centered.",
];

fn reference_tree() -> Tree {
    let mut tree = Tree::from_records(&NAMES, &CONTENTS);
    tree.build().unwrap();
    tree
}

/// The full reference scenario: build, verify all, tamper one record,
/// observe the divergence, and confirm the rebuilt tree clears the others.
#[test]
fn test_reference_scenario() {
    let mut tree = reference_tree();
    let pristine_root = tree.root_hex().unwrap();
    assert_eq!(pristine_root.len(), 64);

    // Everything verifies intact right after the build.
    for name in NAMES {
        assert_eq!(tree.verify(name), VerifyResult::Intact);
    }
    assert_eq!(tree.root_hex().unwrap(), pristine_root);

    tree.tamper("math.txt", "hacked content!").unwrap();

    // Tampering alone changes nothing observable.
    assert_eq!(tree.root_hex().unwrap(), pristine_root);

    // The verify recomputes from current content and catches the divergence.
    assert_eq!(tree.verify("math.txt"), VerifyResult::Tampered);
    assert_ne!(tree.root_hex().unwrap(), pristine_root);

    // The same (rebuilt) tree clears records that never changed.
    assert_eq!(tree.verify("ai.txt"), VerifyResult::Intact);
    assert_eq!(tree.verify("ethics.txt"), VerifyResult::Intact);

    // And self-heals the tampered one on the next pass.
    assert_eq!(tree.verify("math.txt"), VerifyResult::Intact);
}

#[test]
fn test_verify_unknown_name_regardless_of_tree_state() {
    let mut tree = reference_tree();
    assert_eq!(tree.verify("nonexistent"), VerifyResult::NotFound);

    tree.tamper("ai.txt", "rewritten").unwrap();
    assert_eq!(tree.verify("nonexistent"), VerifyResult::NotFound);

    assert_eq!(tree.verify("ai.txt"), VerifyResult::Tampered);
    assert_eq!(tree.verify("nonexistent"), VerifyResult::NotFound);
}

#[test]
fn test_tamper_unknown_name_is_error() {
    let mut tree = reference_tree();
    assert_eq!(
        tree.tamper("ghost.txt", "payload"),
        Err(TreeError::LeafNotFound("ghost.txt".to_string()))
    );
}

#[test]
fn test_tamper_restoring_original_content_verifies_intact() {
    let mut tree = reference_tree();

    tree.tamper("ethics.txt", "temporary damage").unwrap();
    tree.tamper("ethics.txt", CONTENTS[2]).unwrap();

    // Content matches the recorded digests again, so nothing diverges.
    assert_eq!(tree.verify("ethics.txt"), VerifyResult::Intact);
}

#[test]
fn test_tampering_one_record_leaves_other_leaf_digests_unchanged() {
    let mut tree = reference_tree();
    let ai_digest = *tree.leaves()[1].digest();
    let ethics_digest = *tree.leaves()[2].digest();

    tree.tamper("math.txt", "hacked content!").unwrap();
    assert_eq!(tree.verify("math.txt"), VerifyResult::Tampered);

    assert_eq!(tree.leaves()[1].digest(), &ai_digest);
    assert_eq!(tree.leaves()[2].digest(), &ethics_digest);
}

#[test]
fn test_large_content_hashes_in_full() {
    // Contents well past any fixed buffer size still verify correctly.
    let big_a = "a".repeat(64 * 1024);
    let mut big_b = big_a.clone();
    big_b.push('b');

    let mut tree = Tree::from_records(&["big.bin", "small.txt"], &[big_a, "tiny".to_string()]);
    tree.build().unwrap();
    let root = tree.root_hex().unwrap();

    assert_eq!(tree.verify("big.bin"), VerifyResult::Intact);

    // A single appended byte at the end of 64 KiB must flip the root.
    tree.tamper("big.bin", big_b).unwrap();
    assert_eq!(tree.verify("big.bin"), VerifyResult::Tampered);
    assert_ne!(tree.root_hex().unwrap(), root);
}
