//! Name index: O(1) average lookup from record name to leaf position

use crate::tree::builder::Tree;
use crate::tree::node::LeafNode;
use std::collections::HashMap;

/// A name-to-leaf lookup structure, independent of the tree's linear leaf
/// sequence.
///
/// The index stores leaf positions, not references, so it never owns tree
/// data and cannot dangle: resolving against a tree that has changed shape
/// simply misses. Callers populate it once the leaves exist; building or
/// rebuilding the tree above the leaves never invalidates it.
///
/// Duplicate names follow `HashMap` insert semantics: the last-inserted
/// position wins. Note that `Tree::verify`/`Tree::tamper` resolve duplicates
/// the other way (first match in leaf order); the index is an accelerator
/// for callers, not the lookup the tree itself uses.
#[derive(Debug, Default, Clone)]
pub struct NameIndex {
    map: HashMap<String, usize>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every leaf of the tree, in leaf order.
    pub fn from_tree(tree: &Tree) -> Self {
        let mut index = Self::new();
        for (position, leaf) in tree.leaves().iter().enumerate() {
            index.put(leaf.name(), position);
        }
        index
    }

    /// Insert a name-to-position entry, replacing any previous entry for the
    /// same name.
    pub fn put(&mut self, name: impl Into<String>, position: usize) {
        self.map.insert(name.into(), position);
    }

    /// Look up a leaf position by name. A miss is `None`, never an error.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.map.get(name).copied()
    }

    /// Resolve a name to the leaf itself within the given tree.
    ///
    /// `None` on an index miss or when the stored position is out of range
    /// for this tree.
    pub fn leaf<'a>(&self, tree: &'a Tree, name: &str) -> Option<&'a LeafNode> {
        tree.leaves().get(self.get(name)?)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
