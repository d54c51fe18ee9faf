//! Tree construction: leaf store plus bottom-up pairwise builder

use crate::error::TreeError;
use crate::tree::hasher;
use crate::tree::node::{InternalNode, LeafNode, Node};
use crate::types::Digest;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// A binary Merkle tree over an ordered sequence of named content records.
///
/// The tree owns its leaves and, once built, the internal nodes above them.
/// Leaf order is construction order and determines tree shape; leaves are
/// never reordered. `root` stays empty until [`build`](Self::build) runs and
/// is replaced wholesale on every rebuild.
#[derive(Debug, Default)]
pub struct Tree {
    leaves: Vec<LeafNode>,
    root: Option<Node>,
}

impl Tree {
    /// Build the leaf store from parallel name/content sequences.
    ///
    /// Leaves are created in input order, each with its digest computed from
    /// `name || content`. Duplicate names are permitted here; lookup policy
    /// under duplicates belongs to the lookup surfaces, not construction.
    /// The root starts empty; call [`build`](Self::build) next.
    ///
    /// # Panics
    ///
    /// Panics if `names` and `contents` differ in length.
    pub fn from_records<N, C>(names: &[N], contents: &[C]) -> Self
    where
        N: AsRef<str>,
        C: AsRef<[u8]>,
    {
        assert_eq!(
            names.len(),
            contents.len(),
            "names and contents must be parallel sequences"
        );

        let leaves = names
            .iter()
            .zip(contents)
            .map(|(name, content)| LeafNode::new(name.as_ref(), content.as_ref()))
            .collect::<Vec<_>>();

        debug!(leaf_count = leaves.len(), "Built leaf store");

        Self { leaves, root: None }
    }

    /// Build (or rebuild) the tree from the current leaves.
    ///
    /// Repeatedly pairs adjacent nodes of the current level, promoting an
    /// unpaired trailing node under a right-less parent, until a single node
    /// remains. A one-leaf tree has that leaf as its root and no internal
    /// nodes. Assigning the new root drops the entire previous internal-node
    /// set; the only failure happens before any mutation, so a failed build
    /// leaves an existing valid tree untouched.
    #[instrument(skip(self), fields(leaf_count = self.leaves.len()))]
    pub fn build(&mut self) -> Result<(), TreeError> {
        if self.leaves.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        let start = Instant::now();

        let mut level: Vec<Node> = self
            .leaves
            .iter()
            .enumerate()
            .map(|(index, leaf)| Node::Leaf {
                index,
                digest: *leaf.digest(),
            })
            .collect();

        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            let mut nodes = level.into_iter();
            while let Some(left) = nodes.next() {
                let right = nodes.next();
                next.push(Node::Internal(Box::new(InternalNode::new(left, right))));
            }
            level = next;
        }

        self.root = level.pop();

        info!(
            root = %self.root_hex().unwrap_or_default(),
            duration_us = start.elapsed().as_micros() as u64,
            "Tree build completed"
        );
        Ok(())
    }

    /// The leaves in construction order.
    pub fn leaves(&self) -> &[LeafNode] {
        &self.leaves
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// The built root node, if any.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// The recorded root digest, or `None` before the first build.
    pub fn root_digest(&self) -> Option<&Digest> {
        self.root.as_ref().map(Node::digest)
    }

    /// The recorded root digest as 64 lowercase hex characters.
    pub fn root_hex(&self) -> Option<String> {
        self.root_digest().map(hasher::to_hex)
    }

    /// Number of internal-node levels between the root and the leaves.
    ///
    /// Zero for an unbuilt or single-leaf tree; `ceil(log2(n))` for `n`
    /// leaves otherwise. Every leaf sits at the same depth because each
    /// build round wraps the whole level, so the leftmost chain measures it.
    pub fn height(&self) -> usize {
        let mut levels = 0;
        let mut node = self.root.as_ref();
        while let Some(Node::Internal(internal)) = node {
            levels += 1;
            node = Some(&internal.left);
        }
        levels
    }

    /// Index of the first leaf with the given name, scanning in leaf order.
    ///
    /// First match wins under duplicate names.
    pub(crate) fn leaf_position(&self, name: &str) -> Option<usize> {
        self.leaves.iter().position(|leaf| leaf.name() == name)
    }

    pub(crate) fn leaf_mut(&mut self, index: usize) -> &mut LeafNode {
        &mut self.leaves[index]
    }
}
