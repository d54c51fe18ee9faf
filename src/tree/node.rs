//! Node types for the binary Merkle tree

use crate::tree::hasher;
use crate::types::Digest;

/// A leaf record: a named content blob with a cached digest.
///
/// The digest is `sha256(name || content)` as of the last recompute. It is a
/// cache, not a live value: tampering overwrites `content` without touching
/// it, leaving the tree desynchronized until the next verify/rebuild.
#[derive(Debug, Clone)]
pub struct LeafNode {
    name: String,
    content: Vec<u8>,
    digest: Digest,
}

impl LeafNode {
    /// Create a leaf with its digest computed from the given name and content.
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let name = name.into();
        let content = content.into();
        let digest = hasher::leaf_digest(&name, &content);
        Self {
            name,
            content,
            digest,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// The cached digest. Stale after [`set_content`](Self::set_content) until
    /// [`recompute_digest`](Self::recompute_digest) runs.
    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    /// Overwrite the content without recomputing the digest.
    pub(crate) fn set_content(&mut self, content: Vec<u8>) {
        self.content = content;
    }

    /// Refresh the cached digest from the current name and content.
    pub(crate) fn recompute_digest(&mut self) {
        self.digest = hasher::leaf_digest(&self.name, &self.content);
    }
}

/// An owned node in the built tree: either a reference to a leaf (by index
/// into the tree's leaf store) or an internal node owning its children.
///
/// No parent back-pointers: nothing in the engine traverses upward, so the
/// reference cycle of the classic pointer formulation is simply omitted.
#[derive(Debug)]
pub enum Node {
    /// Leaf position in the tree, carrying the leaf digest recorded at build
    /// time. The leaf itself lives in the tree's leaf vector.
    Leaf { index: usize, digest: Digest },
    Internal(Box<InternalNode>),
}

impl Node {
    pub fn digest(&self) -> &Digest {
        match self {
            Node::Leaf { digest, .. } => digest,
            Node::Internal(internal) => &internal.digest,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// An internal node pairing two children, or promoting a single child when
/// its level had an odd count.
///
/// `digest = sha256(hex(left) || hex(right))`, with an absent right child
/// contributing the empty string.
#[derive(Debug)]
pub struct InternalNode {
    pub digest: Digest,
    pub left: Node,
    pub right: Option<Node>,
}

impl InternalNode {
    /// Build a parent over the given children, deriving its digest from
    /// theirs.
    pub fn new(left: Node, right: Option<Node>) -> Self {
        let digest = hasher::parent_digest(left.digest(), right.as_ref().map(Node::digest));
        Self {
            digest,
            left,
            right,
        }
    }
}
