//! Error types for the integrity-verification engine.

use thiserror::Error;

/// Errors returned by tree construction and mutation.
///
/// Every failure here is a caller input problem (empty dataset, unknown
/// name); there are no transient or retryable conditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("cannot build a Merkle tree with no leaves")]
    EmptyTree,

    #[error("no leaf named {0:?} in the tree")]
    LeafNotFound(String),
}
