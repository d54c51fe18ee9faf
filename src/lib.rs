//! Vigil: Merkle-Tree Integrity Verification
//!
//! A binary Merkle tree built over named content records, with a name-indexed
//! lookup structure, tamper simulation, and full-rebuild verification of the
//! recorded root hash.

pub mod error;
pub mod tree;
pub mod types;

pub use error::TreeError;
pub use tree::builder::Tree;
pub use tree::index::NameIndex;
pub use tree::verify::VerifyResult;
