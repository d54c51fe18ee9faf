//! Binary Merkle Tree over named content records
//!
//! Each leaf holds a record's name, content, and a cached digest of both;
//! internal nodes digest the hex text of their children's digests. The root
//! digest is a deterministic function of the ordered `(name, content)` pairs,
//! so any divergence between the recorded root and a recomputed one signals
//! tampering.

pub mod builder;
pub mod hasher;
pub mod index;
pub mod node;
pub mod verify;
