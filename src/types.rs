//! Core types shared across the engine.

/// A SHA-256 digest: 32 raw bytes.
pub type Digest = [u8; 32];

/// Width of a [`Digest`] in bytes.
pub const DIGEST_LEN: usize = 32;

/// Width of a [`Digest`] in lowercase hex characters.
pub const DIGEST_HEX_LEN: usize = 64;
