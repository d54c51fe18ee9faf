//! Digest computation for tree nodes using SHA-256

use crate::types::Digest;
use sha2::{Digest as _, Sha256};

/// Compute the SHA-256 digest of arbitrary bytes.
///
/// Total over all inputs, including empty; always 32 bytes out.
pub fn digest(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute a leaf digest.
///
/// digest = sha256(name_bytes || content_bytes), no separator. Same recipe
/// regardless of content length.
pub fn leaf_digest(name: &str, content: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(content);
    hasher.finalize().into()
}

/// Compute a parent digest from child digests.
///
/// digest = sha256(hex(left) || hex(right)), where a missing right child
/// contributes the empty string. Concatenation is over the 64-character
/// lowercase hex text of each child digest, not the raw bytes; the wire-level
/// digests depend on this exact encoding.
pub fn parent_digest(left: &Digest, right: Option<&Digest>) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(to_hex(left).as_bytes());
    if let Some(right) = right {
        hasher.update(to_hex(right).as_bytes());
    }
    hasher.finalize().into()
}

/// Encode a digest as 64 lowercase hex characters, most-significant nibble
/// first.
pub fn to_hex(digest: &Digest) -> String {
    hex::encode(digest)
}
