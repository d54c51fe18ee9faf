//! Verification and tamper simulation

use crate::error::TreeError;
use crate::tree::builder::Tree;
use std::fmt;
use tracing::{debug, instrument, warn};

/// Outcome of verifying a single record against the recorded root.
///
/// `NotFound` is a lookup miss, distinct from `Tampered`, which is an
/// integrity failure on a record that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyResult {
    Intact,
    Tampered,
    NotFound,
}

impl fmt::Display for VerifyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyResult::Intact => write!(f, "intact"),
            VerifyResult::Tampered => write!(f, "tampered"),
            VerifyResult::NotFound => write!(f, "not found"),
        }
    }
}

impl Tree {
    /// Verify the named record against the recorded root digest.
    ///
    /// Scans the leaves in order for the first name match (`NotFound` on a
    /// miss, with no state touched), refreshes that leaf's cached digest from
    /// its current content, rebuilds the whole tree, and compares the new
    /// root against the one recorded before: equal means `Intact`, different
    /// means `Tampered`.
    ///
    /// The rebuild is unconditional, so even an `Intact` verify replaces all
    /// internal nodes; digest values are unchanged when content is unchanged.
    /// A tampered record is resynchronized by the rebuild, so a second verify
    /// of the same name reports `Intact`. Verifying a tree that was never
    /// built reports `Tampered`: there is no recorded root to match.
    #[instrument(skip(self), fields(leaf_count = self.leaf_count()))]
    pub fn verify(&mut self, name: &str) -> VerifyResult {
        let Some(position) = self.leaf_position(name) else {
            debug!("Verify miss: no such leaf");
            return VerifyResult::NotFound;
        };

        let before = self.root_digest().copied();

        // Self-healing: refresh the cached digest before rebuilding, so the
        // rebuilt tree reflects current content.
        self.leaf_mut(position).recompute_digest();

        // Non-empty by the scan above, so the rebuild cannot fail.
        let _ = self.build();

        if before.as_ref() == self.root_digest() {
            debug!("Verified intact");
            VerifyResult::Intact
        } else {
            warn!("Root digest diverged: record tampered");
            VerifyResult::Tampered
        }
    }

    /// Overwrite the named record's content without recomputing anything.
    ///
    /// The cached leaf digest and the tree above it are left stale on
    /// purpose, so the next [`verify`](Self::verify) of this name observes
    /// the divergence. First name match wins; `LeafNotFound` on a miss, with
    /// no mutation.
    pub fn tamper(&mut self, name: &str, new_content: impl Into<Vec<u8>>) -> Result<(), TreeError> {
        let position = self
            .leaf_position(name)
            .ok_or_else(|| TreeError::LeafNotFound(name.to_string()))?;

        debug!(name, "Tampering leaf content");
        self.leaf_mut(position).set_content(new_content.into());
        Ok(())
    }
}
