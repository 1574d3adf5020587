//! Namespaced hash scheme
//!
//! Leaf and inner digests are computed with SHA-256 under distinct one-byte
//! domain separation prefixes:
//!
//! ```text
//! leaf:  ns || ns || sha256(0x00 || payload)
//! inner: left.min || right.max || sha256(0x01 || left || right)
//! ```
//!
//! where `left` and `right` are the children's serialized namespaced digests.

use crate::model::{NamespaceId, NamespacedDigest, HASH_SIZE};
use crate::{Error, Result};
use sha2::{Digest, Sha256};

/// Domain separation prefix for leaf hashing
pub const LEAF_PREFIX: u8 = 0;

/// Domain separation prefix for inner node hashing
pub const INNER_PREFIX: u8 = 1;

/// Digest of a single share
pub fn leaf_digest(namespace: &NamespaceId, payload: &[u8]) -> NamespacedDigest {
    let hash = sha256_prefixed(LEAF_PREFIX, &[payload]);
    NamespacedDigest::single(namespace.clone(), hash)
}

/// Digest of an inner node from its children.
///
/// Fails if either child range is malformed, if the children use different
/// namespace sizes, or if `right` does not follow `left` in leaf order.
pub fn inner_digest(left: &NamespacedDigest, right: &NamespacedDigest) -> Result<NamespacedDigest> {
    if left.namespace_size() != right.namespace_size() {
        return Err(Error::InvalidDigest(format!(
            "children use different namespace sizes ({} and {})",
            left.namespace_size(),
            right.namespace_size()
        )));
    }
    if right.min_namespace() < left.min_namespace() || right.max_namespace() < left.max_namespace()
    {
        return Err(Error::InvalidNamespaceRange(format!(
            "right child [{}, {}] precedes left child [{}, {}]",
            right.min_namespace(),
            right.max_namespace(),
            left.min_namespace(),
            left.max_namespace()
        )));
    }

    let hash = sha256_prefixed(
        INNER_PREFIX,
        &[left.to_bytes().as_slice(), right.to_bytes().as_slice()],
    );
    NamespacedDigest::new(
        left.min_namespace().clone(),
        right.max_namespace().clone(),
        hash,
    )
}

fn sha256_prefixed(prefix: u8, parts: &[&[u8]]) -> [u8; HASH_SIZE] {
    let mut hasher = Sha256::new();
    hasher.update([prefix]);
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}
