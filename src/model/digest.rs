//! Namespaced digest type
//!
//! Serialized layout: `min_namespace || max_namespace || hash`.

use super::NamespaceId;
use crate::{Error, Result};
use std::fmt;

/// Size of the SHA-256 hash carried by every namespaced digest
pub const HASH_SIZE: usize = 32;

/// A digest tagged with the namespace range of the subtree it commits to
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NamespacedDigest {
    min_namespace: NamespaceId,
    max_namespace: NamespaceId,
    hash: [u8; HASH_SIZE],
}

impl NamespacedDigest {
    /// Build a digest from its parts.
    ///
    /// Both namespaces must have the same size and `min <= max`.
    pub fn new(
        min_namespace: NamespaceId,
        max_namespace: NamespaceId,
        hash: [u8; HASH_SIZE],
    ) -> Result<Self> {
        if min_namespace.len() != max_namespace.len() {
            return Err(Error::InvalidDigest(format!(
                "namespace sizes differ: min has {} bytes, max has {}",
                min_namespace.len(),
                max_namespace.len()
            )));
        }
        if min_namespace > max_namespace {
            return Err(Error::InvalidNamespaceRange(format!(
                "min namespace {} exceeds max namespace {}",
                min_namespace, max_namespace
            )));
        }
        Ok(NamespacedDigest {
            min_namespace,
            max_namespace,
            hash,
        })
    }

    /// Digest whose range is a single namespace
    pub(crate) fn single(namespace: NamespaceId, hash: [u8; HASH_SIZE]) -> Self {
        NamespacedDigest {
            min_namespace: namespace.clone(),
            max_namespace: namespace,
            hash,
        }
    }

    /// Serialized size for a given namespace size, saturating at `usize::MAX`
    pub const fn size_for(namespace_size: usize) -> usize {
        namespace_size.saturating_mul(2).saturating_add(HASH_SIZE)
    }

    /// Parse a serialized digest
    pub fn from_bytes(bytes: &[u8], namespace_size: usize) -> Result<Self> {
        let expected = Self::size_for(namespace_size);
        if bytes.len() != expected {
            return Err(Error::InvalidDigest(format!(
                "expected {} bytes, got {}",
                expected,
                bytes.len()
            )));
        }

        let (min, rest) = bytes.split_at(namespace_size);
        let (max, hash_bytes) = rest.split_at(namespace_size);
        let mut hash = [0u8; HASH_SIZE];
        hash.copy_from_slice(hash_bytes);

        Self::new(NamespaceId::from(min), NamespaceId::from(max), hash)
    }

    /// Infer the namespace size from a serialized digest's length
    pub fn namespace_size_of(serialized_len: usize) -> Result<usize> {
        match serialized_len.checked_sub(HASH_SIZE) {
            Some(ns2) if ns2 > 0 && ns2 % 2 == 0 => Ok(ns2 / 2),
            _ => Err(Error::InvalidDigest(format!(
                "{} bytes is not a valid namespaced digest length",
                serialized_len
            ))),
        }
    }

    /// Serialize as `min || max || hash`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.serialized_size());
        out.extend_from_slice(self.min_namespace.as_bytes());
        out.extend_from_slice(self.max_namespace.as_bytes());
        out.extend_from_slice(&self.hash);
        out
    }

    pub fn serialized_size(&self) -> usize {
        Self::size_for(self.namespace_size())
    }

    pub fn namespace_size(&self) -> usize {
        self.min_namespace.len()
    }

    pub fn min_namespace(&self) -> &NamespaceId {
        &self.min_namespace
    }

    pub fn max_namespace(&self) -> &NamespaceId {
        &self.max_namespace
    }

    /// The bare hash without the namespace range
    pub fn hash(&self) -> &[u8; HASH_SIZE] {
        &self.hash
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse from hex string
    pub fn from_hex(s: &str, namespace_size: usize) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|e| Error::InvalidDigest(e.to_string()))?;
        Self::from_bytes(&bytes, namespace_size)
    }

    /// Short prefix of the hash part for display
    pub fn short(&self) -> String {
        hex::encode(&self.hash[..4])
    }
}

impl fmt::Display for NamespacedDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for NamespacedDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NamespacedDigest({}..{}, {})",
            self.min_namespace.to_hex(),
            self.max_namespace.to_hex(),
            self.short()
        )
    }
}
