//! Namespace identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-size namespace tag carried by every share
///
/// Ordering is plain lexicographic byte comparison, which is the order
/// shares must arrive in.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NamespaceId(Vec<u8>);

impl NamespaceId {
    /// Create a namespace from raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        NamespaceId(bytes.into())
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NamespaceId({})", self.to_hex())
    }
}

impl AsRef<[u8]> for NamespaceId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for NamespaceId {
    fn from(bytes: &[u8]) -> Self {
        NamespaceId(bytes.to_vec())
    }
}
