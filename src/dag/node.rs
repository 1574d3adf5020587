//! NMT DAG node types
//!
//! Raw block layout:
//! ```text
//! leaf:  [0x00] || namespace || payload
//! inner: [0x01] || left child digest || right child digest
//! ```
//!
//! Child digests are serialized namespaced digests, so an inner block is
//! self-describing: its own digest and both child CIDs are recomputed from
//! the raw bytes alone.

use crate::codec::{cid_from_namespaced_digest, Cid};
use crate::hasher::{inner_digest, leaf_digest, INNER_PREFIX, LEAF_PREFIX};
use crate::model::{NamespaceId, NamespacedDigest};
use crate::{Error, Result};
use bytes::{BufMut, Bytes, BytesMut};

/// Tag byte of a leaf block
pub const LEAF_TAG: u8 = LEAF_PREFIX;

/// Tag byte of an inner block
pub const INNER_TAG: u8 = INNER_PREFIX;

/// Path segment selecting the left child
pub const LEFT: &str = "0";

/// Path segment selecting the right child
pub const RIGHT: &str = "1";

/// A named edge to another node
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    /// `"0"` for the left child, `"1"` for the right child
    pub name: String,
    pub cid: Cid,
}

/// Outcome of resolving a path inside a single node
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Follow this link with the remaining path
    Link(Link),
    /// The path ended on a leaf; carries the share (namespace || payload)
    Share(Bytes),
}

/// A leaf or inner node of a namespaced Merkle tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NmtNode {
    Leaf(LeafNode),
    Inner(InnerNode),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeafNode {
    raw: Bytes,
    namespace_size: usize,
    digest: NamespacedDigest,
    cid: Cid,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InnerNode {
    raw: Bytes,
    digest: NamespacedDigest,
    cid: Cid,
    left: Cid,
    right: Cid,
}

impl LeafNode {
    fn new(raw: Bytes, namespace_size: usize) -> Result<Self> {
        let share = &raw[1..];
        let namespace = NamespaceId::from(&share[..namespace_size]);
        let digest = leaf_digest(&namespace, &share[namespace_size..]);
        let cid = cid_from_namespaced_digest(&digest)?;
        Ok(LeafNode {
            raw,
            namespace_size,
            digest,
            cid,
        })
    }

    /// The original share: namespace followed by payload
    pub fn share(&self) -> &[u8] {
        &self.raw[1..]
    }

    pub fn namespace(&self) -> &NamespaceId {
        self.digest.min_namespace()
    }

    /// The share without its namespace
    pub fn payload(&self) -> &[u8] {
        &self.raw[1 + self.namespace_size..]
    }
}

impl InnerNode {
    fn new(raw: Bytes, digest_size: usize, namespace_size: usize) -> Result<Self> {
        let (left_raw, right_raw) = raw[1..].split_at(digest_size);
        let left = NamespacedDigest::from_bytes(left_raw, namespace_size)?;
        let right = NamespacedDigest::from_bytes(right_raw, namespace_size)?;
        let digest = inner_digest(&left, &right)?;
        Ok(InnerNode {
            cid: cid_from_namespaced_digest(&digest)?,
            left: cid_from_namespaced_digest(&left)?,
            right: cid_from_namespaced_digest(&right)?,
            raw,
            digest,
        })
    }

    pub fn left(&self) -> &Cid {
        &self.left
    }

    pub fn right(&self) -> &Cid {
        &self.right
    }

    fn child(&self, segment: &str) -> Result<Link> {
        let cid = match segment {
            LEFT => self.left,
            RIGHT => self.right,
            other => {
                return Err(Error::InvalidPath(format!(
                    "segment {:?} is neither \"0\" nor \"1\"",
                    other
                )))
            }
        };
        Ok(Link {
            name: segment.to_string(),
            cid,
        })
    }
}

impl NmtNode {
    /// Build a leaf from a share (`namespace || payload`)
    pub fn leaf(share: &[u8], namespace_size: usize) -> Result<Self> {
        if share.len() < namespace_size {
            return Err(Error::MalformedInput(format!(
                "share of {} bytes is shorter than the {}-byte namespace",
                share.len(),
                namespace_size
            )));
        }
        let mut raw = BytesMut::with_capacity(1 + share.len());
        raw.put_u8(LEAF_TAG);
        raw.put_slice(share);
        Ok(NmtNode::Leaf(LeafNode::new(raw.freeze(), namespace_size)?))
    }

    /// Build the parent of two adjacent nodes
    pub fn inner(left: &NmtNode, right: &NmtNode) -> Result<Self> {
        let left_digest = left.namespaced_digest();
        let right_digest = right.namespaced_digest();
        let digest = inner_digest(left_digest, right_digest)?;

        let mut raw = BytesMut::with_capacity(1 + 2 * left_digest.serialized_size());
        raw.put_u8(INNER_TAG);
        raw.put_slice(&left_digest.to_bytes());
        raw.put_slice(&right_digest.to_bytes());

        Ok(NmtNode::Inner(InnerNode {
            raw: raw.freeze(),
            cid: cid_from_namespaced_digest(&digest)?,
            left: left.cid(),
            right: right.cid(),
            digest,
        }))
    }

    /// Decode a raw block back into a node
    pub fn decode(raw: &[u8], namespace_size: usize) -> Result<Self> {
        let tag = *raw
            .first()
            .ok_or_else(|| Error::MalformedInput("empty node block".into()))?;
        let raw = Bytes::copy_from_slice(raw);

        // the tag byte is present, so the body length cannot underflow
        let body_len = raw.len() - 1;

        match tag {
            LEAF_TAG => {
                if body_len < namespace_size {
                    return Err(Error::MalformedInput(format!(
                        "leaf block of {} bytes is shorter than a {}-byte namespace",
                        raw.len(),
                        namespace_size
                    )));
                }
                Ok(NmtNode::Leaf(LeafNode::new(raw, namespace_size)?))
            }
            INNER_TAG => {
                let digest_size = NamespacedDigest::size_for(namespace_size);
                if body_len != digest_size.saturating_mul(2) {
                    return Err(Error::MalformedInput(format!(
                        "inner block must hold two {}-byte digests, got {} bytes",
                        digest_size, body_len
                    )));
                }
                Ok(NmtNode::Inner(InnerNode::new(
                    raw,
                    digest_size,
                    namespace_size,
                )?))
            }
            other => {
                tracing::warn!(tag = other, len = raw.len(), "unknown NMT node tag");
                Err(Error::UnknownTag(other))
            }
        }
    }

    /// The exact block encoding
    pub fn raw_data(&self) -> &[u8] {
        match self {
            NmtNode::Leaf(leaf) => &leaf.raw,
            NmtNode::Inner(inner) => &inner.raw,
        }
    }

    /// Cheap clone of the block encoding
    pub fn to_bytes(&self) -> Bytes {
        match self {
            NmtNode::Leaf(leaf) => leaf.raw.clone(),
            NmtNode::Inner(inner) => inner.raw.clone(),
        }
    }

    pub fn cid(&self) -> Cid {
        match self {
            NmtNode::Leaf(leaf) => leaf.cid,
            NmtNode::Inner(inner) => inner.cid,
        }
    }

    pub fn namespaced_digest(&self) -> &NamespacedDigest {
        match self {
            NmtNode::Leaf(leaf) => &leaf.digest,
            NmtNode::Inner(inner) => &inner.digest,
        }
    }

    /// Size of the raw block in bytes
    pub fn size(&self) -> usize {
        self.raw_data().len()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, NmtNode::Leaf(_))
    }

    /// Outgoing links, left before right. Leaves have none.
    pub fn links(&self) -> Vec<Link> {
        match self {
            NmtNode::Leaf(_) => Vec::new(),
            NmtNode::Inner(inner) => vec![
                Link {
                    name: LEFT.to_string(),
                    cid: inner.left,
                },
                Link {
                    name: RIGHT.to_string(),
                    cid: inner.right,
                },
            ],
        }
    }

    /// Resolve a path within this node.
    ///
    /// An inner node consumes one segment and returns the link to follow
    /// together with the rest of the path. A leaf only accepts an empty path
    /// and returns its share.
    pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> Result<(Resolution, Vec<String>)> {
        match self {
            NmtNode::Leaf(leaf) => {
                if !path.is_empty() {
                    return Err(Error::InvalidPath(format!(
                        "{} segment(s) left after reaching a leaf",
                        path.len()
                    )));
                }
                let share = leaf.raw.slice(1..);
                Ok((Resolution::Share(share), Vec::new()))
            }
            NmtNode::Inner(inner) => {
                let (first, rest) = path.split_first().ok_or_else(|| {
                    Error::InvalidPath("path ends at an inner node".to_string())
                })?;
                let link = inner.child(first.as_ref())?;
                let rest = rest.iter().map(|s| s.as_ref().to_string()).collect();
                Ok((Resolution::Link(link), rest))
            }
        }
    }

    /// Like [`resolve`](Self::resolve) but only succeeds when a link is hit
    pub fn resolve_link<S: AsRef<str>>(&self, path: &[S]) -> Result<(Link, Vec<String>)> {
        match self.resolve(path)? {
            (Resolution::Link(link), rest) => Ok((link, rest)),
            (Resolution::Share(_), _) => {
                Err(Error::InvalidPath("leaf nodes have no links".to_string()))
            }
        }
    }

    /// Paths reachable inside this single node
    pub fn tree(&self, path: &str, depth: Option<usize>) -> Vec<String> {
        if !path.is_empty() || depth == Some(0) {
            return Vec::new();
        }
        match self {
            NmtNode::Leaf(_) => Vec::new(),
            NmtNode::Inner(_) => vec![LEFT.to_string(), RIGHT.to_string()],
        }
    }
}
