//! Namespaced digest <-> CID conversion

use super::{MAX_DIGEST_SIZE, NMT_CODEC, SHA256_NAMESPACE_FLAGGED};
use crate::dag::NmtNode;
use crate::model::NamespacedDigest;
use crate::{Error, Result};

/// CID able to hold any namespaced digest up to [`MAX_DIGEST_SIZE`]
pub type Cid = ::cid::CidGeneric<MAX_DIGEST_SIZE>;

/// Multihash able to hold any namespaced digest up to [`MAX_DIGEST_SIZE`]
pub type Multihash = ::multihash::Multihash<MAX_DIGEST_SIZE>;

/// Wrap a namespaced digest into an NMT node CID
pub fn cid_from_namespaced_digest(digest: &NamespacedDigest) -> Result<Cid> {
    cid_from_namespaced_bytes(&digest.to_bytes())
}

/// Wrap an already serialized namespaced digest (`min || max || hash`),
/// e.g. the root bytes of a reference tree
pub fn cid_from_namespaced_bytes(bytes: &[u8]) -> Result<Cid> {
    NamespacedDigest::namespace_size_of(bytes.len())?;
    let mh = Multihash::wrap(SHA256_NAMESPACE_FLAGGED, bytes)
        .map_err(|e| Error::InvalidDigest(e.to_string()))?;
    Ok(Cid::new_v1(NMT_CODEC, mh))
}

/// Unwrap the namespaced digest carried by an NMT node CID.
///
/// The namespace size is recovered from the digest length.
pub fn namespaced_digest_from_cid(cid: &Cid) -> Result<NamespacedDigest> {
    if cid.codec() != NMT_CODEC {
        return Err(Error::UnknownCodec(cid.codec()));
    }
    let mh = cid.hash();
    if mh.code() != SHA256_NAMESPACE_FLAGGED {
        return Err(Error::InvalidDigest(format!(
            "unexpected multihash code {:#x}",
            mh.code()
        )));
    }
    let digest = mh.digest();
    let namespace_size = NamespacedDigest::namespace_size_of(digest.len())?;
    NamespacedDigest::from_bytes(digest, namespace_size)
}

/// Content identifier of a node.
///
/// Free-function form of [`NmtNode::cid`], usable where a `fn(&NmtNode) -> Cid`
/// is expected. Always equal to the CID wrapping the node's namespaced digest.
pub fn identifier_of(node: &NmtNode) -> Cid {
    node.cid()
}
