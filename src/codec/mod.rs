//! Registered codes and identifier derivation
//!
//! Every NMT node is addressed by a CIDv1 whose codec is [`NMT_CODEC`] and
//! whose multihash wraps the node's serialized namespaced digest under
//! [`SHA256_NAMESPACE_FLAGGED`].

mod identifier;

pub use identifier::{
    cid_from_namespaced_bytes, cid_from_namespaced_digest, identifier_of,
    namespaced_digest_from_cid, Cid, Multihash,
};

/// Multicodec code of the NMT node block format
pub const NMT_CODEC: u64 = 0x7700;

/// Name the node format is registered under
pub const NMT_CODEC_NAME: &str = "nmt-node";

/// Multihash code of the namespaced SHA-256 digest
pub const SHA256_NAMESPACE_FLAGGED: u64 = 0x7701;

/// Name the hash function is registered under
pub const SHA256_NAMESPACE_FLAGGED_NAME: &str = "sha2-256-namespace8";

/// Input format that splits a raw row or column of the data square into
/// shares
pub const DAG_PARSER_FORMAT_NAME: &str = "extended-square-row-or-col";

/// Largest namespaced digest an identifier can carry (a 29-byte namespace
/// yields 90 bytes)
pub const MAX_DIGEST_SIZE: usize = 128;
