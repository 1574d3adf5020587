//! Core value types for nmt_dag

mod digest;
mod namespace;

pub use digest::{NamespacedDigest, HASH_SIZE};
pub use namespace::NamespaceId;
