//! # nmt_dag
//!
//! Namespaced Merkle trees as content-addressed DAGs.
//!
//! A row or column of a data square is a buffer of namespace-sorted shares.
//! nmt_dag turns it into the nodes of a namespaced Merkle tree whose root
//! digest matches the NMT commitment bit for bit, gives every node a CID,
//! and lets any single share be fetched back by walking `0`/`1` links from
//! the root.
//!
//! ## Core Concepts
//!
//! - **Namespaced digest**: `min_ns || max_ns || sha256(prefix || ...)`
//! - **Nodes**: leaf blocks carry a share, inner blocks carry both child digests
//! - **CIDs**: codec `nmt-node` (0x7700), multihash `sha2-256-namespace8` (0x7701)
//! - **Paths**: leaf `i` of `N` is `i` in binary, `log2(N)` bits, MSB first
//!
//! ## Example
//!
//! ```ignore
//! use nmt_dag::{CodecRegistry, DagService, InputEncoding, MemoryBlockStore};
//! use nmt_dag::codec::DAG_PARSER_FORMAT_NAME;
//!
//! let encoding = InputEncoding::default();
//! let svc = DagService::new(MemoryBlockStore::new(), CodecRegistry::with_nmt(), encoding);
//! let root = svc.put(&row, &encoding, DAG_PARSER_FORMAT_NAME)?;
//! let share = svc.get(&root, &["0", "1", "1"])?;
//! ```

pub mod codec;
pub mod dag;
pub mod hasher;
pub mod model;
pub mod path;
pub mod registry;
pub mod store;

mod bridge;
mod config;
mod error;

#[cfg(test)]
pub(crate) mod test_utils;

pub use bridge::{DagService, Resolved};
pub use codec::{identifier_of, Cid};
pub use config::{InputEncoding, DEFAULT_NAMESPACE_SIZE, DEFAULT_SHARE_SIZE};
pub use dag::{parse_row_or_column, Link, NmtNode, Resolution, RowColumnParser};
pub use error::{Error, Result};
pub use hasher::{inner_digest, leaf_digest};
pub use model::{NamespaceId, NamespacedDigest};
pub use path::{leaf_index_to_path, DagPath};
pub use registry::CodecRegistry;
pub use store::{Block, BlockStore, MemoryBlockStore};
