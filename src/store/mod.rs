//! Content-addressed block storage
//!
//! The codec only needs a store that maps identifiers to raw bytes.
//! [`BlockStore`] is that seam; [`MemoryBlockStore`] is an in-process
//! implementation.

mod block;

pub use block::Block;

use crate::codec::Cid;
use crate::{Error, Result};
use bytes::Bytes;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Stores and serves raw blocks by identifier
pub trait BlockStore: Send + Sync {
    /// Store a block. Storing the same identifier twice is a no-op.
    fn put(&self, block: Block) -> Result<()>;

    /// Retrieve the raw bytes stored under `cid`
    fn get(&self, cid: &Cid) -> Result<Bytes>;

    fn contains(&self, cid: &Cid) -> bool;

    /// Store several blocks
    fn put_many(&self, blocks: Vec<Block>) -> Result<()> {
        for block in blocks {
            self.put(block)?;
        }
        Ok(())
    }
}

/// Block store backed by a hash map
#[derive(Default)]
pub struct MemoryBlockStore {
    blocks: RwLock<HashMap<Cid, Bytes>>,
}

impl MemoryBlockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blocks
    pub fn len(&self) -> usize {
        self.blocks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.read().is_empty()
    }
}

impl BlockStore for MemoryBlockStore {
    fn put(&self, block: Block) -> Result<()> {
        let (cid, data) = block.into_parts();
        let mut blocks = self.blocks.write();
        if !blocks.contains_key(&cid) {
            tracing::trace!(%cid, size = data.len(), "stored block");
            blocks.insert(cid, data);
        }
        Ok(())
    }

    fn get(&self, cid: &Cid) -> Result<Bytes> {
        self.blocks
            .read()
            .get(cid)
            .cloned()
            .ok_or_else(|| Error::NotFound(cid.to_string()))
    }

    fn contains(&self, cid: &Cid) -> bool {
        self.blocks.read().contains_key(cid)
    }

    fn put_many(&self, blocks: Vec<Block>) -> Result<()> {
        let mut stored = self.blocks.write();
        for block in blocks {
            let (cid, data) = block.into_parts();
            stored.entry(cid).or_insert(data);
        }
        Ok(())
    }
}
