//! Block type - the unit of content-addressed storage

use crate::codec::Cid;
use crate::dag::NmtNode;
use bytes::Bytes;

/// Raw block bytes paired with the identifier they are stored under
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    cid: Cid,
    data: Bytes,
}

impl Block {
    pub fn new(cid: Cid, data: impl Into<Bytes>) -> Self {
        Block {
            cid,
            data: data.into(),
        }
    }

    pub fn cid(&self) -> &Cid {
        &self.cid
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Size of the raw data
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn into_parts(self) -> (Cid, Bytes) {
        (self.cid, self.data)
    }
}

impl From<&NmtNode> for Block {
    fn from(node: &NmtNode) -> Self {
        Block::new(node.cid(), node.to_bytes())
    }
}
