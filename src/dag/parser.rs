//! Row/column parser: raw share buffer -> ordered NMT nodes
//!
//! The tree is built bottom-up by pairing adjacent nodes left to right.
//! Output order is all leaves (in share order), then each inner level in
//! turn, so the root is always the last node.

use super::NmtNode;
use crate::config::InputEncoding;
use crate::{Error, Result};

/// Splits a row or column of the data square into shares and builds the
/// complete set of tree nodes
#[derive(Clone, Copy, Debug, Default)]
pub struct RowColumnParser {
    encoding: InputEncoding,
}

impl RowColumnParser {
    pub fn new(encoding: InputEncoding) -> Self {
        RowColumnParser { encoding }
    }

    pub fn encoding(&self) -> &InputEncoding {
        &self.encoding
    }

    /// Parse a raw buffer into `2N - 1` nodes, leaves first, root last
    pub fn parse(&self, buf: &[u8]) -> Result<Vec<NmtNode>> {
        parse_row_or_column(buf, &self.encoding)
    }
}

/// Parse a raw buffer of concatenated shares into every node of its tree.
///
/// The buffer must hold a power-of-two number of shares sorted by
/// namespace. Nothing is returned on failure.
pub fn parse_row_or_column(buf: &[u8], encoding: &InputEncoding) -> Result<Vec<NmtNode>> {
    encoding.validate()?;
    let share_len = encoding.share_len();

    if buf.is_empty() {
        return Err(Error::MalformedInput("empty buffer".to_string()));
    }
    if buf.len() % share_len != 0 {
        return Err(Error::MalformedInput(format!(
            "buffer length {} is not a multiple of the {}-byte share length",
            buf.len(),
            share_len
        )));
    }
    let leaf_count = buf.len() / share_len;
    if !leaf_count.is_power_of_two() {
        return Err(Error::MalformedInput(format!(
            "expected a power-of-two number of shares, got {}",
            leaf_count
        )));
    }

    let shares: Vec<&[u8]> = buf.chunks_exact(share_len).collect();
    check_namespace_order(&shares, encoding.namespace_size)?;

    let mut nodes = Vec::with_capacity(2 * leaf_count - 1);
    for share in &shares {
        nodes.push(NmtNode::leaf(share, encoding.namespace_size)?);
    }

    // [level_start, nodes.len()) is the level being paired
    let mut level_start = 0;
    while nodes.len() - level_start > 1 {
        let level_end = nodes.len();
        for i in (level_start..level_end).step_by(2) {
            let parent = NmtNode::inner(&nodes[i], &nodes[i + 1])?;
            nodes.push(parent);
        }
        level_start = level_end;
    }

    if let Some(root) = nodes.last() {
        tracing::debug!(
            leaves = leaf_count,
            nodes = nodes.len(),
            root = %root.cid(),
            "parsed row/column"
        );
    }
    Ok(nodes)
}

fn check_namespace_order(shares: &[&[u8]], namespace_size: usize) -> Result<()> {
    for (i, pair) in shares.windows(2).enumerate() {
        let prev = &pair[0][..namespace_size];
        let next = &pair[1][..namespace_size];
        if next < prev {
            return Err(Error::InvalidNamespaceRange(format!(
                "share {} namespace {} sorts before share {} namespace {}",
                i + 1,
                hex::encode(next),
                i,
                hex::encode(prev)
            )));
        }
    }
    Ok(())
}
