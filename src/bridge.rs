//! Store bridge
//!
//! Connects the codec to a [`BlockStore`]: ingest parses a buffer and
//! persists every node, retrieval loads blocks by identifier, decodes them
//! through the registry and walks `0`/`1` links down to a leaf.

use crate::codec::Cid;
use crate::config::InputEncoding;
use crate::dag::{NmtNode, Resolution};
use crate::path::{leaf_index_to_path, DagPath};
use crate::registry::CodecRegistry;
use crate::store::{Block, BlockStore};
use crate::{Error, Result};
use bytes::Bytes;

/// What a path resolved to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// The path reached a leaf; carries its share
    Share(Bytes),
    /// The path stopped at an inner node
    Node(NmtNode),
}

/// Parses rows/columns into a block store and serves nodes back out of it
pub struct DagService<S: BlockStore> {
    store: S,
    registry: CodecRegistry,
    /// Encoding used to decode blocks on read
    encoding: InputEncoding,
}

impl<S: BlockStore> DagService<S> {
    pub fn new(store: S, registry: CodecRegistry, encoding: InputEncoding) -> Self {
        DagService {
            store,
            registry,
            encoding,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn registry(&self) -> &CodecRegistry {
        &self.registry
    }

    pub fn encoding(&self) -> &InputEncoding {
        &self.encoding
    }

    /// Parse `raw` without storing anything, returning `(cid, raw block)`
    /// pairs in node order, root last
    pub fn parse(
        &self,
        raw: &[u8],
        encoding: &InputEncoding,
        format: &str,
    ) -> Result<Vec<Block>> {
        let nodes = self.registry.parse(format, raw, encoding)?;
        Ok(nodes.iter().map(Block::from).collect())
    }

    /// Decode a raw block using the service's encoding
    pub fn decode(&self, codec: u64, raw: &[u8]) -> Result<NmtNode> {
        self.registry.decode(codec, raw, &self.encoding)
    }

    /// Parse `raw` in the named input format, store every node and return
    /// the root identifier. A failed parse stores nothing.
    pub fn put(&self, raw: &[u8], encoding: &InputEncoding, format: &str) -> Result<Cid> {
        let blocks = self.parse(raw, encoding, format)?;
        let root = match blocks.last() {
            Some(block) => *block.cid(),
            None => {
                return Err(Error::MalformedInput(
                    "parser produced no nodes".to_string(),
                ))
            }
        };
        if !self.registry.has_decoder(root.codec()) {
            return Err(Error::UnknownCodec(root.codec()));
        }

        let count = blocks.len();
        self.store.put_many(blocks)?;
        tracing::debug!(%root, blocks = count, format, "stored row/column");
        Ok(root)
    }

    /// Load and decode the node stored under `cid`.
    ///
    /// The decoded node must hash back to `cid`.
    pub fn get_node(&self, cid: &Cid) -> Result<NmtNode> {
        let raw = self.store.get(cid)?;
        let node = self.decode(cid.codec(), &raw)?;
        if node.cid() != *cid {
            return Err(Error::DigestMismatch {
                expected: cid.to_string(),
                found: node.cid().to_string(),
            });
        }
        Ok(node)
    }

    /// Walk `segments` from `root`
    pub fn resolve<T: AsRef<str>>(&self, root: &Cid, segments: &[T]) -> Result<Resolved> {
        let mut node = self.get_node(root)?;
        let mut rest: Vec<String> = segments.iter().map(|s| s.as_ref().to_string()).collect();

        loop {
            if rest.is_empty() && !node.is_leaf() {
                return Ok(Resolved::Node(node));
            }
            match node.resolve(&rest)? {
                (Resolution::Share(share), _) => return Ok(Resolved::Share(share)),
                (Resolution::Link(link), remaining) => {
                    tracing::trace!(link = %link.name, cid = %link.cid, "following link");
                    node = self.get_node(&link.cid)?;
                    rest = remaining;
                }
            }
        }
    }

    /// Fetch the share at the end of `segments`; the path must reach a leaf
    pub fn get<T: AsRef<str>>(&self, root: &Cid, segments: &[T]) -> Result<Bytes> {
        match self.resolve(root, segments)? {
            Resolved::Share(share) => Ok(share),
            Resolved::Node(node) => Err(Error::InvalidPath(format!(
                "path stops at inner node {}",
                node.cid()
            ))),
        }
    }

    /// [`get`](Self::get) for a parsed `<cid>/<seg>/...` path
    pub fn get_path(&self, path: &DagPath) -> Result<Bytes> {
        self.get(path.root(), path.segments())
    }

    /// Fetch leaf `index` of a tree with `leaf_count` leaves
    pub fn get_leaf(&self, root: &Cid, index: usize, leaf_count: usize) -> Result<Bytes> {
        self.get(root, &leaf_index_to_path(index, leaf_count)?)
    }

    pub fn contains(&self, cid: &Cid) -> bool {
        self.store.contains(cid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{DAG_PARSER_FORMAT_NAME, NMT_CODEC};
    use crate::store::MemoryBlockStore;
    use crate::test_utils::{concat_shares, random_shares};

    fn service(encoding: InputEncoding) -> DagService<MemoryBlockStore> {
        DagService::new(MemoryBlockStore::new(), CodecRegistry::with_nmt(), encoding)
    }

    #[test]
    fn test_put_stores_every_node() {
        let encoding = InputEncoding::new(8, 8);
        let svc = service(encoding);
        let buf = concat_shares(&random_shares(8, &encoding, 21));

        let root = svc.put(&buf, &encoding, DAG_PARSER_FORMAT_NAME).unwrap();
        assert_eq!(svc.store().len(), 15);
        assert!(svc.contains(&root));
        assert_eq!(root.codec(), NMT_CODEC);
    }

    #[test]
    fn test_failed_put_stores_nothing() {
        let encoding = InputEncoding::new(8, 8);
        let svc = service(encoding);
        let buf = concat_shares(&random_shares(3, &encoding, 22));

        let err = svc.put(&buf, &encoding, DAG_PARSER_FORMAT_NAME).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
        assert!(svc.store().is_empty());
    }

    #[test]
    fn test_unknown_format() {
        let encoding = InputEncoding::new(8, 8);
        let svc = service(encoding);
        let buf = concat_shares(&random_shares(2, &encoding, 23));

        assert!(matches!(
            svc.put(&buf, &encoding, "raw"),
            Err(Error::UnknownInputFormat(_))
        ));
    }

    #[test]
    fn test_get_every_leaf() {
        let encoding = InputEncoding::new(8, 16);
        let svc = service(encoding);
        let shares = random_shares(8, &encoding, 24);
        let root = svc
            .put(&concat_shares(&shares), &encoding, DAG_PARSER_FORMAT_NAME)
            .unwrap();

        for (i, share) in shares.iter().enumerate() {
            assert_eq!(svc.get_leaf(&root, i, 8).unwrap().as_ref(), share.as_slice());
        }
    }

    #[test]
    fn test_resolve_partial_path_returns_inner_node() {
        let encoding = InputEncoding::new(8, 8);
        let svc = service(encoding);
        let buf = concat_shares(&random_shares(4, &encoding, 25));
        let nodes = svc.registry().parse(DAG_PARSER_FORMAT_NAME, &buf, &encoding).unwrap();
        let root = svc.put(&buf, &encoding, DAG_PARSER_FORMAT_NAME).unwrap();

        // nodes: 4 leaves, then parents [0,1] and [2,3], then root
        match svc.resolve(&root, &["1"]).unwrap() {
            Resolved::Node(node) => assert_eq!(node, nodes[5]),
            Resolved::Share(_) => panic!("expected inner node"),
        }

        let empty: [&str; 0] = [];
        assert!(matches!(
            svc.resolve(&root, &empty).unwrap(),
            Resolved::Node(_)
        ));
        assert!(matches!(svc.get(&root, &["1"]), Err(Error::InvalidPath(_))));
    }

    #[test]
    fn test_path_errors() {
        let encoding = InputEncoding::new(8, 8);
        let svc = service(encoding);
        let buf = concat_shares(&random_shares(4, &encoding, 26));
        let root = svc.put(&buf, &encoding, DAG_PARSER_FORMAT_NAME).unwrap();

        assert!(matches!(
            svc.get(&root, &["0", "1", "0"]),
            Err(Error::InvalidPath(_))
        ));
        assert!(matches!(
            svc.get(&root, &["0", "x"]),
            Err(Error::InvalidPath(_))
        ));
    }

    #[test]
    fn test_missing_root() {
        let encoding = InputEncoding::new(8, 8);
        let svc = service(encoding);
        let buf = concat_shares(&random_shares(2, &encoding, 27));
        let root = svc.parse(&buf, &encoding, DAG_PARSER_FORMAT_NAME).unwrap()[2]
            .cid()
            .to_owned();

        assert!(matches!(svc.get_node(&root), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_tampered_block_is_rejected() {
        let encoding = InputEncoding::new(8, 8);
        let svc = service(encoding);
        let shares = random_shares(2, &encoding, 28);
        let nodes = svc
            .parse(&concat_shares(&shares), &encoding, DAG_PARSER_FORMAT_NAME)
            .unwrap();

        // store the second leaf's bytes under the first leaf's identifier
        svc.store()
            .put(Block::new(*nodes[0].cid(), nodes[1].data().clone()))
            .unwrap();
        assert!(matches!(
            svc.get_node(nodes[0].cid()),
            Err(Error::DigestMismatch { .. })
        ));
    }

    #[test]
    fn test_mismatched_read_encoding_is_detected() {
        let write = InputEncoding::new(8, 8);
        let svc = service(InputEncoding::new(4, 12));
        let buf = concat_shares(&random_shares(2, &write, 29));
        let root = svc.put(&buf, &write, DAG_PARSER_FORMAT_NAME).unwrap();

        assert!(svc.get_leaf(&root, 0, 2).is_err());
    }
}
