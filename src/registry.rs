//! Codec and input-format registries
//!
//! A store bridge dispatches on two keys: the multicodec code of a stored
//! block (which decoder turns its bytes back into a node) and the name of
//! an input format (which parser turns an ingest buffer into nodes). Both
//! tables are plain values handed to [`DagService`](crate::DagService), so
//! nothing is registered process-wide.

use crate::codec::{DAG_PARSER_FORMAT_NAME, NMT_CODEC};
use crate::config::InputEncoding;
use crate::dag::{parse_row_or_column, NmtNode};
use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Turns a raw block back into a node
pub type DecodeFn = Arc<dyn Fn(&[u8], &InputEncoding) -> Result<NmtNode> + Send + Sync>;

/// Turns an ingest buffer into the ordered node list, root last
pub type ParseFn = Arc<dyn Fn(&[u8], &InputEncoding) -> Result<Vec<NmtNode>> + Send + Sync>;

/// Maps multicodec codes to decoders and input format names to parsers
#[derive(Clone, Default)]
pub struct CodecRegistry {
    decoders: HashMap<u64, DecodeFn>,
    parsers: HashMap<String, ParseFn>,
}

impl CodecRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the NMT node decoder and the row/column parser
    pub fn with_nmt() -> Self {
        let mut registry = Self::new();
        registry.register_decoder(
            NMT_CODEC,
            Arc::new(|raw: &[u8], encoding: &InputEncoding| {
                NmtNode::decode(raw, encoding.namespace_size)
            }),
        );
        registry.register_parser(DAG_PARSER_FORMAT_NAME, Arc::new(parse_row_or_column));
        registry
    }

    /// Register a decoder, replacing any previous one for `code`
    pub fn register_decoder(&mut self, code: u64, decoder: DecodeFn) {
        self.decoders.insert(code, decoder);
    }

    /// Register a parser, replacing any previous one for `format`
    pub fn register_parser(&mut self, format: impl Into<String>, parser: ParseFn) {
        self.parsers.insert(format.into(), parser);
    }

    pub fn has_decoder(&self, code: u64) -> bool {
        self.decoders.contains_key(&code)
    }

    pub fn has_parser(&self, format: &str) -> bool {
        self.parsers.contains_key(format)
    }

    /// Decode a block stored under codec `code`
    pub fn decode(&self, code: u64, raw: &[u8], encoding: &InputEncoding) -> Result<NmtNode> {
        let decoder = self.decoders.get(&code).ok_or(Error::UnknownCodec(code))?;
        decoder(raw, encoding)
    }

    /// Parse an ingest buffer in the named input format
    pub fn parse(
        &self,
        format: &str,
        raw: &[u8],
        encoding: &InputEncoding,
    ) -> Result<Vec<NmtNode>> {
        let parser = self
            .parsers
            .get(format)
            .ok_or_else(|| Error::UnknownInputFormat(format.to_string()))?;
        parser(raw, encoding)
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut codes: Vec<_> = self.decoders.keys().copied().collect();
        codes.sort_unstable();
        let mut formats: Vec<_> = self.parsers.keys().collect();
        formats.sort();
        f.debug_struct("CodecRegistry")
            .field("decoders", &codes)
            .field("parsers", &formats)
            .finish()
    }
}
