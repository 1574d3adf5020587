//! Error types for nmt_dag

use thiserror::Error;

/// Result type alias for nmt_dag operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing, decoding or resolving NMT nodes
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CID error: {0}")]
    Cid(#[from] cid::Error),

    /// Buffer length is not a multiple of the share size, or the share
    /// count is not a power of two
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Leading byte of a raw node is neither the leaf nor the inner tag
    #[error("Unknown node tag: {0:#04x}")]
    UnknownTag(u8),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid namespace range: {0}")]
    InvalidNamespaceRange(String),

    #[error("Invalid namespaced digest: {0}")]
    InvalidDigest(String),

    #[error("Digest mismatch: expected {expected}, found {found}")]
    DigestMismatch { expected: String, found: String },

    #[error("No decoder registered for codec {0:#x}")]
    UnknownCodec(u64),

    #[error("No parser registered for input format: {0}")]
    UnknownInputFormat(String),

    #[error("Block not found: {0}")]
    NotFound(String),

    #[error("Config error: {0}")]
    Config(String),
}
