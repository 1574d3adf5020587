//! Input encoding configuration
//!
//! Describes how a raw row/column buffer is chunked into shares. Stored as
//! JSON when persisted.

use crate::codec::MAX_DIGEST_SIZE;
use crate::model::NamespacedDigest;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default namespace size in bytes
pub const DEFAULT_NAMESPACE_SIZE: usize = 8;

/// Default share payload size in bytes
pub const DEFAULT_SHARE_SIZE: usize = 256;

/// How shares are laid out in a raw row/column buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEncoding {
    /// Size of the namespace identifier prefixing every share
    #[serde(default = "default_namespace_size")]
    pub namespace_size: usize,
    /// Size of the payload following the namespace
    #[serde(default = "default_share_size")]
    pub share_size: usize,
}

fn default_namespace_size() -> usize {
    DEFAULT_NAMESPACE_SIZE
}

fn default_share_size() -> usize {
    DEFAULT_SHARE_SIZE
}

impl Default for InputEncoding {
    fn default() -> Self {
        InputEncoding {
            namespace_size: DEFAULT_NAMESPACE_SIZE,
            share_size: DEFAULT_SHARE_SIZE,
        }
    }
}

impl InputEncoding {
    pub fn new(namespace_size: usize, share_size: usize) -> Self {
        InputEncoding {
            namespace_size,
            share_size,
        }
    }

    /// Total length of one share: namespace plus payload.
    ///
    /// Saturates on sizes that [`validate`](Self::validate) rejects.
    pub fn share_len(&self) -> usize {
        self.namespace_size.saturating_add(self.share_size)
    }

    /// Serialized size of a namespaced digest under this encoding
    pub fn digest_size(&self) -> usize {
        NamespacedDigest::size_for(self.namespace_size)
    }

    /// Check the sizes are usable
    pub fn validate(&self) -> Result<()> {
        if self.namespace_size == 0 {
            return Err(Error::Config("namespace_size must be at least 1".into()));
        }
        if self.share_size == 0 {
            return Err(Error::Config("share_size must be at least 1".into()));
        }
        if self.digest_size() > MAX_DIGEST_SIZE {
            return Err(Error::Config(format!(
                "namespace_size {} yields a {}-byte digest, limit is {}",
                self.namespace_size,
                self.digest_size(),
                MAX_DIGEST_SIZE
            )));
        }
        if self.namespace_size.checked_add(self.share_size).is_none() {
            return Err(Error::Config(format!(
                "share_size {} overflows the share length",
                self.share_size
            )));
        }
        Ok(())
    }

    /// Load from a JSON file, falling back to defaults when it is missing
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let encoding = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };
        encoding.validate()?;
        Ok(encoding)
    }

    /// Save as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
