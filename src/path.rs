//! Paths into an NMT DAG
//!
//! Human form is `<root-cid>/<seg>/<seg>/...` with every segment `0` (left)
//! or `1` (right). Leaf `i` of an `N`-leaf tree sits at the binary form of
//! `i`, zero-padded to `log2(N)` bits, most significant bit first.

use crate::codec::Cid;
use crate::dag::{LEFT, RIGHT};
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A root identifier plus the segments to follow from it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DagPath {
    root: Cid,
    segments: Vec<String>,
}

impl DagPath {
    pub fn new(root: Cid, segments: Vec<String>) -> Self {
        DagPath { root, segments }
    }

    /// Path to leaf `index` of a tree with `leaf_count` leaves
    pub fn to_leaf(root: Cid, index: usize, leaf_count: usize) -> Result<Self> {
        Ok(DagPath::new(root, leaf_index_to_path(index, leaf_count)?))
    }

    pub fn root(&self) -> &Cid {
        &self.root
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for DagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for DagPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim_matches('/').split('/');
        let root = parts
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| Error::InvalidPath(format!("no root identifier in {:?}", s)))?;
        let root = Cid::try_from(root)?;
        let segments = parts.map(str::to_string).collect();
        Ok(DagPath::new(root, segments))
    }
}

/// Binary path segments addressing leaf `index` among `leaf_count` leaves
pub fn leaf_index_to_path(index: usize, leaf_count: usize) -> Result<Vec<String>> {
    if leaf_count == 0 || !leaf_count.is_power_of_two() {
        return Err(Error::InvalidPath(format!(
            "leaf count {} is not a power of two",
            leaf_count
        )));
    }
    if index >= leaf_count {
        return Err(Error::InvalidPath(format!(
            "leaf index {} out of range for {} leaves",
            index, leaf_count
        )));
    }

    let depth = leaf_count.trailing_zeros();
    Ok((0..depth)
        .rev()
        .map(|bit| {
            if (index >> bit) & 1 == 1 {
                RIGHT.to_string()
            } else {
                LEFT.to_string()
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::cid_from_namespaced_bytes;

    fn some_cid() -> Cid {
        cid_from_namespaced_bytes(&[0u8; 48]).unwrap()
    }

    #[test]
    fn test_leaf_index_to_path() {
        assert_eq!(leaf_index_to_path(5, 32).unwrap().concat(), "00101");
        assert_eq!(leaf_index_to_path(0, 16).unwrap().concat(), "0000");
        assert_eq!(leaf_index_to_path(15, 16).unwrap().concat(), "1111");
        assert!(leaf_index_to_path(0, 1).unwrap().is_empty());
    }

    #[test]
    fn test_leaf_index_to_path_rejects_bad_input() {
        assert!(matches!(
            leaf_index_to_path(0, 17),
            Err(Error::InvalidPath(_))
        ));
        assert!(matches!(
            leaf_index_to_path(16, 16),
            Err(Error::InvalidPath(_))
        ));
        assert!(leaf_index_to_path(0, 0).is_err());
    }

    #[test]
    fn test_display_and_parse() {
        let path = DagPath::to_leaf(some_cid(), 5, 32).unwrap();
        let s = path.to_string();
        assert!(s.ends_with("/0/0/1/0/1"));

        let parsed: DagPath = s.parse().unwrap();
        assert_eq!(parsed, path);
    }

    #[test]
    fn test_parse_bare_root_and_leading_slash() {
        let cid = some_cid();
        let parsed: DagPath = format!("/{}/", cid).parse().unwrap();
        assert_eq!(parsed.root(), &cid);
        assert!(parsed.segments().is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<DagPath>().is_err());
        assert!(matches!(
            "not-a-cid/0/1".parse::<DagPath>(),
            Err(Error::Cid(_))
        ));
    }
}
