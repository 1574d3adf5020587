//! NMT nodes as content-addressed DAG blocks
//!
//! - [`NmtNode`]: leaf/inner block format, decoding and path resolution
//! - [`parse_row_or_column`]: turns a raw share buffer into the ordered node
//!   list whose last element is the tree root

mod node;
mod parser;

pub use node::{InnerNode, LeafNode, Link, NmtNode, Resolution, INNER_TAG, LEAF_TAG, LEFT, RIGHT};
pub use parser::{parse_row_or_column, RowColumnParser};
