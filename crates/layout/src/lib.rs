use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Node {0} does not exist in this tree (never created or already removed).")]
    UnknownNode(NodeId),
    #[error("Cannot attach {child} under {parent}: {child} is an ancestor of {parent}.")]
    CyclicAttachment { parent: NodeId, child: NodeId },
    #[error("Cannot attach node {0} to itself.")]
    SelfAttachment(NodeId),
    #[error("Node {child} is not a child of {parent}.")]
    NotAChild { parent: NodeId, child: NodeId },
    #[error("Child index {index} is out of range for a parent with {len} children.")]
    ChildIndexOutOfRange { index: usize, len: usize },
    #[error("Node {0} appears more than once in the new child list.")]
    DuplicateChild(NodeId),
    #[error("Arrangement failed: {0}")]
    Arrangement(String),
}

pub mod box_model;
pub mod config;
pub mod dirty;
pub mod geometry;
pub mod interface;
pub mod intrinsic;
pub mod tree;
pub mod util;

pub use self::box_model::{BoxArea, Layout, LayoutMut, Spacing};
pub use self::config::LayoutConfig;
pub use self::dirty::{Dirty, Propagation};
pub use self::geometry::Geometry;
pub use self::interface::{Arrange, Measure, PassOutcome};
pub use self::intrinsic::{IntrinsicMut, IntrinsicSize};
pub use self::tree::{Ancestors, BoxTree, Descendants, NodeId};

// Re-export geometry types used in the public API to prevent type mismatches
pub use trellis_types::geometry::{BoxRects, Edges, Offset, Rect, Side, Size};

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod tree_test;
