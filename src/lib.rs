//! Box-model geometry and incremental invalidation for hierarchical visual trees.
//!
//! Nodes live in a [`BoxTree`]. Each carries a [`Layout`] (content box, padding,
//! border, margin and an origin inside its parent's content box), a set of
//! [`IntrinsicSize`] hints, and a [`Dirty`] state telling an arrangement pass
//! which parts of the tree need recomputing.
//!
//! ```
//! use trellis::{BoxTree, Dirty, Edges};
//!
//! let mut tree = BoxTree::new();
//! let root = tree.new_node();
//! let child = tree.new_node();
//! tree.append_child(root, child)?;
//!
//! tree.layout_mut(root)?.set_padding(Edges::new(2.0, 0.0, 0.0, 4.0));
//! tree.layout_mut(root)?.inset_content();
//! tree.layout_mut(child)?.set_origin_top(10.0);
//!
//! assert_eq!(tree.geometry(child)?.absolute_content_top(), 12.0);
//! assert_eq!(tree.dirty(child)?, Dirty::Stale);
//! # Ok::<(), trellis::LayoutError>(())
//! ```

pub use trellis_layout::{
    Ancestors, Arrange, BoxArea, BoxTree, Descendants, Dirty, Geometry, IntrinsicMut,
    IntrinsicSize, Layout, LayoutConfig, LayoutError, LayoutMut, Measure, NodeId, PassOutcome,
    Propagation, Spacing,
};
pub use trellis_types::geometry::{BoxRects, Edges, Offset, Rect, Side, Size};

pub use trellis_layout as layout;
pub use trellis_types as types;
