//! Natural and forced size hints for a node.
//!
//! The measurement collaborator writes these; the arrangement algorithm reads
//! them. A change only marks the owning node stale, because a node's hints never
//! affect the stored geometry of its descendants.

use crate::dirty::Propagation;
use crate::tree::{BoxTree, NodeId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntrinsicSize {
    pub(crate) width: Option<f32>,
    pub(crate) height: Option<f32>,
    pub(crate) exact_width: bool,
    pub(crate) exact_height: bool,
    pub(crate) ratio: Option<f32>,
    pub(crate) is_replaced: bool,
}

impl Default for IntrinsicSize {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            exact_width: true,
            exact_height: true,
            ratio: None,
            is_replaced: false,
        }
    }
}

impl IntrinsicSize {
    /// Forced width, if any.
    pub fn width(&self) -> Option<f32> {
        self.width
    }

    /// Forced height, if any.
    pub fn height(&self) -> Option<f32> {
        self.height
    }

    /// Whether a present width must be honored exactly rather than as a bound.
    pub fn exact_width(&self) -> bool {
        self.exact_width
    }

    /// Whether a present height must be honored exactly rather than as a bound.
    pub fn exact_height(&self) -> bool {
        self.exact_height
    }

    /// Aspect ratio (width / height) for replaced content.
    pub fn ratio(&self) -> Option<f32> {
        self.ratio
    }

    /// True for content whose size is supplied externally, such as images.
    pub fn is_replaced(&self) -> bool {
        self.is_replaced
    }
}

/// Mutable access to one node's intrinsic hints.
///
/// Every setter stores the value and returns whether it differed from the
/// previous one. A difference marks the owning node [`Stale`](crate::Dirty::Stale).
pub struct IntrinsicMut<'a> {
    tree: &'a mut BoxTree,
    id: NodeId,
    index: usize,
}

impl<'a> IntrinsicMut<'a> {
    pub(crate) fn new(tree: &'a mut BoxTree, id: NodeId, index: usize) -> Self {
        Self { tree, id, index }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Current values.
    pub fn get(&self) -> &IntrinsicSize {
        &self.tree.node_at(self.index).intrinsic
    }

    pub fn set_width(&mut self, value: Option<f32>) -> bool {
        self.tree
            .update(self.index, Propagation::Local, value, |node| &mut node.intrinsic.width)
    }

    pub fn set_height(&mut self, value: Option<f32>) -> bool {
        self.tree
            .update(self.index, Propagation::Local, value, |node| &mut node.intrinsic.height)
    }

    pub fn set_exact_width(&mut self, value: bool) -> bool {
        self.tree.update(self.index, Propagation::Local, value, |node| {
            &mut node.intrinsic.exact_width
        })
    }

    pub fn set_exact_height(&mut self, value: bool) -> bool {
        self.tree.update(self.index, Propagation::Local, value, |node| {
            &mut node.intrinsic.exact_height
        })
    }

    pub fn set_ratio(&mut self, value: Option<f32>) -> bool {
        self.tree
            .update(self.index, Propagation::Local, value, |node| &mut node.intrinsic.ratio)
    }

    pub fn set_is_replaced(&mut self, value: bool) -> bool {
        self.tree.update(self.index, Propagation::Local, value, |node| {
            &mut node.intrinsic.is_replaced
        })
    }
}
