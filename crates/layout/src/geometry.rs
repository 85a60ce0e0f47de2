//! Coordinates relative to the tree root.
//!
//! A node's frame sits at its parent's absolute content corner plus its own
//! origin; a root's frame is its origin. Each read walks the ancestor chain, so
//! the values always reflect the current stored geometry.

use crate::box_model::{BoxArea, Layout};
use crate::tree::{BoxTree, NodeId};
use trellis_types::{BoxRects, Offset, Rect};

pub struct Geometry<'a> {
    tree: &'a BoxTree,
    id: NodeId,
    layout: &'a Layout,
}

impl<'a> Geometry<'a> {
    pub(crate) fn new(tree: &'a BoxTree, id: NodeId, index: usize) -> Self {
        Self {
            tree,
            id,
            layout: &tree.node_at(index).layout,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node's stored record, for relative coordinates and sizes.
    pub fn layout(&self) -> &'a Layout {
        self.layout
    }

    /// Absolute position of the node's own frame.
    pub fn frame(&self) -> Offset {
        let mut frame = self.layout.origin();
        let mut next = self.tree.node_at(self.id.slot()).parent;
        while let Some(ancestor) = next {
            let node = self.tree.node_at(ancestor.slot());
            frame = frame
                .translate(node.layout.origin())
                .translate(node.layout.content_offset());
            next = node.parent;
        }
        frame
    }

    pub fn absolute_origin_top(&self) -> f32 {
        self.frame().top
    }

    pub fn absolute_origin_left(&self) -> f32 {
        self.frame().left
    }

    pub fn absolute_leading(&self, area: BoxArea) -> Offset {
        self.frame().translate(self.layout.leading(area))
    }

    pub fn absolute_top(&self, area: BoxArea) -> f32 {
        self.absolute_leading(area).top
    }

    pub fn absolute_left(&self, area: BoxArea) -> f32 {
        self.absolute_leading(area).left
    }

    pub fn absolute_right(&self, area: BoxArea) -> f32 {
        self.absolute_left(area) + self.layout.width(area)
    }

    pub fn absolute_bottom(&self, area: BoxArea) -> f32 {
        self.absolute_top(area) + self.layout.height(area)
    }

    pub fn absolute_content_top(&self) -> f32 {
        self.absolute_top(BoxArea::Content)
    }

    pub fn absolute_content_right(&self) -> f32 {
        self.absolute_right(BoxArea::Content)
    }

    pub fn absolute_content_bottom(&self) -> f32 {
        self.absolute_bottom(BoxArea::Content)
    }

    pub fn absolute_content_left(&self) -> f32 {
        self.absolute_left(BoxArea::Content)
    }

    pub fn absolute_padding_top(&self) -> f32 {
        self.absolute_top(BoxArea::Padding)
    }

    pub fn absolute_padding_right(&self) -> f32 {
        self.absolute_right(BoxArea::Padding)
    }

    pub fn absolute_padding_bottom(&self) -> f32 {
        self.absolute_bottom(BoxArea::Padding)
    }

    pub fn absolute_padding_left(&self) -> f32 {
        self.absolute_left(BoxArea::Padding)
    }

    pub fn absolute_border_top(&self) -> f32 {
        self.absolute_top(BoxArea::Border)
    }

    pub fn absolute_border_right(&self) -> f32 {
        self.absolute_right(BoxArea::Border)
    }

    pub fn absolute_border_bottom(&self) -> f32 {
        self.absolute_bottom(BoxArea::Border)
    }

    pub fn absolute_border_left(&self) -> f32 {
        self.absolute_left(BoxArea::Border)
    }

    pub fn absolute_margin_top(&self) -> f32 {
        self.absolute_top(BoxArea::Margin)
    }

    pub fn absolute_margin_right(&self) -> f32 {
        self.absolute_right(BoxArea::Margin)
    }

    pub fn absolute_margin_bottom(&self) -> f32 {
        self.absolute_bottom(BoxArea::Margin)
    }

    pub fn absolute_margin_left(&self) -> f32 {
        self.absolute_left(BoxArea::Margin)
    }

    pub fn absolute_rect(&self, area: BoxArea) -> Rect {
        let frame = self.frame();
        let local = self.layout.rect(area);
        Rect::new(frame.left + local.x, frame.top + local.y, local.width, local.height)
    }

    /// All four areas in root coordinates, for renderers.
    pub fn box_rects(&self) -> BoxRects {
        BoxRects {
            content: self.absolute_rect(BoxArea::Content),
            padding: self.absolute_rect(BoxArea::Padding),
            border: self.absolute_rect(BoxArea::Border),
            margin: self.absolute_rect(BoxArea::Margin),
        }
    }
}

impl BoxTree {
    /// Absolute box-model rectangles of `id`.
    pub fn box_rects(&self, id: NodeId) -> Result<BoxRects, crate::LayoutError> {
        Ok(self.geometry(id)?.box_rects())
    }
}
