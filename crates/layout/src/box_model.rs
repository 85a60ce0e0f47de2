//! Stored geometry for one node and the box-model breakdown derived from it.
//!
//! ```text
//! margin box   ┌───────────────────────────────┐
//! border box   │  ┌─────────────────────────┐  │
//! padding box  │  │  ┌───────────────────┐  │  │
//! content box  │  │  │  ┌─────────────┐  │  │  │
//!              │  │  │  │             │  │  │  │
//! ```
//!
//! Only the content box size, its leading offset, the three spacing layers and
//! the origin are stored. Every other edge and size is computed on read.

use crate::dirty::{Dirty, Propagation};
use crate::tree::{BoxTree, NodeId};
use trellis_types::{BoxRects, Edges, Offset, Rect, Side, Size};

/// One of the four nested rectangles of the box model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxArea {
    Content,
    Padding,
    Border,
    Margin,
}

/// One of the three spacing layers between box areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spacing {
    Margin,
    Border,
    Padding,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    pub(crate) content_width: f32,
    pub(crate) content_height: f32,
    pub(crate) content_top: f32,
    pub(crate) content_left: f32,
    pub(crate) origin_top: f32,
    pub(crate) origin_left: f32,
    pub(crate) margin: Edges,
    pub(crate) border: Edges,
    pub(crate) padding: Edges,
    pub(crate) dirty: Dirty,
}

impl Layout {
    // --- Stored fields ---

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn content_top(&self) -> f32 {
        self.content_top
    }

    pub fn content_left(&self) -> f32 {
        self.content_left
    }

    pub fn origin_top(&self) -> f32 {
        self.origin_top
    }

    pub fn origin_left(&self) -> f32 {
        self.origin_left
    }

    pub fn margin(&self) -> Edges {
        self.margin
    }

    pub fn border(&self) -> Edges {
        self.border
    }

    pub fn padding(&self) -> Edges {
        self.padding
    }

    pub fn spacing(&self, layer: Spacing) -> Edges {
        match layer {
            Spacing::Margin => self.margin,
            Spacing::Border => self.border,
            Spacing::Padding => self.padding,
        }
    }

    pub fn dirty(&self) -> Dirty {
        self.dirty
    }

    pub fn content_size(&self) -> Size {
        Size::new(self.content_width, self.content_height)
    }

    pub fn origin(&self) -> Offset {
        Offset::new(self.origin_top, self.origin_left)
    }

    pub fn content_offset(&self) -> Offset {
        Offset::new(self.content_top, self.content_left)
    }

    /// Content offset implied by the spacing layers: margin, border and padding
    /// on the leading edges.
    pub fn edge_inset(&self) -> Offset {
        self.margin
            .leading()
            .translate(self.border.leading())
            .translate(self.padding.leading())
    }

    // --- Derived sizes ---

    pub fn width(&self, area: BoxArea) -> f32 {
        match area {
            BoxArea::Content => self.content_width,
            BoxArea::Padding => self.width(BoxArea::Content) + self.padding.horizontal(),
            BoxArea::Border => self.width(BoxArea::Padding) + self.border.horizontal(),
            BoxArea::Margin => self.width(BoxArea::Border) + self.margin.horizontal(),
        }
    }

    pub fn height(&self, area: BoxArea) -> f32 {
        match area {
            BoxArea::Content => self.content_height,
            BoxArea::Padding => self.height(BoxArea::Content) + self.padding.vertical(),
            BoxArea::Border => self.height(BoxArea::Padding) + self.border.vertical(),
            BoxArea::Margin => self.height(BoxArea::Border) + self.margin.vertical(),
        }
    }

    pub fn padding_box_width(&self) -> f32 {
        self.width(BoxArea::Padding)
    }

    pub fn padding_box_height(&self) -> f32 {
        self.height(BoxArea::Padding)
    }

    pub fn border_box_width(&self) -> f32 {
        self.width(BoxArea::Border)
    }

    pub fn border_box_height(&self) -> f32 {
        self.height(BoxArea::Border)
    }

    pub fn margin_box_width(&self) -> f32 {
        self.width(BoxArea::Margin)
    }

    pub fn margin_box_height(&self) -> f32 {
        self.height(BoxArea::Margin)
    }

    // --- Derived edges, relative to the node's own frame ---

    /// Leading (top, left) corner of `area`. The stored content offset is
    /// authoritative; outer areas step outward from it.
    pub fn leading(&self, area: BoxArea) -> Offset {
        let (inner, step) = match area {
            BoxArea::Content => return self.content_offset(),
            BoxArea::Padding => (BoxArea::Content, self.padding),
            BoxArea::Border => (BoxArea::Padding, self.border),
            BoxArea::Margin => (BoxArea::Border, self.margin),
        };
        let inner = self.leading(inner);
        Offset::new(inner.top - step.top, inner.left - step.left)
    }

    pub fn top(&self, area: BoxArea) -> f32 {
        self.leading(area).top
    }

    pub fn left(&self, area: BoxArea) -> f32 {
        self.leading(area).left
    }

    pub fn right(&self, area: BoxArea) -> f32 {
        self.left(area) + self.width(area)
    }

    pub fn bottom(&self, area: BoxArea) -> f32 {
        self.top(area) + self.height(area)
    }

    pub fn content_right(&self) -> f32 {
        self.right(BoxArea::Content)
    }

    pub fn content_bottom(&self) -> f32 {
        self.bottom(BoxArea::Content)
    }

    pub fn padding_box_top(&self) -> f32 {
        self.top(BoxArea::Padding)
    }

    pub fn padding_box_right(&self) -> f32 {
        self.right(BoxArea::Padding)
    }

    pub fn padding_box_bottom(&self) -> f32 {
        self.bottom(BoxArea::Padding)
    }

    pub fn padding_box_left(&self) -> f32 {
        self.left(BoxArea::Padding)
    }

    pub fn border_box_top(&self) -> f32 {
        self.top(BoxArea::Border)
    }

    pub fn border_box_right(&self) -> f32 {
        self.right(BoxArea::Border)
    }

    pub fn border_box_bottom(&self) -> f32 {
        self.bottom(BoxArea::Border)
    }

    pub fn border_box_left(&self) -> f32 {
        self.left(BoxArea::Border)
    }

    pub fn margin_box_top(&self) -> f32 {
        self.top(BoxArea::Margin)
    }

    pub fn margin_box_right(&self) -> f32 {
        self.right(BoxArea::Margin)
    }

    pub fn margin_box_bottom(&self) -> f32 {
        self.bottom(BoxArea::Margin)
    }

    pub fn margin_box_left(&self) -> f32 {
        self.left(BoxArea::Margin)
    }

    /// `area` as a rectangle in the node's own frame.
    pub fn rect(&self, area: BoxArea) -> Rect {
        let corner = self.leading(area);
        Rect::new(corner.left, corner.top, self.width(area), self.height(area))
    }

    pub fn box_rects(&self) -> BoxRects {
        BoxRects {
            content: self.rect(BoxArea::Content),
            padding: self.rect(BoxArea::Padding),
            border: self.rect(BoxArea::Border),
            margin: self.rect(BoxArea::Margin),
        }
    }
}

/// Mutable access to one node's stored geometry.
///
/// Every setter stores the value and returns whether it differed from the
/// previous one. A difference marks the node and its whole subtree
/// [`Stale`](Dirty::Stale), leaving nodes that are
/// [`InProgress`](Dirty::InProgress) untouched.
pub struct LayoutMut<'a> {
    tree: &'a mut BoxTree,
    id: NodeId,
    index: usize,
}

impl<'a> LayoutMut<'a> {
    pub(crate) fn new(tree: &'a mut BoxTree, id: NodeId, index: usize) -> Self {
        Self { tree, id, index }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Current values.
    pub fn get(&self) -> &Layout {
        &self.tree.node_at(self.index).layout
    }

    pub fn set_content_width(&mut self, value: f32) -> bool {
        self.tree.update(self.index, Propagation::Subtree, value, |node| {
            &mut node.layout.content_width
        })
    }

    pub fn set_content_height(&mut self, value: f32) -> bool {
        self.tree.update(self.index, Propagation::Subtree, value, |node| {
            &mut node.layout.content_height
        })
    }

    pub fn set_content_size(&mut self, size: Size) -> bool {
        let width = self.set_content_width(size.width);
        let height = self.set_content_height(size.height);
        width || height
    }

    pub fn set_content_top(&mut self, value: f32) -> bool {
        self.tree.update(self.index, Propagation::Subtree, value, |node| {
            &mut node.layout.content_top
        })
    }

    pub fn set_content_left(&mut self, value: f32) -> bool {
        self.tree.update(self.index, Propagation::Subtree, value, |node| {
            &mut node.layout.content_left
        })
    }

    pub fn set_origin_top(&mut self, value: f32) -> bool {
        self.tree.update(self.index, Propagation::Subtree, value, |node| {
            &mut node.layout.origin_top
        })
    }

    pub fn set_origin_left(&mut self, value: f32) -> bool {
        self.tree.update(self.index, Propagation::Subtree, value, |node| {
            &mut node.layout.origin_left
        })
    }

    pub fn set_origin(&mut self, origin: Offset) -> bool {
        let top = self.set_origin_top(origin.top);
        let left = self.set_origin_left(origin.left);
        top || left
    }

    pub fn set_spacing(&mut self, layer: Spacing, edges: Edges) -> bool {
        self.tree
            .update(self.index, Propagation::Subtree, edges, |node| match layer {
                Spacing::Margin => &mut node.layout.margin,
                Spacing::Border => &mut node.layout.border,
                Spacing::Padding => &mut node.layout.padding,
            })
    }

    pub fn set_spacing_side(&mut self, layer: Spacing, side: Side, value: f32) -> bool {
        let edges = self.get().spacing(layer).with(side, value);
        self.set_spacing(layer, edges)
    }

    pub fn set_margin(&mut self, edges: Edges) -> bool {
        self.set_spacing(Spacing::Margin, edges)
    }

    pub fn set_border(&mut self, edges: Edges) -> bool {
        self.set_spacing(Spacing::Border, edges)
    }

    pub fn set_padding(&mut self, edges: Edges) -> bool {
        self.set_spacing(Spacing::Padding, edges)
    }

    /// Places the content box at the offset implied by the spacing layers, so the
    /// margin box starts at the node's frame origin.
    pub fn inset_content(&mut self) -> bool {
        let inset = self.get().edge_inset();
        let top = self.set_content_top(inset.top);
        let left = self.set_content_left(inset.left);
        top || left
    }
}
