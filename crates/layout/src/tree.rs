//! Arena-backed node tree.
//!
//! Nodes live in a flat slot vector and refer to each other by [`NodeId`]. A
//! node's parent is a plain id, so there are no ownership cycles, and subtree
//! walks are index-based.

use crate::box_model::{Layout, LayoutMut};
use crate::config::LayoutConfig;
use crate::dirty::{Dirty, Propagation};
use crate::geometry::Geometry;
use crate::intrinsic::{IntrinsicMut, IntrinsicSize};
use crate::util::ChangeDetect;
use crate::LayoutError;
use std::collections::HashSet;
use std::fmt;

/// Handle to a node in a [`BoxTree`].
///
/// Handles are generational: once a node is removed, its old handle is rejected
/// even if the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    pub(crate) fn slot(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) layout: Layout,
    pub(crate) intrinsic: IntrinsicSize,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    live: bool,
    node: Node,
}

/// A tree of nodes, each owning one [`Layout`] and one [`IntrinsicSize`].
///
/// Several independent roots may coexist; a detached node is simply a root.
#[derive(Debug, Clone)]
pub struct BoxTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
    pub(crate) config: LayoutConfig,
}

impl Default for BoxTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxTree {
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            slots: Vec::with_capacity(config.initial_capacity),
            free: Vec::new(),
            len: 0,
            config,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index_of(id).is_some()
    }

    // --- Slot management ---

    /// Creates a new root node with default records. Its layout starts
    /// [`Stale`](Dirty::Stale).
    pub fn new_node(&mut self) -> NodeId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.live = true;
            slot.node = Node::default();
            return NodeId {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            live: true,
            node: Node::default(),
        });
        NodeId {
            index,
            generation: 0,
        }
    }

    fn index_of(&self, id: NodeId) -> Option<usize> {
        let slot = self.slots.get(id.slot())?;
        (slot.live && slot.generation == id.generation).then_some(id.slot())
    }

    pub(crate) fn resolve(&self, id: NodeId) -> Result<usize, LayoutError> {
        self.index_of(id).ok_or(LayoutError::UnknownNode(id))
    }

    /// Node at a slot index that is known to be live.
    pub(crate) fn node_at(&self, index: usize) -> &Node {
        &self.slots[index].node
    }

    fn node_at_mut(&mut self, index: usize) -> &mut Node {
        &mut self.slots[index].node
    }

    fn release(&mut self, id: NodeId) {
        let slot = &mut self.slots[id.slot()];
        slot.live = false;
        slot.generation = slot.generation.wrapping_add(1);
        slot.node = Node::default();
        self.free.push(id.index);
        self.len -= 1;
    }

    // --- Record access ---

    pub fn layout(&self, id: NodeId) -> Result<&Layout, LayoutError> {
        let index = self.resolve(id)?;
        Ok(&self.node_at(index).layout)
    }

    pub fn layout_mut(&mut self, id: NodeId) -> Result<LayoutMut<'_>, LayoutError> {
        let index = self.resolve(id)?;
        Ok(LayoutMut::new(self, id, index))
    }

    pub fn intrinsic(&self, id: NodeId) -> Result<&IntrinsicSize, LayoutError> {
        let index = self.resolve(id)?;
        Ok(&self.node_at(index).intrinsic)
    }

    pub fn intrinsic_mut(&mut self, id: NodeId) -> Result<IntrinsicMut<'_>, LayoutError> {
        let index = self.resolve(id)?;
        Ok(IntrinsicMut::new(self, id, index))
    }

    /// Read-only view with coordinates relative to the tree root.
    pub fn geometry(&self, id: NodeId) -> Result<Geometry<'_>, LayoutError> {
        let index = self.resolve(id)?;
        Ok(Geometry::new(self, id, index))
    }

    pub fn dirty(&self, id: NodeId) -> Result<Dirty, LayoutError> {
        Ok(self.layout(id)?.dirty)
    }

    /// Assigns `state` to this node only.
    pub fn set_dirty(&mut self, id: NodeId, state: Dirty) -> Result<(), LayoutError> {
        let index = self.resolve(id)?;
        self.node_at_mut(index).layout.dirty = state;
        Ok(())
    }

    /// Assigns `state` to the node and every descendant, whatever their current
    /// state. This is how a pass enters or leaves [`InProgress`](Dirty::InProgress)
    /// for a whole subtree.
    pub fn set_subtree_dirty(&mut self, id: NodeId, state: Dirty) -> Result<usize, LayoutError> {
        let index = self.resolve(id)?;
        let mut count = 0;
        let mut stack = vec![index];
        while let Some(current) = stack.pop() {
            let node = self.node_at_mut(current);
            node.layout.dirty = state;
            count += 1;
            stack.extend(node.children.iter().map(|child| child.slot()));
        }
        log::trace!("Set {} node(s) under {} to {}", count, id, state.as_str());
        Ok(count)
    }

    // --- Change detection ---

    /// Stores `value` into the field selected by `field` and, if it differs from
    /// the previous value, marks nodes stale according to `scope`.
    ///
    /// The value is written either way. Returns whether it was a change.
    pub(crate) fn update<T, F>(
        &mut self,
        index: usize,
        scope: Propagation,
        value: T,
        field: F,
    ) -> bool
    where
        T: ChangeDetect,
        F: FnOnce(&mut Node) -> &mut T,
    {
        let tolerance = self.config.change_tolerance;
        let slot = field(self.node_at_mut(index));
        let changed = !slot.same_as(&value, tolerance);
        *slot = value;
        if changed {
            self.invalidate(index, scope);
        }
        changed
    }

    fn invalidate(&mut self, index: usize, scope: Propagation) {
        match scope {
            Propagation::Local => {
                self.node_at_mut(index).layout.dirty = Dirty::Stale;
            }
            Propagation::Subtree => {
                let mut marked = 0usize;
                let mut held = 0usize;
                let mut stack = vec![index];
                while let Some(current) = stack.pop() {
                    let node = self.node_at_mut(current);
                    if node.layout.dirty.is_in_progress() {
                        held += 1;
                    } else {
                        node.layout.dirty = Dirty::Stale;
                        marked += 1;
                    }
                    stack.extend(node.children.iter().map(|child| child.slot()));
                }
                log::trace!(
                    "Invalidated subtree at slot {}: {} marked stale, {} held in progress",
                    index,
                    marked,
                    held
                );
            }
        }
    }

    /// Marks a node stale unless a pass holds it.
    fn invalidate_node(&mut self, index: usize) {
        let layout = &mut self.node_at_mut(index).layout;
        if !layout.dirty.is_in_progress() {
            layout.dirty = Dirty::Stale;
        }
    }

    // --- Structure queries ---

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, LayoutError> {
        let index = self.resolve(id)?;
        Ok(self.node_at(index).parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], LayoutError> {
        let index = self.resolve(id)?;
        Ok(&self.node_at(index).children)
    }

    pub fn child_count(&self, id: NodeId) -> Result<usize, LayoutError> {
        Ok(self.children(id)?.len())
    }

    pub fn is_root(&self, id: NodeId) -> Result<bool, LayoutError> {
        Ok(self.parent(id)?.is_none())
    }

    /// The root of the tree containing `id`.
    pub fn root_of(&self, id: NodeId) -> Result<NodeId, LayoutError> {
        Ok(self.ancestors(id)?.last().unwrap_or(id))
    }

    /// Strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Result<Ancestors<'_>, LayoutError> {
        let index = self.resolve(id)?;
        Ok(Ancestors {
            tree: self,
            next: self.node_at(index).parent,
        })
    }

    /// `id` and all its descendants in pre-order (children in order).
    pub fn descendants(&self, id: NodeId) -> Result<Descendants<'_>, LayoutError> {
        self.resolve(id)?;
        Ok(Descendants {
            tree: self,
            stack: vec![id],
        })
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut current = Some(of);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.node_at(id.slot()).parent;
        }
        false
    }

    fn check_attachable(&self, parent: NodeId, child: NodeId) -> Result<(), LayoutError> {
        self.resolve(parent)?;
        self.resolve(child)?;
        if parent == child {
            return Err(LayoutError::SelfAttachment(child));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(LayoutError::CyclicAttachment { parent, child });
        }
        Ok(())
    }

    // --- Structure edits ---

    /// Appends `child` as the last child of `parent`, moving it out of its current
    /// parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), LayoutError> {
        let len = self.child_count(parent)?;
        let len = if self.parent(child)? == Some(parent) { len - 1 } else { len };
        self.insert_child(parent, len, child)
    }

    /// Inserts `child` at `index` in `parent`'s children, moving it out of its
    /// current parent first. `index` is interpreted after that removal. A child
    /// already at `index` is left alone.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), LayoutError> {
        self.check_attachable(parent, child)?;
        let len = self.node_at(parent.slot()).children.len();
        let len = if self.node_at(child.slot()).parent == Some(parent) { len - 1 } else { len };
        if index > len {
            return Err(LayoutError::ChildIndexOutOfRange { index, len });
        }
        if self.node_at(parent.slot()).children.get(index) == Some(&child) {
            return Ok(());
        }

        self.unlink(child);
        self.node_at_mut(parent.slot()).children.insert(index, child);
        self.node_at_mut(child.slot()).parent = Some(parent);

        log::debug!("Attached {} to {} at position {}", child, parent, index);
        self.invalidate_node(parent.slot());
        self.invalidate(child.slot(), Propagation::Subtree);
        Ok(())
    }

    /// Removes `child` from `parent`, leaving it as a root of its own tree.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), LayoutError> {
        self.resolve(parent)?;
        if self.parent(child)? != Some(parent) {
            return Err(LayoutError::NotAChild { parent, child });
        }
        self.detach(child)?;
        Ok(())
    }

    /// Detaches `id` from its parent, if any, and returns the former parent.
    pub fn detach(&mut self, id: NodeId) -> Result<Option<NodeId>, LayoutError> {
        self.resolve(id)?;
        let former = self.unlink(id);
        if let Some(parent) = former {
            log::debug!("Detached {} from {}", id, parent);
            self.invalidate(id.slot(), Propagation::Subtree);
        }
        Ok(former)
    }

    /// Replaces the children of `parent`. Previous children that are not in
    /// `children` become roots. Children that stay keep their dirty state, and
    /// an unchanged list leaves the tree untouched.
    pub fn set_children(
        &mut self,
        parent: NodeId,
        children: Vec<NodeId>,
    ) -> Result<(), LayoutError> {
        self.resolve(parent)?;
        let mut seen = HashSet::with_capacity(children.len());
        for &child in &children {
            self.check_attachable(parent, child)?;
            if !seen.insert(child) {
                return Err(LayoutError::DuplicateChild(child));
            }
        }

        if self.node_at(parent.slot()).children == children {
            return Ok(());
        }

        let previous = std::mem::take(&mut self.node_at_mut(parent.slot()).children);
        for &old in &previous {
            self.node_at_mut(old.slot()).parent = None;
            if !seen.contains(&old) {
                self.invalidate(old.slot(), Propagation::Subtree);
            }
        }
        for &child in &children {
            self.unlink(child);
            self.node_at_mut(child.slot()).parent = Some(parent);
            if !previous.contains(&child) {
                self.invalidate(child.slot(), Propagation::Subtree);
            }
        }
        log::debug!("Set {} child(ren) on {}", children.len(), parent);
        self.node_at_mut(parent.slot()).children = children;
        self.invalidate_node(parent.slot());
        Ok(())
    }

    /// Removes `id` and its whole subtree from the arena. Returns the number of
    /// nodes freed.
    pub fn remove_node(&mut self, id: NodeId) -> Result<usize, LayoutError> {
        self.detach(id)?;
        let doomed: Vec<NodeId> = self.descendants(id)?.collect();
        for &node in &doomed {
            self.release(node);
        }
        log::debug!("Removed {} node(s) rooted at {}", doomed.len(), id);
        Ok(doomed.len())
    }

    /// Drops the parent/child link of a live node. Marks the former parent stale.
    fn unlink(&mut self, id: NodeId) -> Option<NodeId> {
        let parent = self.node_at_mut(id.slot()).parent.take()?;
        self.node_at_mut(parent.slot()).children.retain(|&child| child != id);
        self.invalidate_node(parent.slot());
        Some(parent)
    }
}

pub struct Ancestors<'a> {
    tree: &'a BoxTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.node_at(current.slot()).parent;
        Some(current)
    }
}

pub struct Descendants<'a> {
    tree: &'a BoxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        let children = &self.tree.node_at(current.slot()).children;
        self.stack.extend(children.iter().rev().copied());
        Some(current)
    }
}
