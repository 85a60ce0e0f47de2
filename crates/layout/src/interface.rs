use crate::dirty::Dirty;
use crate::intrinsic::IntrinsicMut;
use crate::tree::{BoxTree, NodeId};
use crate::LayoutError;

// --- Collaborator seams ---

/// An arrangement algorithm (block flow, flex, grid...).
///
/// It reads intrinsic hints and children and writes content sizes, content
/// offsets, origins and spacing. It may also hand out or clear `dirty` states
/// itself for finer-grained passes.
pub trait Arrange {
    fn arrange(&mut self, tree: &mut BoxTree, node: NodeId) -> Result<(), LayoutError>;
}

impl<F> Arrange for F
where
    F: FnMut(&mut BoxTree, NodeId) -> Result<(), LayoutError>,
{
    fn arrange(&mut self, tree: &mut BoxTree, node: NodeId) -> Result<(), LayoutError> {
        self(tree, node)
    }
}

/// A measurement collaborator that supplies natural sizes from rendered content.
pub trait Measure {
    fn measure(&mut self, node: NodeId, hints: &mut IntrinsicMut<'_>);
}

// --- Pass driving ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// Every node of the subtree was already clean.
    Skipped,
    /// The arranger ran; `nodes` were released from in-progress to clean.
    Completed { nodes: usize },
}

impl BoxTree {
    /// Runs one arrangement pass over the subtree at `root`.
    ///
    /// Every node of the subtree is held [`InProgress`](Dirty::InProgress) while
    /// the arranger runs, so its own geometry writes do not re-stale the nodes
    /// it is computing. Afterwards every node still in progress becomes clean.
    /// Nodes the arranger marked differently keep their state.
    ///
    /// On error the states are left as the arranger left them.
    pub fn run_pass<A>(
        &mut self,
        root: NodeId,
        arranger: &mut A,
    ) -> Result<PassOutcome, LayoutError>
    where
        A: Arrange + ?Sized,
    {
        let needs_pass = self
            .descendants(root)?
            .any(|id| !self.node_at(id.slot()).layout.dirty.is_clean());
        if !needs_pass {
            log::debug!("Skipping pass at {}: subtree is clean", root);
            return Ok(PassOutcome::Skipped);
        }

        let held = self.set_subtree_dirty(root, Dirty::InProgress)?;
        log::debug!("Starting pass at {} over {} node(s)", root, held);

        if let Err(e) = arranger.arrange(self, root) {
            log::warn!("Pass at {} aborted: {}", root, e);
            return Err(e);
        }

        let finished: Vec<NodeId> = self
            .descendants(root)?
            .filter(|id| self.node_at(id.slot()).layout.dirty.is_in_progress())
            .collect();
        for &id in &finished {
            self.set_dirty(id, Dirty::Clean)?;
        }
        log::debug!("Finished pass at {}: {} node(s) clean", root, finished.len());
        Ok(PassOutcome::Completed {
            nodes: finished.len(),
        })
    }

    /// Visits `root` and its descendants in pre-order, giving the measurer write
    /// access to each node's intrinsic hints. Returns the number of nodes visited.
    pub fn measure_subtree<M>(
        &mut self,
        root: NodeId,
        measurer: &mut M,
    ) -> Result<usize, LayoutError>
    where
        M: Measure + ?Sized,
    {
        let nodes: Vec<NodeId> = self.descendants(root)?.collect();
        for &id in &nodes {
            let mut hints = self.intrinsic_mut(id)?;
            measurer.measure(id, &mut hints);
        }
        log::trace!("Measured {} node(s) under {}", nodes.len(), root);
        Ok(nodes.len())
    }
}
