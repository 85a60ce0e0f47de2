use crate::{BoxTree, Dirty, LayoutError, NodeId, Size};

pub type TestResult = Result<(), LayoutError>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A root with two children; the first child has two children of its own.
///
/// The root, the first child and the first grandchild have a 10x16 content box.
/// Every node starts in progress, as if a pass had just begun.
pub struct Family {
    pub tree: BoxTree,
    pub root: NodeId,
    pub child1: NodeId,
    pub child2: NodeId,
    pub grandchild1_1: NodeId,
    pub grandchild1_2: NodeId,
}

impl Family {
    pub fn new() -> Result<Self, LayoutError> {
        Self::with_tree(BoxTree::new())
    }

    pub fn with_tree(mut tree: BoxTree) -> Result<Self, LayoutError> {
        init_logging();
        let root = tree.new_node();
        let child1 = tree.new_node();
        let child2 = tree.new_node();
        let grandchild1_1 = tree.new_node();
        let grandchild1_2 = tree.new_node();

        for id in [root, child1, grandchild1_1] {
            tree.layout_mut(id)?.set_content_size(Size::new(10.0, 16.0));
        }
        tree.set_children(root, vec![child1, child2])?;
        tree.set_children(child1, vec![grandchild1_1, grandchild1_2])?;
        tree.set_subtree_dirty(root, Dirty::InProgress)?;

        Ok(Self {
            tree,
            root,
            child1,
            child2,
            grandchild1_1,
            grandchild1_2,
        })
    }

    /// States in the order root, child1, child2, grandchild1_1, grandchild1_2.
    pub fn states(&self) -> Vec<Dirty> {
        self.all()
            .iter()
            .map(|&id| self.tree.dirty(id).expect("family nodes stay live"))
            .collect()
    }

    pub fn all(&self) -> [NodeId; 5] {
        [
            self.root,
            self.child1,
            self.child2,
            self.grandchild1_1,
            self.grandchild1_2,
        ]
    }
}

pub fn all_of(state: Dirty) -> Vec<Dirty> {
    vec![state; 5]
}
