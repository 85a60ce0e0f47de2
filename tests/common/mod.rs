pub mod fixtures;

use trellis::{BoxTree, Dirty, NodeId};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Dirty state of each node, in the order given.
pub fn states(tree: &BoxTree, nodes: &[NodeId]) -> Result<Vec<Dirty>, trellis::LayoutError> {
    nodes.iter().map(|&id| tree.dirty(id)).collect()
}

/// Marks every tree rooted at one of `roots` clean, as if a pass had just finished.
pub fn settle(tree: &mut BoxTree, roots: &[NodeId]) -> Result<(), trellis::LayoutError> {
    for &root in roots {
        tree.set_subtree_dirty(root, Dirty::Clean)?;
    }
    Ok(())
}
