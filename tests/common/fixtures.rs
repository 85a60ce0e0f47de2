use trellis::{BoxTree, Edges, LayoutError, NodeId, Offset, Size};

/// A 100x60 root with margin 5, border 1 and padding 2 on every side, holding a
/// 20x10 child placed at (3, 4) with 1pt of horizontal padding.
pub struct Card {
    pub tree: BoxTree,
    pub root: NodeId,
    pub child: NodeId,
}

pub fn card() -> Result<Card, LayoutError> {
    let mut tree = BoxTree::new();
    let root = tree.new_node();
    let child = tree.new_node();
    tree.append_child(root, child)?;

    let mut layout = tree.layout_mut(root)?;
    layout.set_content_size(Size::new(100.0, 60.0));
    layout.set_margin(Edges::all(5.0));
    layout.set_border(Edges::all(1.0));
    layout.set_padding(Edges::all(2.0));
    layout.inset_content();

    let mut layout = tree.layout_mut(child)?;
    layout.set_origin(Offset::new(3.0, 4.0));
    layout.set_content_size(Size::new(20.0, 10.0));
    layout.set_padding(Edges::x(1.0));
    layout.inset_content();

    Ok(Card { tree, root, child })
}

/// A chain of `depth + 1` nodes, each the only child of the previous one.
/// Every node is offset by 1pt down and 2pt right inside its parent.
pub fn chain(tree: &mut BoxTree, depth: usize) -> Result<Vec<NodeId>, LayoutError> {
    let mut nodes = vec![tree.new_node()];
    for _ in 0..depth {
        let next = tree.new_node();
        if let Some(&tip) = nodes.last() {
            tree.append_child(tip, next)?;
        }
        tree.layout_mut(next)?.set_origin(Offset::new(1.0, 2.0));
        nodes.push(next);
    }
    Ok(nodes)
}
