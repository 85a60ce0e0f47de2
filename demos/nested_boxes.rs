//! Builds a small page of nested boxes, lays it out with a block stacker and
//! prints every node's rectangles in page coordinates.
//!
//! Run with: RUST_LOG=debug cargo run --example nested_boxes

use trellis::{Arrange, BoxArea, BoxTree, Edges, LayoutError, NodeId, Offset, PassOutcome, Size};

const PAGE_WIDTH: f32 = 200.0;

/// Stacks children top to bottom, each as wide as its parent's content box.
struct Stack;

impl Stack {
    fn place(tree: &mut BoxTree, node: NodeId, width: f32) -> Result<(), LayoutError> {
        let hints = *tree.intrinsic(node)?;
        let spacing = {
            let layout = tree.layout(node)?;
            layout.margin_box_width() - layout.content_width()
        };
        let inner = (width - spacing).max(0.0);

        let mut cursor = 0.0;
        let children = tree.children(node)?.to_vec();
        for child in children {
            tree.layout_mut(child)?.set_origin_top(cursor);
            Self::place(tree, child, inner)?;
            cursor += tree.layout(child)?.margin_box_height();
        }

        let mut layout = tree.layout_mut(node)?;
        layout.set_content_size(Size::new(inner, hints.height().unwrap_or(cursor)));
        layout.inset_content();
        Ok(())
    }
}

impl Arrange for Stack {
    fn arrange(&mut self, tree: &mut BoxTree, node: NodeId) -> Result<(), LayoutError> {
        Self::place(tree, node, PAGE_WIDTH)
    }
}

fn print_tree(tree: &BoxTree, root: NodeId) -> Result<(), LayoutError> {
    for id in tree.descendants(root)? {
        let depth = tree.ancestors(id)?.count();
        let geometry = tree.geometry(id)?;
        let border = geometry.absolute_rect(BoxArea::Border);
        let content = geometry.absolute_rect(BoxArea::Content);
        println!(
            "{:indent$}{} border ({}, {}) {}x{}, content ({}, {}) {}x{} [{}]",
            "",
            id,
            border.x,
            border.y,
            border.width,
            border.height,
            content.x,
            content.y,
            content.width,
            content.height,
            tree.dirty(id)?.as_str(),
            indent = depth * 2
        );
    }
    Ok(())
}

fn main() -> Result<(), LayoutError> {
    env_logger::init();

    let mut tree = BoxTree::new();
    let page = tree.new_node();
    let header = tree.new_node();
    let body = tree.new_node();
    let para1 = tree.new_node();
    let para2 = tree.new_node();
    tree.set_children(page, vec![header, body])?;
    tree.set_children(body, vec![para1, para2])?;

    tree.layout_mut(page)?.set_origin(Offset::new(20.0, 20.0));
    tree.layout_mut(page)?.set_padding(Edges::all(10.0));
    tree.layout_mut(header)?.set_border(Edges::y(1.0));
    tree.layout_mut(body)?.set_margin(Edges::new(8.0, 0.0, 0.0, 0.0));
    for para in [para1, para2] {
        tree.layout_mut(para)?.set_padding(Edges::x(4.0));
        tree.layout_mut(para)?.set_margin(Edges::y(2.0));
    }
    tree.intrinsic_mut(header)?.set_height(Some(24.0));
    tree.intrinsic_mut(para1)?.set_height(Some(36.0));
    tree.intrinsic_mut(para2)?.set_height(Some(48.0));

    let outcome = tree.run_pass(page, &mut Stack)?;
    log::info!("First pass: {:?}", outcome);
    print_tree(&tree, page)?;

    // Growing one paragraph only touches that paragraph.
    tree.intrinsic_mut(para1)?.set_height(Some(60.0));
    log::info!("Grew {} to 60pt", para1);
    println!("\nAfter growing {}:", para1);
    print_tree(&tree, page)?;

    if let PassOutcome::Completed { nodes } = tree.run_pass(page, &mut Stack)? {
        println!("\nSecond pass settled {} node(s):", nodes);
    }
    print_tree(&tree, page)?;
    Ok(())
}
