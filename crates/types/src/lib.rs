pub mod geometry;

pub use geometry::{BoxRects, Edges, Offset, Rect, Side, Size};
