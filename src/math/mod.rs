//! Wall-plane geometry

pub mod rect;

pub use rect::{Rect, to_3d, EXTENT_EPSILON};
