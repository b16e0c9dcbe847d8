pub mod color;
pub mod geometry;

pub use color::Color;
pub use geometry::{mm_to_pt, pt_to_mm, Point, Rect, Size, MM_TO_PT};
