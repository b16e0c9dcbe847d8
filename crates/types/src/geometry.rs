//! Point-based geometry shared by the layout and document crates.
//!
//! All values are PDF points (1/72 inch) with the origin at the top-left of the
//! media rectangle and `y` growing downwards.

use serde::{Deserialize, Serialize};

/// Millimetres to points.
pub const MM_TO_PT: f32 = 72.0 / 25.4;

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * MM_TO_PT
}

pub fn pt_to_mm(pt: f32) -> f32 {
    pt / MM_TO_PT
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Shrinks the rect by `amount` on every side. Never yields a negative size.
    pub fn inset(&self, amount: f32) -> Self {
        let width = (self.width - 2.0 * amount).max(0.0);
        let height = (self.height - 2.0 * amount).max(0.0);
        Self::new(self.x + amount, self.y + amount, width, height)
    }

    pub fn contains(&self, other: &Rect) -> bool {
        const EPSILON: f32 = 0.01;
        other.x + EPSILON >= self.x
            && other.y + EPSILON >= self.y
            && other.max_x() <= self.max_x() + EPSILON
            && other.max_y() <= self.max_y() + EPSILON
    }

    /// Snaps every edge to the nearest whole millimetre.
    pub fn to_nearest_mm(&self) -> Self {
        let snap = |v: f32| mm_to_pt(pt_to_mm(v).round());
        let x = snap(self.x);
        let y = snap(self.y);
        Self::new(x, y, snap(self.max_x()) - x, snap(self.max_y()) - y)
    }
}
