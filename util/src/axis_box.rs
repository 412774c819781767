use std::ops::{Add, Sub};

use glam::{dvec2, DVec2};

/// Axis-aligned rectangle on the plane.
///
/// `p0` is the top-left corner (smallest coordinates, y grows downwards) and
/// `p1` the bottom-right one. Zero-sized rectangles are valid and collapse
/// to a line or a point.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct Rect {
    pub p0: DVec2,
    pub p1: DVec2,
}

impl Rect {
    /// Create a new rectangle. If p1 has components that are smaller than
    /// p0's, the corresponding extent is clamped to zero.
    pub fn new(p0: impl Into<DVec2>, p1: impl Into<DVec2>) -> Self {
        let (p0, p1) = (p0.into(), p1.into());
        Rect { p0, p1: p0.max(p1) }
    }

    /// Create a rectangle from its top-left corner and its dimensions.
    pub fn sized(pos: impl Into<DVec2>, dim: impl Into<DVec2>) -> Self {
        let pos = pos.into();
        Rect::new(pos, pos + dim.into())
    }

    pub fn min(&self) -> DVec2 {
        self.p0
    }

    pub fn max(&self) -> DVec2 {
        self.p1
    }

    /// Corner points in fixed order: top-left, top-right, bottom-right,
    /// bottom-left.
    pub fn corners(&self) -> [DVec2; 4] {
        [
            self.p0,
            dvec2(self.p1.x, self.p0.y),
            self.p1,
            dvec2(self.p0.x, self.p1.y),
        ]
    }

    /// Reflect the rectangle over the vertical line at `x`.
    pub fn mirror_x(&self, x: f64) -> Self {
        Rect::new(
            dvec2(2.0 * x - self.p1.x, self.p0.y),
            dvec2(2.0 * x - self.p0.x, self.p1.y),
        )
    }
}

impl Add<DVec2> for Rect {
    type Output = Rect;

    fn add(self, rhs: DVec2) -> Self::Output {
        Rect {
            p0: self.p0 + rhs,
            p1: self.p1 + rhs,
        }
    }
}

impl Sub<DVec2> for Rect {
    type Output = Rect;

    fn sub(self, rhs: DVec2) -> Self::Output {
        Rect {
            p0: self.p0 - rhs,
            p1: self.p1 - rhs,
        }
    }
}
