use crate::collision::minkowski::MinkowskiDifference;
use crate::math::{Size2i, Vec2};

/// An axis-aligned rectangle anchored at its top-left corner.
///
/// On each axis the rectangle covers the half-open span `[pos, pos + extent)`.
/// A zero extent collapses that span to its anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub position: Vec2,
    pub size: Size2i,
}

impl Rect {
    pub fn new(position: Vec2, size: Size2i) -> Self {
        Self { position, size }
    }

    /// Checks whether two rectangles overlap. Shared edges are not an overlap;
    /// coincident anchors always are, even for zero-size rectangles.
    pub fn overlaps(&self, other: &Rect) -> bool {
        MinkowskiDifference::new(self, other).contains_origin()
    }
}

/// A rectangle's state for one tick: where it starts, how far it moves, how big it is.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovingRect {
    /// Start-of-tick anchor.
    pub position: Vec2,
    /// Total displacement over the tick.
    pub velocity: Vec2,
    pub size: Size2i,
}

impl MovingRect {
    pub fn new(position: Vec2, velocity: Vec2, size: Size2i) -> Self {
        Self { position, velocity, size }
    }

    /// A rectangle that does not move this tick.
    pub fn stationary(position: Vec2, size: Size2i) -> Self {
        Self::new(position, Vec2::ZERO, size)
    }

    /// Anchor after travelling the fraction `t` of this tick.
    pub fn position_at(&self, t: f64) -> Vec2 {
        self.position + self.velocity * t
    }

    /// The rectangle at the fraction `t` of this tick.
    pub fn rect_at(&self, t: f64) -> Rect {
        Rect::new(self.position_at(t), self.size)
    }
}
