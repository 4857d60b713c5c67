//! Minkowski difference of two axis-aligned rectangles.
//!
//! For rectangles A and B the difference `B ⊖ A` is the set of offsets
//! `b - a` over all points `a ∈ A`, `b ∈ B`. It is itself an axis-aligned
//! rectangle, and A and B overlap exactly when it contains the origin. When A
//! moves by `v` relative to B, the pair meets at the first `t` for which the
//! point `v * t` lies in the difference.
//!
//! Every coordinate is measured from A's anchor, so swapping A and B negates
//! the difference bit-for-bit.

use crate::collision::aabb::AABB;
use crate::math::{Axis, Vec2};
use crate::shapes::Rect;

/// The difference rectangle projected on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slab {
    /// Offset of B's anchor from A's anchor.
    pub anchor: f64,
    /// `anchor - extent(A)`.
    pub lo: f64,
    /// `anchor + extent(B)`.
    pub hi: f64,
}

impl Slab {
    /// Projects `b ⊖ a` on `axis`.
    pub fn between(a: &Rect, b: &Rect, axis: Axis) -> Self {
        let anchor = b.position.get(axis) - a.position.get(axis);
        Slab {
            anchor,
            lo: anchor - a.size.extent(axis),
            hi: anchor + b.size.extent(axis),
        }
    }

    /// Whether the two spans overlap at rest. The open interior counts, the
    /// boundary does not, except that coincident anchors always overlap so
    /// zero-extent spans can still meet.
    pub fn contains_origin(&self) -> bool {
        self.anchor == 0.0 || (self.lo < 0.0 && 0.0 < self.hi)
    }

    /// The slab after A has moved `distance` along the axis relative to B.
    pub fn advanced(&self, distance: f64) -> Self {
        Slab {
            anchor: self.anchor - distance,
            lo: self.lo - distance,
            hi: self.hi - distance,
        }
    }
}

/// `B ⊖ A` as a pair of slabs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinkowskiDifference {
    pub x: Slab,
    pub y: Slab,
}

impl MinkowskiDifference {
    pub fn new(a: &Rect, b: &Rect) -> Self {
        MinkowskiDifference {
            x: Slab::between(a, b, Axis::X),
            y: Slab::between(a, b, Axis::Y),
        }
    }

    /// The difference after A has moved by `offset` relative to B.
    pub fn advanced(&self, offset: Vec2) -> Self {
        MinkowskiDifference {
            x: self.x.advanced(offset.x),
            y: self.y.advanced(offset.y),
        }
    }

    /// Whether A and B overlap at rest.
    pub fn contains_origin(&self) -> bool {
        self.x.contains_origin() && self.y.contains_origin()
    }

    /// The closed difference rectangle.
    pub fn aabb(&self) -> AABB {
        AABB::new(Vec2::new(self.x.lo, self.y.lo), Vec2::new(self.x.hi, self.y.hi))
    }
}
