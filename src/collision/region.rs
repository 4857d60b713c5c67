//! Shape of the region swept by the Minkowski difference over one tick.
//!
//! Sweeping the difference rectangle backwards along the relative velocity
//! `v` covers the set of start offsets from which the pair meets during the
//! tick. With `v` diagonal that set is a hexagon, with `v` along one axis it
//! is a stretched rectangle, and with no motion it is the difference itself.
//! The sign pattern of `v` is all that decides which faces of the difference
//! can be entered first, so the region is kept as a tag over that pattern.

use crate::collision::aabb::AABB;
use crate::collision::minkowski::MinkowskiDifference;
use crate::math::{Axis, Vec2};

/// Which face of a slab the relative motion enters through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// The `lo` side, reached while moving towards positive coordinates.
    Min,
    /// The `hi` side, reached while moving towards negative coordinates.
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepRegion {
    /// No relative motion.
    Static,
    /// Motion along a single axis; `sign` is +1.0 or -1.0.
    Rect { axis: Axis, sign: f64 },
    /// Motion with both components non-zero.
    Hex { sign_x: f64, sign_y: f64 },
}

impl SweepRegion {
    /// Classifies the relative velocity `v` of A with respect to B.
    pub fn classify(v: Vec2) -> Self {
        let (sign_x, sign_y) = (sign_of(v.x), sign_of(v.y));
        if sign_x == 0.0 && sign_y == 0.0 {
            SweepRegion::Static
        } else if sign_y == 0.0 {
            SweepRegion::Rect { axis: Axis::X, sign: sign_x }
        } else if sign_x == 0.0 {
            SweepRegion::Rect { axis: Axis::Y, sign: sign_y }
        } else {
            SweepRegion::Hex { sign_x, sign_y }
        }
    }

    /// Direction of motion along `axis`: -1.0, 0.0 or 1.0.
    pub fn direction(&self, axis: Axis) -> f64 {
        match (*self, axis) {
            (SweepRegion::Static, _) => 0.0,
            (SweepRegion::Rect { axis: moving, sign }, _) if moving == axis => sign,
            (SweepRegion::Rect { .. }, _) => 0.0,
            (SweepRegion::Hex { sign_x, .. }, Axis::X) => sign_x,
            (SweepRegion::Hex { sign_y, .. }, Axis::Y) => sign_y,
        }
    }

    /// The face entered along `axis`, or `None` if there is no motion on it.
    pub fn entry_face(&self, axis: Axis) -> Option<Face> {
        let direction = self.direction(axis);
        if direction > 0.0 {
            Some(Face::Min)
        } else if direction < 0.0 {
            Some(Face::Max)
        } else {
            None
        }
    }

    /// Bounding box of the swept region: the difference at the start of the
    /// tick merged with the difference shifted back by `v`. The pair can only
    /// meet if this box contains the origin.
    pub fn bounds(diff: &MinkowskiDifference, v: Vec2) -> AABB {
        let start = diff.aabb();
        let mut bounds = start;
        bounds.merge(&start.translated(-v));
        bounds
    }
}

fn sign_of(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
