//! Swept collision between two moving axis-aligned rectangles.
//!
//! Both rectangles translate linearly over one tick. The test works in A's
//! frame: B stands still and A moves by the relative velocity
//! `v = vel_a - vel_b`. The pair first meets at the smallest `t ∈ [0, 1]` for
//! which `v * t` lies in the Minkowski difference `B ⊖ A`, found with a
//! slab-by-slab ray cast. The slab entered last gives the contact normal.

use crate::collision::minkowski::{MinkowskiDifference, Slab};
use crate::collision::region::{Face, SweepRegion};
use crate::collision::result::CollisionResult;
use crate::error::{GeometryError, Result};
use crate::math::{Axis, Size2i, Vec2};
use crate::shapes::MovingRect;

/// Time and direction of first contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    /// Fraction of the tick, in [0, 1].
    pub time: f64,
    /// Face normal of B at the contact, seen from A.
    pub normal: Vec2,
}

/// Interval of ray parameters during which the spans overlap on one axis.
#[derive(Debug, Clone, Copy)]
struct Window {
    entry: f64,
    exit: f64,
}

impl Window {
    fn always() -> Self {
        Window {
            entry: f64::NEG_INFINITY,
            exit: f64::INFINITY,
        }
    }

    /// Overlap window for motion through `slab` at `speed`, entering via `face`.
    /// An axis without motion never divides: it overlaps for the whole tick or never.
    fn through(slab: Slab, face: Option<Face>, speed: f64) -> Option<Self> {
        match face {
            None => slab.contains_origin().then(Window::always),
            Some(Face::Min) => Some(Window {
                entry: slab.lo / speed,
                exit: slab.hi / speed,
            }),
            Some(Face::Max) => Some(Window {
                entry: slab.hi / speed,
                exit: slab.lo / speed,
            }),
        }
    }
}

/// Continuous collision test for pairs of moving rectangles.
///
/// Holds tuning only, so one collider can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SweptRectCollider {
    /// Entry times closer than this count as a simultaneous corner hit.
    pub tie_epsilon: f64,
}

impl SweptRectCollider {
    pub const DEFAULT_TIE_EPSILON: f64 = 1e-9;

    /// Creates a collider with the default settings.
    pub fn new() -> Self {
        Self {
            tie_epsilon: Self::DEFAULT_TIE_EPSILON,
        }
    }

    /// Creates a collider with a custom corner tie tolerance.
    pub fn with_tie_epsilon(tie_epsilon: f64) -> Result<Self> {
        if !tie_epsilon.is_finite() || tie_epsilon < 0.0 {
            return Err(GeometryError::InvalidTolerance(tie_epsilon));
        }
        Ok(Self { tie_epsilon })
    }

    /// Sweeps rectangle A (`pos_a`, `vel_a`, `size_a`) and rectangle B against
    /// each other over one tick. Velocities are whole-tick displacements.
    pub fn collide(
        &self,
        pos_a: Vec2,
        vel_a: Vec2,
        size_a: Size2i,
        pos_b: Vec2,
        vel_b: Vec2,
        size_b: Size2i,
    ) -> CollisionResult {
        self.collide_rects(
            &MovingRect::new(pos_a, vel_a, size_a),
            &MovingRect::new(pos_b, vel_b, size_b),
        )
    }

    /// Same as [`collide`](Self::collide), over [`MovingRect`] values.
    pub fn collide_rects(&self, a: &MovingRect, b: &MovingRect) -> CollisionResult {
        let diff = MinkowskiDifference::new(&a.rect_at(0.0), &b.rect_at(0.0));
        if diff.contains_origin() {
            log::trace!("rects at {:?} and {:?} overlap at rest", a.position, b.position);
            return CollisionResult::overlapping(a.position, b.position);
        }

        let v = a.velocity - b.velocity;
        let region = SweepRegion::classify(v);
        if region == SweepRegion::Static {
            log::trace!("no relative motion between {:?} and {:?}", a.position, b.position);
            return CollisionResult::miss();
        }
        if !SweepRegion::bounds(&diff, v).contains_point(Vec2::ZERO) {
            log::trace!("relative motion {:?} cannot reach {:?}", v, diff.aabb());
            return CollisionResult::miss();
        }

        match self.time_of_impact(&diff, v, region) {
            Some(impact) => {
                log::trace!("hit at t={} with normal {:?}", impact.time, impact.normal);
                CollisionResult {
                    collided: true,
                    contact1: a.position_at(impact.time),
                    contact2: b.position_at(impact.time),
                    normal: impact.normal,
                    time: impact.time,
                }
            }
            None => CollisionResult::miss(),
        }
    }

    /// First contact of a ray from the origin along `v` with `diff`, for a
    /// pair that does not already overlap. `region` must be the
    /// classification of `v`.
    ///
    /// The interiors must actually meet: grazing an edge or a corner is not
    /// a contact. A single instant of contact counts only if the pair
    /// overlaps at rest at that instant, as a point crossing an anchor does.
    pub fn time_of_impact(
        &self,
        diff: &MinkowskiDifference,
        v: Vec2,
        region: SweepRegion,
    ) -> Option<Impact> {
        let wx = Window::through(diff.x, region.entry_face(Axis::X), v.x)?;
        let wy = Window::through(diff.y, region.entry_face(Axis::Y), v.y)?;

        let entry = wx.entry.max(wy.entry);
        let exit = wx.exit.min(wy.exit);
        let meets = entry < exit || (entry == exit && diff.advanced(v * entry).contains_origin());
        if !meets || !(0.0..=1.0).contains(&entry) {
            log::trace!("ray {:?} misses: entry={} exit={}", v, entry, exit);
            return None;
        }

        let axis = self.entry_axis(wx.entry, wy.entry, v);
        Some(Impact {
            time: entry,
            normal: Vec2::axis_unit(axis, -region.direction(axis)),
        })
    }

    /// The axis whose slab is entered last. On a corner hit the axis with the
    /// faster relative motion wins, and x wins when the speeds match.
    fn entry_axis(&self, entry_x: f64, entry_y: f64, v: Vec2) -> Axis {
        if (entry_x - entry_y).abs() <= self.tie_epsilon {
            let axis = if v.y.abs() > v.x.abs() { Axis::Y } else { Axis::X };
            log::debug!("corner hit at t={}, resolving along {:?}", entry_x.max(entry_y), axis);
            axis
        } else if entry_x > entry_y {
            Axis::X
        } else {
            Axis::Y
        }
    }
}

impl Default for SweptRectCollider {
    fn default() -> Self {
        Self::new()
    }
}

/// Sweeps two rectangles against each other with the default collider.
pub fn collide(
    pos_a: Vec2,
    vel_a: Vec2,
    size_a: Size2i,
    pos_b: Vec2,
    vel_b: Vec2,
    size_b: Size2i,
) -> CollisionResult {
    SweptRectCollider::default().collide(pos_a, vel_a, size_a, pos_b, vel_b, size_b)
}
