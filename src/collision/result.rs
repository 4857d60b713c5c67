use crate::math::vec2::Vec2;

/// Outcome of sweeping two rectangles through one tick.
///
/// Only `collided` is meaningful on a miss; the other fields are zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionResult {
    pub collided: bool,
    /// Anchor of rectangle A at first contact.
    pub contact1: Vec2,
    /// Anchor of rectangle B at first contact.
    pub contact2: Vec2,
    /// Face normal of B that A runs into, axis-aligned with one component ±1.
    /// Zero when the rectangles already overlapped at the start of the tick.
    pub normal: Vec2,
    /// Fraction of the tick elapsed at first contact, in [0, 1].
    pub time: f64,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self::default()
    }

    /// The rectangles overlapped before moving.
    pub fn overlapping(pos_a: Vec2, pos_b: Vec2) -> Self {
        CollisionResult {
            collided: true,
            contact1: pos_a,
            contact2: pos_b,
            normal: Vec2::ZERO,
            time: 0.0,
        }
    }

    /// True for a hit that started out overlapping, where no normal exists.
    pub fn started_overlapping(&self) -> bool {
        self.collided && self.normal.is_zero()
    }

    /// The same result seen from B's side: contacts exchanged, normal reversed.
    pub fn swapped(&self) -> Self {
        CollisionResult {
            collided: self.collided,
            contact1: self.contact2,
            contact2: self.contact1,
            normal: -self.normal,
            time: self.time,
        }
    }
}
