//! Applying a sweep result to a moving rectangle.
//!
//! A movement system stops each rectangle where it first touched the other
//! one and drops the part of its motion that pushes into the contact face,
//! keeping the part that slides along it.

use crate::collision::result::CollisionResult;
use crate::math::vec2::Vec2;
use crate::shapes::MovingRect;

/// Which side of a [`CollisionResult`] a rectangle was passed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    A,
    B,
}

/// Removes the component of `velocity` along `normal`.
///
/// `normal` is axis-aligned and of unit length or zero, so the projection
/// needs no normalization.
pub fn clip_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - normal * velocity.dot(normal)
}

/// State of `rect` after applying `result`.
///
/// - miss: the rectangle travels its full displacement, velocity unchanged;
/// - hit: the rectangle is clamped to its contact anchor and the velocity
///   component along the normal is zeroed;
/// - overlapping at rest: nothing is known about the contact face, so the
///   rectangle stays at its start with its velocity unchanged.
pub fn resolve(rect: &MovingRect, result: &CollisionResult, body: Body) -> MovingRect {
    if !result.collided {
        return MovingRect::new(rect.position_at(1.0), rect.velocity, rect.size);
    }
    if result.started_overlapping() {
        return *rect;
    }
    let contact = match body {
        Body::A => result.contact1,
        Body::B => result.contact2,
    };
    MovingRect::new(contact, clip_velocity(rect.velocity, result.normal), rect.size)
}

/// Displacement `rect` still has to cover this tick after stopping at the
/// contact and sliding along the contact face. Zero on a miss, since the
/// whole displacement was already used.
pub fn remaining_displacement(rect: &MovingRect, result: &CollisionResult) -> Vec2 {
    if !result.collided {
        return Vec2::ZERO;
    }
    clip_velocity(rect.velocity, result.normal) * (1.0 - result.time)
}
