mod common;

use common::{init_logging, v};
use proptest::prelude::*;
use swept_collision::{collide, CollisionResult, Rect, Size2i, Vec2};

const TOLERANCE: f64 = 1e-6;

fn coord() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

fn grid() -> impl Strategy<Value = f64> {
    (-100i32..100).prop_map(f64::from)
}

fn velocity() -> impl Strategy<Value = Vec2> {
    (-50.0..50.0f64, -50.0..50.0f64).prop_map(|(x, y)| v(x, y))
}

fn size() -> impl Strategy<Value = Size2i> {
    (0u32..8, 0u32..8).prop_map(|(w, h)| Size2i::new(w, h))
}

/// Gap between the contact rectangles along the normal's axis.
fn contact_gap(r: &CollisionResult, size_a: Size2i, size_b: Size2i) -> f64 {
    let (c1, c2, n) = (r.contact1, r.contact2, r.normal);
    if n.x < 0.0 {
        c2.x - (c1.x + f64::from(size_a.width))
    } else if n.x > 0.0 {
        c1.x - (c2.x + f64::from(size_b.width))
    } else if n.y < 0.0 {
        c2.y - (c1.y + f64::from(size_a.height))
    } else {
        c1.y - (c2.y + f64::from(size_b.height))
    }
}

proptest! {
    /// Rectangles sharing an anchor always collide at the start of the tick.
    #[test]
    fn same_position_always_collides(
        x in coord(), y in coord(),
        vel_a in velocity(), vel_b in velocity(),
        size_a in size(), size_b in size()
    ) {
        init_logging();
        let pos = v(x, y);
        let r = collide(pos, vel_a, size_a, pos, vel_b, size_b);
        prop_assert!(r.collided);
        prop_assert_eq!(r.contact1, pos);
        prop_assert_eq!(r.contact2, pos);
        prop_assert_eq!(r.normal, Vec2::ZERO);
    }

    /// Apart and motionless means no collision.
    #[test]
    fn still_and_apart_never_collides(
        ax in coord(), ay in coord(), bx in coord(), by in coord(),
        size_a in size(), size_b in size()
    ) {
        let (a, b) = (v(ax, ay), v(bx, by));
        prop_assume!(!Rect::new(a, size_a).overlaps(&Rect::new(b, size_b)));
        let r = collide(a, Vec2::ZERO, size_a, b, Vec2::ZERO, size_b);
        prop_assert!(!r.collided);
    }

    /// Only relative motion matters: swapping the rectangles swaps the
    /// contacts and flips the normal.
    #[test]
    fn swapping_rects_mirrors_result(
        ax in coord(), ay in coord(), bx in coord(), by in coord(),
        vel_a in velocity(), vel_b in velocity(),
        size_a in size(), size_b in size()
    ) {
        let ab = collide(v(ax, ay), vel_a, size_a, v(bx, by), vel_b, size_b);
        let ba = collide(v(bx, by), vel_b, size_b, v(ax, ay), vel_a, size_a);
        prop_assert_eq!(ab.collided, ba.collided);
        if ab.collided {
            let mirrored = ba.swapped();
            prop_assert!((ab.time - mirrored.time).abs() < TOLERANCE);
            prop_assert!(ab.contact1.approx_eq(mirrored.contact1, TOLERANCE));
            prop_assert!(ab.contact2.approx_eq(mirrored.contact2, TOLERANCE));
            prop_assert_eq!(ab.normal, mirrored.normal);
        }
    }

    /// Contacts from a sweep leave the rectangles flush along the normal.
    #[test]
    fn sweep_contacts_touch(
        ax in coord(), ay in coord(),
        vel_a in velocity(), vel_b in velocity(),
        along in 0.0..1.0f64, jx in -4.0..4.0f64, jy in -4.0..4.0f64,
        size_a in size(), size_b in size()
    ) {
        // Put B close to where A will be part way through the tick, so most
        // cases produce a hit.
        let a = v(ax, ay);
        let b = a + (vel_a - vel_b) * along + v(jx, jy);
        let r = collide(a, vel_a, size_a, b, vel_b, size_b);
        if r.collided && !r.started_overlapping() {
            prop_assert!((0.0..=1.0).contains(&r.time));
            prop_assert!(r.normal.x == 0.0 || r.normal.y == 0.0);
            prop_assert_eq!(r.normal.abs().x + r.normal.abs().y, 1.0);
            prop_assert!(contact_gap(&r, size_a, size_b).abs() < TOLERANCE);
        }
    }

    /// Widening the gap along the direction of travel never brings the hit earlier.
    #[test]
    fn wider_gap_never_hits_sooner(
        speed in 0.5..60.0f64,
        gap in 0.0..50.0f64, extra in 0.0..20.0f64,
        dy in -3.0..3.0f64,
        size_a in size(), size_b in size()
    ) {
        let a = Vec2::ZERO;
        let vel = v(speed, 0.0);
        let near_b = v(f64::from(size_a.width) + gap, dy);
        let far_b = v(near_b.x + extra, dy);

        let near = collide(a, vel, size_a, near_b, Vec2::ZERO, size_b);
        let far = collide(a, vel, size_a, far_b, Vec2::ZERO, size_b);
        if far.collided {
            prop_assert!(near.collided);
            prop_assert!(near.time <= far.time + TOLERANCE);
        }
    }

    /// Translating both rectangles shifts the contacts and nothing else.
    #[test]
    fn translation_only_shifts_contacts(
        ax in grid(), ay in grid(), bx in grid(), by in grid(),
        ox in grid(), oy in grid(),
        vel_a in velocity(), vel_b in velocity(),
        size_a in size(), size_b in size()
    ) {
        let offset = v(ox, oy);
        let (a, b) = (v(ax, ay), v(bx, by));
        let base = collide(a, vel_a, size_a, b, vel_b, size_b);
        let moved = collide(a + offset, vel_a, size_a, b + offset, vel_b, size_b);

        prop_assert_eq!(base.collided, moved.collided);
        if base.collided {
            prop_assert!((base.time - moved.time).abs() < TOLERANCE);
            prop_assert_eq!(base.normal, moved.normal);
            prop_assert!((base.contact1 + offset).approx_eq(moved.contact1, TOLERANCE));
            prop_assert!((base.contact2 + offset).approx_eq(moved.contact2, TOLERANCE));
        }
    }

    /// Points swept at rectangles always give a definite answer.
    #[test]
    fn point_sweeps_are_total(
        ax in coord(), ay in coord(), bx in coord(), by in coord(),
        vel_a in velocity(), vel_b in velocity(),
        size_b in size()
    ) {
        let r = collide(v(ax, ay), vel_a, Size2i::ZERO, v(bx, by), vel_b, size_b);
        if r.collided {
            prop_assert!(r.time.is_finite());
            prop_assert!(r.contact1.x.is_finite() && r.contact1.y.is_finite());
        } else {
            prop_assert_eq!(r, CollisionResult::miss());
        }
    }
}
