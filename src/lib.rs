//! Swept (continuous) collision detection between two moving axis-aligned
//! rectangles.
//!
//! Each rectangle is given by its start-of-tick position, its displacement
//! over the tick and an integer size. [`collide`] reports whether the pair
//! meets during the tick, where both rectangles are at first contact, and
//! the contact normal.
//!
//! ```
//! use swept_collision::{collide, Size2i, Vec2};
//!
//! let result = collide(
//!     Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Size2i::new(2, 2),
//!     Vec2::new(5.0, 0.0), Vec2::ZERO, Size2i::new(2, 2),
//! );
//! assert!(result.collided);
//! assert_eq!(result.normal, Vec2::new(-1.0, 0.0));
//! ```

pub mod collision;
pub mod error;
pub mod math;
pub mod shapes;

// Re-export key types for easier use
pub use collision::{collide, CollisionResult, SweptRectCollider};
pub use error::{GeometryError, Result};
pub use math::{Axis, Size2i, Vec2};
pub use shapes::{MovingRect, Rect};
