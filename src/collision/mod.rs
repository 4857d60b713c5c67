pub mod aabb;
pub mod minkowski;
pub mod region;
pub mod response;
pub mod result;
pub mod swept;

// Re-export key types
pub use aabb::AABB;
pub use minkowski::{MinkowskiDifference, Slab};
pub use region::{Face, SweepRegion};
pub use response::{clip_velocity, remaining_displacement, resolve, Body};
pub use result::CollisionResult;
pub use swept::{collide, Impact, SweptRectCollider};
