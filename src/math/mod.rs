pub mod size2i;
pub mod vec2;

pub use size2i::Size2i;
pub use vec2::{Axis, Vec2};
