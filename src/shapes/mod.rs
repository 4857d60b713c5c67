pub mod rect;

pub use rect::{MovingRect, Rect};
