#![allow(dead_code)]

use swept_collision::{Size2i, Vec2};

pub const EPSILON: f64 = 1e-9;

/// Routes `log` output through the test harness; `RUST_LOG=trace` shows the collider's decisions.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

pub fn s(w: u32, h: u32) -> Size2i {
    Size2i::new(w, h)
}
