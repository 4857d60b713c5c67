use crate::error::{GeometryError, Result};
use crate::math::vec2::Axis;

/// Integer width and height of an axis-aligned rectangle.
///
/// Extents are unsigned, so a size can never be negative once built. A zero
/// extent is allowed and turns the rectangle into a line or a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size2i {
    pub width: u32,
    pub height: u32,
}

impl Size2i {
    pub const ZERO: Size2i = Size2i { width: 0, height: 0 };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Builds a size from signed components, rejecting negative ones.
    pub fn try_new(width: i32, height: i32) -> Result<Self> {
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(width), Ok(height)) => Ok(Self { width, height }),
            _ => Err(GeometryError::NegativeExtent { width, height }),
        }
    }

    /// Extent along `axis`, as a float for mixing with positions.
    pub fn extent(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => f64::from(self.width),
            Axis::Y => f64::from(self.height),
        }
    }
}

impl TryFrom<(i32, i32)> for Size2i {
    type Error = GeometryError;

    fn try_from((width, height): (i32, i32)) -> Result<Self> {
        Self::try_new(width, height)
    }
}
