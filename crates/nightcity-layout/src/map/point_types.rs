//! Grid and world coordinate types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a cell in grid coordinates.
///
/// Coordinates are signed so that footprints reaching past the grid edge can
/// be expressed and clipped.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridCell {
    /// Column index along the world x axis.
    pub x: i32,
    /// Row index along the world z axis.
    pub z: i32,
}

impl GridCell {
    /// Creates a new `GridCell`.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Maps the cell into world space for a grid of `grid_size` cells per side.
    ///
    /// The grid is centred on the world origin with one world unit per cell.
    #[must_use]
    pub fn to_world(self, grid_size: usize) -> WorldPoint {
        let start = -(grid_size as f32) / 2.0;
        WorldPoint::new(start + self.x as f32, start + self.z as f32)
    }
}

impl From<(i32, i32)> for GridCell {
    fn from((x, z): (i32, i32)) -> Self {
        Self { x, z }
    }
}

/// Represents a point on the ground plane in world units.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldPoint {
    /// The x-coordinate.
    pub x: f32,
    /// The z-coordinate.
    pub z: f32,
}

impl WorldPoint {
    /// Creates a new `WorldPoint`.
    #[must_use]
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_centre_maps_to_origin() {
        assert_eq!(GridCell::new(25, 25).to_world(50), WorldPoint::new(0.0, 0.0));
        assert_eq!(GridCell::new(0, 0).to_world(50), WorldPoint::new(-25.0, -25.0));
        assert_eq!(GridCell::new(33, 17).to_world(50), WorldPoint::new(8.0, -8.0));
        assert_eq!(GridCell::new(0, 99).to_world(100), WorldPoint::new(-50.0, 49.0));
    }
}
