//! Occupancy mask for collision avoidance during placement.

#![warn(missing_docs)]

use crate::error::LayoutError;
use super::GridCell;

/// A square boolean mask recording which cells are reserved by placed features.
///
/// Reservations are monotonic: once a cell is reserved it stays reserved for
/// the life of the grid. Out-of-bounds cells read as occupied and are
/// silently skipped on reservation.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyGrid {
    /// Cells per side
    size: usize,
    /// Row-major occupancy flags, `true` = reserved
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Creates an all-free grid with `size` cells per side.
    ///
    /// # Returns
    /// * `Result<Self, LayoutError>` - The grid, or an error if `size` is zero or too large
    pub fn new(size: usize) -> Result<Self, LayoutError> {
        if size == 0 {
            return Err(LayoutError::InvalidDimensions("Grid size must be non-zero"));
        }
        // Coordinates are i32, so every cell must be addressable as one.
        if size > i32::MAX as usize || size.checked_mul(size).is_none() {
            return Err(LayoutError::InvalidDimensions("Grid size too large"));
        }

        Ok(OccupancyGrid {
            size,
            cells: vec![false; size * size],
        })
    }

    /// Cells per side.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, x: i32, z: i32) -> Option<usize> {
        let n = self.size as i32;
        if (0..n).contains(&x) && (0..n).contains(&z) {
            Some(z as usize * self.size + x as usize)
        } else {
            None
        }
    }

    /// Iterates over the square of side `size` centred on `(x, z)`.
    ///
    /// The half-width is `size / 2`, so even sizes round down to the next odd
    /// footprint: a size of 4 covers 5x5 cells and a size of 0 covers one.
    fn footprint(x: i32, z: i32, size: u32) -> impl Iterator<Item = (i32, i32)> {
        let half = (size / 2) as i32;
        (x - half..=x + half).flat_map(move |i| (z - half..=z + half).map(move |j| (i, j)))
    }

    /// Returns whether a single cell is inside the grid and reserved.
    ///
    /// Out-of-bounds cells report `false` here; use [`Self::is_free`] for the
    /// fail-closed placement check.
    pub fn is_reserved(&self, cell: GridCell) -> bool {
        self.index(cell.x, cell.z).is_some_and(|i| self.cells[i])
    }

    /// Checks whether the square footprint of side `size` centred on `(x, z)` can be placed.
    ///
    /// # Returns
    /// * `bool` - `true` only if every cell is within bounds and currently free
    pub fn is_free(&self, x: i32, z: i32, size: u32) -> bool {
        Self::footprint(x, z, size).all(|(i, j)| match self.index(i, j) {
            Some(idx) => !self.cells[idx],
            None => false,
        })
    }

    /// Single-cell form of [`Self::is_free`].
    pub fn is_cell_free(&self, cell: GridCell) -> bool {
        self.is_free(cell.x, cell.z, 1)
    }

    /// Reserves every in-bounds cell of the square footprint of side `size` centred on `(x, z)`.
    ///
    /// Cells that fall outside the grid are clipped.
    pub fn reserve(&mut self, x: i32, z: i32, size: u32) {
        for (i, j) in Self::footprint(x, z, size) {
            if let Some(idx) = self.index(i, j) {
                self.cells[idx] = true;
            }
        }
    }

    /// Single-cell form of [`Self::reserve`].
    pub fn reserve_cell(&mut self, cell: GridCell) {
        self.reserve(cell.x, cell.z, 1);
    }

    /// Reserves the filled disk of cells with `dx² + dz² <= radius²` around `(cx, cz)`.
    ///
    /// The bounding box is clipped to the grid first, so a disk hanging over
    /// the edge only reserves its in-bounds part.
    pub fn reserve_disk(&mut self, cx: i32, cz: i32, radius: i32) {
        let n = self.size as i32;
        let r = radius.max(0);
        for i in (cx - r).max(0)..=(cx + r).min(n - 1) {
            for j in (cz - r).max(0)..=(cz + r).min(n - 1) {
                let (dx, dz) = (i - cx, j - cz);
                if dx * dx + dz * dz <= r * r {
                    if let Some(idx) = self.index(i, j) {
                        self.cells[idx] = true;
                    }
                }
            }
        }
    }

    /// Number of reserved cells.
    pub fn reserved_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl std::fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "OccupancyGrid ({}x{}, {} reserved)", self.size, self.size, self.reserved_count())?;
        for z in 0..self.size {
            for x in 0..self.size {
                let c = if self.cells[z * self.size + x] { '#' } else { '.' };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = OccupancyGrid::new(50).unwrap();
        assert_eq!(grid.size(), 50);
        assert_eq!(grid.reserved_count(), 0);
        assert!(grid.is_free(25, 25, 5));
    }

    #[test]
    fn test_invalid_creation() {
        assert!(matches!(OccupancyGrid::new(0), Err(LayoutError::InvalidDimensions(_))));
    }

    #[test]
    fn test_footprint_sizes() {
        let mut grid = OccupancyGrid::new(20).unwrap();
        grid.reserve(10, 10, 5);
        assert_eq!(grid.reserved_count(), 25);

        let mut grid = OccupancyGrid::new(20).unwrap();
        grid.reserve(10, 10, 1);
        assert_eq!(grid.reserved_count(), 1);
        assert!(grid.is_reserved(GridCell::new(10, 10)));

        // Even sizes widen to the next odd square.
        let mut grid = OccupancyGrid::new(20).unwrap();
        grid.reserve(10, 10, 4);
        assert_eq!(grid.reserved_count(), 25);
    }

    #[test]
    fn test_reserve_then_not_free() {
        let mut grid = OccupancyGrid::new(30).unwrap();
        grid.reserve(10, 10, 3);
        assert!(!grid.is_free(10, 10, 3));
        assert!(!grid.is_cell_free(GridCell::new(11, 11)));
        // Overlaps one reserved corner cell.
        assert!(!grid.is_free(13, 13, 5));
        // Just clear of the footprint.
        assert!(grid.is_free(14, 14, 5));
        assert!(grid.is_cell_free(GridCell::new(12, 10)));
    }

    #[test]
    fn test_reserve_is_idempotent() {
        let mut once = OccupancyGrid::new(25).unwrap();
        once.reserve(7, 9, 5);
        let mut twice = once.clone();
        twice.reserve(7, 9, 5);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_out_of_bounds_fails_closed() {
        let grid = OccupancyGrid::new(10).unwrap();
        assert!(!grid.is_free(0, 5, 3));
        assert!(!grid.is_free(9, 5, 3));
        assert!(!grid.is_free(-1, 5, 1));
        assert!(!grid.is_free(5, 10, 1));
        assert!(grid.is_free(1, 1, 3));
        assert!(!grid.is_reserved(GridCell::new(-3, 2)));
    }

    #[test]
    fn test_reserve_clips_at_edges() {
        let mut grid = OccupancyGrid::new(50).unwrap();
        grid.reserve(49, 0, 5);
        // Only the 3x3 corner that lies inside the grid is marked.
        assert_eq!(grid.reserved_count(), 9);
        assert!(grid.is_reserved(GridCell::new(47, 2)));

        grid.reserve(-10, -10, 3);
        assert_eq!(grid.reserved_count(), 9);
    }

    #[test]
    fn test_reserve_disk() {
        let mut grid = OccupancyGrid::new(20).unwrap();
        grid.reserve_disk(10, 10, 2);
        // r=2 disk: 1 + 4 + 4 + 4 = 13 cells.
        assert_eq!(grid.reserved_count(), 13);
        assert!(grid.is_reserved(GridCell::new(12, 10)));
        assert!(!grid.is_reserved(GridCell::new(12, 12)));

        let mut edge = OccupancyGrid::new(20).unwrap();
        edge.reserve_disk(0, 0, 3);
        // Quarter of an r=3 disk (29 cells) including both axes.
        assert_eq!(edge.reserved_count(), 11);
    }

    #[test]
    fn test_display() {
        let mut grid = OccupancyGrid::new(3).unwrap();
        grid.reserve_cell(GridCell::new(1, 1));
        let s = format!("{}", grid);
        assert!(s.contains("OccupancyGrid (3x3, 1 reserved)"));
        assert!(s.contains(".#."));
    }
}
