//! Grid-related functionality for city layout.
//!
//! This module provides the occupancy grid used for collision avoidance and
//! the point types for addressing it.

pub mod occupancy;
pub mod point_types;

pub use occupancy::OccupancyGrid;
pub use point_types::{GridCell, WorldPoint};
