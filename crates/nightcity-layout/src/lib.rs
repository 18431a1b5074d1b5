//! Procedural layout of a night cityscape.
//!
//! A seeded, deterministic generator places roads, buildings, trees, street
//! lamps, a car and a pond on a square grid, using an occupancy mask for
//! collision avoidance. The resulting [`CityScene`] is handed to a
//! [`ShaderSink`] implementation for drawing.

pub mod config;
pub mod error;
pub mod layout;
pub mod map;
pub mod render;
pub mod rng;
pub mod scene;

pub use config::{BuildingKind, BuildingStyle, CityConfig, CitySize};
pub use error::LayoutError;
pub use layout::{Building, CityLayout, LayoutEngine, Pond};
pub use map::{GridCell, OccupancyGrid, WorldPoint};
pub use render::{MeshKind, Projection, ShaderSink, TextureSlot, Transform};
pub use scene::CityScene;
