#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library of grid rasterization and scene geometry helpers."]
#![doc = ""]
#![doc = "This crate provides integer line and circle rasterizers for grid layouts,"]
#![doc = "the orbit camera used to look at a generated city, and a circle-fan mesh builder."]

extern crate alloc;

pub mod camera;
pub mod mesh;
pub mod raster;

pub use camera::OrbitCamera;
pub use mesh::{MeshData, MeshVertex, circle_fan};
pub use raster::{bresenham_line, midpoint_circle};
