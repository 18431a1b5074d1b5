//! CPU-side mesh data for shapes the renderer has no primitive for.

use alloc::vec::Vec;
use core::f32::consts::TAU;
use libm::{cosf, sinf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Height of flat ground-level meshes, just above the road plane.
const SURFACE_Y: f32 = 0.01;
/// Fewest segments a fan may be built with.
const MIN_SEGMENTS: u32 = 3;

/// A vertex with position, normal and texture coordinates.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeshVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Surface normal.
    pub normal: [f32; 3],
    /// Texture coordinates in `[0, 1]`.
    pub uv: [f32; 2],
}

/// Indexed triangle list.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshData {
    /// Vertex buffer.
    pub vertices: Vec<MeshVertex>,
    /// Triangle indices, three per triangle.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Builds a horizontal disc centred on `(cx, cz)` as a triangle fan.
///
/// The first vertex is the centre; it is followed by `segments + 1` ring
/// vertices (the last repeats the first so UVs close cleanly). Fewer than
/// three segments are raised to three.
pub fn circle_fan(cx: f32, cz: f32, radius: f32, segments: u32) -> MeshData {
    let segments = segments.max(MIN_SEGMENTS);
    let up = [0.0, 1.0, 0.0];

    let mut vertices = Vec::with_capacity(segments as usize + 2);
    vertices.push(MeshVertex {
        position: [cx, SURFACE_Y, cz],
        normal: up,
        uv: [0.5, 0.5],
    });
    for i in 0..=segments {
        let a = i as f32 * TAU / segments as f32;
        let (cos_a, sin_a) = (cosf(a), sinf(a));
        vertices.push(MeshVertex {
            position: [cx + radius * cos_a, SURFACE_Y, cz + radius * sin_a],
            normal: up,
            uv: [(cos_a + 1.0) * 0.5, (sin_a + 1.0) * 0.5],
        });
    }

    let mut indices = Vec::with_capacity(segments as usize * 3);
    for i in 1..=segments {
        indices.extend_from_slice(&[0, i, i + 1]);
    }

    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fan_layout() {
        let fan = circle_fan(8.0, -8.0, 4.0, 64);
        assert_eq!(fan.vertices.len(), 66);
        assert_eq!(fan.triangle_count(), 64);
        assert_eq!(fan.vertices[0].position, [8.0, SURFACE_Y, -8.0]);
        assert_eq!(&fan.indices[..3], &[0, 1, 2]);
        assert_eq!(&fan.indices[fan.indices.len() - 3..], &[0, 64, 65]);
    }

    #[test]
    fn test_ring_on_radius() {
        let fan = circle_fan(0.0, 0.0, 3.0, 16);
        for v in &fan.vertices[1..] {
            let r = (v.position[0].powi(2) + v.position[2].powi(2)).sqrt();
            assert!((r - 3.0).abs() < 1e-4);
            assert!(v.uv[0] >= 0.0 && v.uv[0] <= 1.0);
            assert!(v.uv[1] >= 0.0 && v.uv[1] <= 1.0);
        }
    }

    #[test]
    fn test_degenerate_segments() {
        let fan = circle_fan(0.0, 0.0, 1.0, 0);
        assert_eq!(fan.triangle_count(), 3);
    }
}
