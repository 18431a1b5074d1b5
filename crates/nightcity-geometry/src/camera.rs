//! Orbit camera math.
//!
//! The camera circles a target point at a fixed distance. Angles are stored
//! in degrees, matching the way mouse deltas are applied to them.

use core::f32::consts::PI;
use core::fmt;
use libm::{cosf, sinf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Degrees of rotation per pixel of mouse movement.
const MOUSE_SENSITIVITY: f32 = 0.1;
/// Pitch is kept away from the poles so the up vector stays valid.
const PITCH_LIMIT: f32 = 89.0;
/// Closest allowed zoom distance.
pub const MIN_DISTANCE: f32 = 5.0;
/// Farthest allowed zoom distance.
pub const MAX_DISTANCE: f32 = 150.0;

fn radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// A camera orbiting `target` at `distance`, oriented by `yaw` and `pitch` (degrees).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Heading around the vertical axis (degrees).
    pub yaw: f32,
    /// Elevation angle (degrees), clamped to `[-89, 89]` by mouse input.
    pub pitch: f32,
    /// Distance from the target (world units).
    pub distance: f32,
    /// The point the camera looks at.
    pub target: [f32; 3],
    /// Whether `update` spins the camera on its own.
    pub auto_rotate: bool,
    /// Auto-rotation speed (degrees per second).
    pub rotation_speed: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        OrbitCamera {
            yaw: -90.0,
            pitch: -20.0,
            distance: 25.0,
            target: [0.0; 3],
            auto_rotate: false,
            rotation_speed: 15.0,
        }
    }
}

impl OrbitCamera {
    /// Construct a camera looking at `target` from `distance` with the given angles.
    pub const fn new(target: [f32; 3], distance: f32, yaw: f32, pitch: f32) -> Self {
        OrbitCamera {
            yaw,
            pitch,
            distance,
            target,
            auto_rotate: false,
            rotation_speed: 15.0,
        }
    }

    /// Unit vector pointing from the camera towards the target.
    pub fn direction(&self) -> [f32; 3] {
        let (yaw, pitch) = (radians(self.yaw), radians(self.pitch));
        [
            cosf(yaw) * cosf(pitch),
            sinf(pitch),
            sinf(yaw) * cosf(pitch),
        ]
    }

    /// World-space position of the eye.
    pub fn position(&self) -> [f32; 3] {
        let dir = self.direction();
        [
            self.target[0] - dir[0] * self.distance,
            self.target[1] - dir[1] * self.distance,
            self.target[2] - dir[2] * self.distance,
        ]
    }

    /// Apply a mouse drag of `(dx, dy)` pixels.
    pub fn process_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * MOUSE_SENSITIVITY;
        self.pitch = (self.pitch + dy * MOUSE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Zoom by `dy` scroll steps; positive values move closer.
    pub fn process_scroll(&mut self, dy: f32) {
        self.distance = (self.distance - dy).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Advance auto-rotation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.auto_rotate {
            self.yaw += self.rotation_speed * dt;
            if self.yaw >= 360.0 {
                self.yaw -= 360.0;
            }
        }
    }

    /// Flip auto-rotation on or off.
    pub fn toggle_auto_rotate(&mut self) {
        self.auto_rotate = !self.auto_rotate;
    }
}

impl fmt::Display for OrbitCamera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(yaw: {:.1}°, pitch: {:.1}°, distance: {:.1})",
            self.yaw, self.pitch, self.distance
        )
    }
}
