use macroquad::prelude::*;
use nightcity_geometry::OrbitCamera;
use tracing::info;

/// Mouse and keyboard handling for the orbit camera.
///
/// Right-drag rotates, the wheel zooms and `R` toggles auto-rotation.
pub struct CameraControls {
    last_mouse: Vec2,
}

impl CameraControls {
    pub fn new() -> Self {
        CameraControls {
            last_mouse: mouse_position().into(),
        }
    }

    pub fn apply(&mut self, camera: &mut OrbitCamera) {
        let mouse: Vec2 = mouse_position().into();
        if is_mouse_button_down(MouseButton::Right) {
            // Screen y grows downwards; dragging up should raise the pitch.
            camera.process_mouse_delta(mouse.x - self.last_mouse.x, self.last_mouse.y - mouse.y);
        }
        self.last_mouse = mouse;

        // Wheel magnitudes differ per platform, one step per event is enough.
        let (_, wheel_y) = mouse_wheel();
        if wheel_y != 0.0 {
            camera.process_scroll(wheel_y.signum());
        }

        if is_key_pressed(KeyCode::R) {
            camera.toggle_auto_rotate();
            info!(auto_rotate = camera.auto_rotate, "Camera auto-rotate toggled");
        }
    }
}
