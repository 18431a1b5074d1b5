use macroquad::models::{Mesh, Vertex};
use macroquad::prelude::*;
use macroquad::window::get_internal_gl;
use nightcity_geometry::{MeshData, OrbitCamera};
use nightcity_layout::render::{self, MeshKind, ShaderSink, TextureSlot, Transform};
use nightcity_layout::CityScene;
use tracing::info;

use crate::input::CameraControls;
use crate::textures::TextureSet;

const NIGHT_SKY: Color = Color::new(0.05, 0.05, 0.15, 1.0);

// Function to configure the macroquad window
pub fn window_conf() -> Conf {
    Conf {
        window_title: "Night Cityscape Generator".to_string(),
        window_width: 1280,
        window_height: 800,
        high_dpi: true,
        sample_count: 4,
        ..Default::default()
    }
}

fn rgb(c: [f32; 3]) -> Color {
    Color::new(c[0], c[1], c[2], 1.0)
}

fn model_matrix(t: &Transform) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::from(t.scale),
        Quat::from_rotation_y(t.yaw_degrees.to_radians()),
        Vec3::from(t.translation),
    )
}

/// Perspective camera looking from `eye` at `target` with the scene's clip planes.
fn camera_3d(eye: Vec3, target: Vec3, projection: render::Projection) -> Camera3D {
    Camera3D {
        position: eye,
        target,
        up: Vec3::Y,
        fovy: projection.fov_y_degrees.to_radians(),
        z_near: projection.near,
        z_far: projection.far,
        ..Default::default()
    }
}

/// Runs `draw` with `model` pushed onto macroquad's model matrix stack.
fn with_model_matrix(model: Mat4, draw: impl FnOnce()) {
    // SAFETY: macroquad is single-threaded and every call here comes from the
    // main loop. Each borrow of the context ends before `draw` or the next
    // macroquad call runs.
    unsafe {
        get_internal_gl().quad_gl.push_model_matrix(model);
        draw();
        get_internal_gl().quad_gl.pop_model_matrix();
    }
}

/// Builds a macroquad mesh from fan data, tinted and optionally textured.
fn fan_mesh(data: &MeshData, color: Color, texture: Option<Texture2D>) -> Mesh {
    let vertices = data
        .vertices
        .iter()
        .map(|v| Vertex::new(v.position[0], v.position[1], v.position[2], v.uv[0], v.uv[1], color))
        .collect();
    let indices = data.indices.iter().map(|&i| i as u16).collect();
    Mesh { vertices, indices, texture }
}

/// Draws scene submissions with macroquad's immediate-mode 3D helpers.
///
/// The model transform is pushed onto macroquad's matrix stack around each
/// draw so unit primitives land where the scene asked.
pub struct MacroquadSink<'a> {
    textures: &'a TextureSet,
    pond: &'a MeshData,
    eye: Vec3,
    target: Vec3,
    model: Mat4,
    color: Color,
    texture: Option<TextureSlot>,
}

impl<'a> MacroquadSink<'a> {
    pub fn new(textures: &'a TextureSet, pond: &'a MeshData) -> Self {
        MacroquadSink {
            textures,
            pond,
            eye: Vec3::ZERO,
            target: Vec3::ZERO,
            model: Mat4::IDENTITY,
            color: WHITE,
            texture: None,
        }
    }

    fn bound_texture(&self) -> Option<&'a Texture2D> {
        let textures = self.textures;
        self.texture.and_then(|slot| textures.get(slot))
    }
}

impl ShaderSink for MacroquadSink<'_> {
    fn set_view(&mut self, eye: [f32; 3], target: [f32; 3]) {
        self.eye = Vec3::from(eye);
        self.target = Vec3::from(target);
    }

    fn set_projection(&mut self, projection: render::Projection) {
        set_camera(&camera_3d(self.eye, self.target, projection));
    }

    fn set_model(&mut self, model: &Transform) {
        self.model = model_matrix(model);
    }

    fn set_color(&mut self, rgb_color: [f32; 3]) {
        self.color = rgb(rgb_color);
    }

    fn set_texture(&mut self, texture: Option<TextureSlot>) {
        self.texture = texture;
    }

    fn has_texture(&self, slot: TextureSlot) -> bool {
        self.textures.contains(slot)
    }

    fn draw(&mut self, mesh: MeshKind) {
        let texture = self.bound_texture();
        let color = self.color;
        with_model_matrix(self.model, || match mesh {
            MeshKind::Cube => draw_cube(Vec3::ZERO, Vec3::ONE, texture, color),
            // draw_plane takes half extents.
            MeshKind::QuadXZ => draw_plane(Vec3::ZERO, vec2(0.5, 0.5), texture, color),
            MeshKind::PondFan => draw_mesh(&fan_mesh(self.pond, color, texture.cloned())),
        });
    }
}

pub async fn run_visualization_loop(mut scene: CityScene, textures: TextureSet, mut camera: OrbitCamera) {
    let pond = scene.pond_mesh();
    let mut controls = CameraControls::new();

    info!(draws_per_frame = scene.draw_count(), camera = %camera, "Visualization loop starting");
    info!("Camera controls: right-drag rotates, wheel zooms, R toggles auto-rotate, Esc exits");

    loop {
        if is_key_pressed(KeyCode::Escape) {
            info!("Escape pressed, closing viewer.");
            break;
        }

        let dt = get_frame_time();
        controls.apply(&mut camera);
        camera.update(dt);
        scene.update(dt);

        clear_background(NIGHT_SKY);
        let mut sink = MacroquadSink::new(&textures, &pond);
        scene.render(&mut sink, &camera);

        set_default_camera();
        let layout = scene.layout();
        draw_text(
            &format!(
                "{} buildings, {} trees, {} lamps  |  camera {}",
                layout.buildings.len(),
                layout.trees.len(),
                layout.lamps.len(),
                camera
            ),
            10.0,
            20.0,
            20.0,
            LIGHTGRAY,
        );

        next_frame().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_matrix_places_unit_cube() {
        let t = Transform::new([3.0, 2.0, -1.0], [2.0, 4.0, 1.0]);
        let m = model_matrix(&t);
        let top_corner = m.transform_point3(vec3(0.5, 0.5, 0.5));
        assert!((top_corner - vec3(4.0, 4.0, -0.5)).length() < 1e-5);
    }

    #[test]
    fn test_model_matrix_quarter_turn() {
        let t = Transform::new([0.0; 3], [1.0; 3]).rotated_y(90.0);
        let m = model_matrix(&t);
        // +X rotates onto -Z about +Y.
        let p = m.transform_point3(Vec3::X);
        assert!((p - vec3(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_camera_uses_clip_planes() {
        let projection = render::Projection { fov_y_degrees: 45.0, near: 0.1, far: 200.0 };
        let camera = camera_3d(vec3(0.0, 10.0, 80.0), Vec3::ZERO, projection);
        assert_eq!(camera.z_near, 0.1);
        assert_eq!(camera.z_far, 200.0);
        assert!((camera.fovy - 45.0_f32.to_radians()).abs() < 1e-6);
        assert_eq!(camera.position, vec3(0.0, 10.0, 80.0));
    }

    #[test]
    fn test_fan_mesh_indices() {
        let data = nightcity_geometry::circle_fan(0.0, 0.0, 2.0, 8);
        let mesh = fan_mesh(&data, WHITE, None);
        assert_eq!(mesh.vertices.len(), 10);
        assert_eq!(mesh.indices.len(), 24);
        assert_eq!(mesh.indices[23], 9);
    }
}
