//! The generated city plus its per-frame animation state.

use nightcity_geometry::mesh::{MeshData, circle_fan};
use nightcity_geometry::OrbitCamera;
use tracing::info;

use crate::config::{BuildingKind, CityConfig};
use crate::error::LayoutError;
use crate::layout::CityLayout;
use crate::map::GridCell;
use crate::render::{MeshKind, Projection, ShaderSink, TextureSlot, Transform};

/// Projection used for every frame.
pub const PROJECTION: Projection = Projection {
    fov_y_degrees: 45.0,
    near: 0.1,
    far: 200.0,
};

const POND_SEGMENTS: u32 = 64;
const WATER_SPEED: f32 = 2.0;
const RIPPLE_SPEED: f32 = 3.0;

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const GRASS: [f32; 3] = [0.1, 0.15, 0.1];
const ASPHALT: [f32; 3] = [0.2, 0.2, 0.2];
const WATER: [f32; 3] = [0.1, 0.25, 0.45];
const KERB: [f32; 3] = [0.35, 0.35, 0.33];
const TRUNK: [f32; 3] = [0.4, 0.2, 0.1];
const LEAVES: [f32; 3] = [0.1, 0.6, 0.1];
const LAMP_POLE: [f32; 3] = [0.2, 0.2, 0.2];
const LAMP_LIGHT: [f32; 3] = [1.0, 0.9, 0.6];
const CAR_BODY: [f32; 3] = [0.8, 0.1, 0.1];
const CAR_ROOF: [f32; 3] = [0.7, 0.1, 0.1];
const HEADLIGHT: [f32; 3] = [1.0, 1.0, 0.9];

/// Flat colour for a building whose texture is missing.
fn building_color(kind: BuildingKind) -> [f32; 3] {
    match kind {
        BuildingKind::Skyscraper => [0.7, 0.7, 0.8],
        BuildingKind::Tower => [0.6, 0.5, 0.4],
        BuildingKind::Office => [0.8, 0.8, 0.7],
    }
}

fn building_texture(kind: BuildingKind) -> TextureSlot {
    match kind {
        BuildingKind::Skyscraper => TextureSlot::Skyscraper,
        BuildingKind::Tower => TextureSlot::Tower,
        BuildingKind::Office => TextureSlot::Building,
    }
}

/// A generated city ready to be drawn.
#[derive(Debug, Clone)]
pub struct CityScene {
    config: CityConfig,
    layout: CityLayout,
    water_time: f32,
    ripple_phase: f32,
}

impl CityScene {
    /// Generates the layout for `config` and resets the animation clock.
    pub fn init(config: &CityConfig) -> Result<Self, LayoutError> {
        let layout = CityLayout::generate(config)?;
        info!(buildings = layout.buildings.len(), "City scene initialized");
        Ok(CityScene {
            config: config.clone(),
            layout,
            water_time: 0.0,
            ripple_phase: 0.0,
        })
    }

    /// The placed features.
    pub fn layout(&self) -> &CityLayout {
        &self.layout
    }

    /// The configuration the scene was built from.
    pub fn config(&self) -> &CityConfig {
        &self.config
    }

    /// Seconds of water animation, scaled.
    pub fn water_time(&self) -> f32 {
        self.water_time
    }

    /// Ripple phase in radians.
    pub fn ripple_phase(&self) -> f32 {
        self.ripple_phase
    }

    /// Advances the water animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.water_time += dt * WATER_SPEED;
        self.ripple_phase += dt * RIPPLE_SPEED;
    }

    fn world(&self, cell: GridCell) -> [f32; 2] {
        let p = cell.to_world(self.layout.grid_size);
        [p.x, p.z]
    }

    /// World-space triangle fan for the pond surface.
    pub fn pond_mesh(&self) -> MeshData {
        let [x, z] = self.world(self.layout.pond.center);
        circle_fan(x, z, self.layout.pond.radius as f32, POND_SEGMENTS)
    }

    /// Number of draw calls one [`Self::render`] submits.
    pub fn draw_count(&self) -> usize {
        let l = &self.layout;
        1 + l.roads.len() + 1 + l.pond.outline().len() + l.buildings.len() + 2 * l.trees.len() + 2 * l.lamps.len() + 4
    }

    /// Submits the whole city: ground, roads, pond, buildings, trees, lamps, car.
    pub fn render<S: ShaderSink>(&self, sink: &mut S, camera: &OrbitCamera) {
        sink.set_view(camera.position(), camera.target);
        sink.set_projection(PROJECTION);

        self.render_ground(sink);
        self.render_roads(sink);
        self.render_pond(sink);
        self.render_buildings(sink);
        self.render_trees(sink);
        self.render_lamps(sink);
        self.render_car(sink);
    }

    fn part<S: ShaderSink>(sink: &mut S, model: Transform, color: [f32; 3]) {
        sink.set_model(&model);
        sink.set_color(color);
        sink.draw(MeshKind::Cube);
    }

    fn render_ground<S: ShaderSink>(&self, sink: &mut S) {
        let n = self.layout.grid_size as f32;
        sink.set_texture(None);
        Self::part(sink, Transform::new([0.0, -0.501, 0.0], [n, 1.0, n]), GRASS);
    }

    fn render_roads<S: ShaderSink>(&self, sink: &mut S) {
        let textured = sink.has_texture(TextureSlot::Road);
        sink.set_texture(textured.then_some(TextureSlot::Road));
        sink.set_color(ASPHALT);

        let center = self.layout.center();
        for &cell in &self.layout.roads {
            let [x, z] = self.world(cell);
            let mut model = Transform::new([x, 0.02, z], [1.0; 3]);
            // Turn the lane markings on the vertical road.
            if cell.x == center {
                model = model.rotated_y(90.0);
            }
            sink.set_model(&model);
            sink.draw(MeshKind::QuadXZ);
        }
    }

    fn render_pond<S: ShaderSink>(&self, sink: &mut S) {
        let shimmer = 0.9 + 0.1 * self.ripple_phase.sin();
        let bob = 0.005 * self.water_time.sin();

        let textured = sink.has_texture(TextureSlot::Pond);
        let base = if textured { WHITE } else { WATER };
        sink.set_texture(textured.then_some(TextureSlot::Pond));
        sink.set_model(&Transform::new([0.0, bob, 0.0], [1.0; 3]));
        sink.set_color(base.map(|c| c * shimmer));
        sink.draw(MeshKind::PondFan);

        sink.set_texture(None);
        for cell in self.layout.pond.outline() {
            let [x, z] = self.world(cell);
            Self::part(sink, Transform::new([x, 0.05, z], [0.9, 0.1, 0.9]), KERB);
        }
    }

    fn render_buildings<S: ShaderSink>(&self, sink: &mut S) {
        for b in &self.layout.buildings {
            let [x, z] = self.world(b.cell);
            let width = self.config.width_for(b.kind);
            let slot = building_texture(b.kind);

            let textured = sink.has_texture(slot);
            sink.set_texture(textured.then_some(slot));
            let color = if textured { WHITE } else { building_color(b.kind) };
            Self::part(
                sink,
                Transform::new([x, b.height / 2.0, z], [width, b.height, width * 0.9]),
                color,
            );
        }
    }

    fn render_trees<S: ShaderSink>(&self, sink: &mut S) {
        sink.set_texture(None);
        for &tree in &self.layout.trees {
            let [x, z] = self.world(tree);
            Self::part(sink, Transform::new([x, 1.0, z], [0.3, 2.0, 0.3]), TRUNK);
            Self::part(sink, Transform::new([x, 2.5, z], [1.5, 1.5, 1.5]), LEAVES);
        }
    }

    fn render_lamps<S: ShaderSink>(&self, sink: &mut S) {
        sink.set_texture(None);
        for &lamp in &self.layout.lamps {
            let [x, z] = self.world(lamp);
            Self::part(sink, Transform::new([x, 2.5, z], [0.1, 5.0, 0.1]), LAMP_POLE);
            Self::part(sink, Transform::new([x, 5.2, z], [0.3, 0.2, 0.3]), LAMP_LIGHT);
        }
    }

    fn render_car<S: ShaderSink>(&self, sink: &mut S) {
        let [x, z] = self.world(self.layout.car);
        sink.set_texture(None);
        Self::part(sink, Transform::new([x, 0.4, z], [2.0, 0.8, 1.0]), CAR_BODY);
        Self::part(sink, Transform::new([x, 1.0, z], [1.6, 0.4, 0.8]), CAR_ROOF);
        Self::part(sink, Transform::new([x + 1.1, 0.5, z + 0.3], [0.1, 0.2, 0.2]), HEADLIGHT);
        Self::part(sink, Transform::new([x + 1.1, 0.5, z - 0.3], [0.1, 0.2, 0.2]), HEADLIGHT);
    }
}
