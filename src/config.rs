use anyhow::Context;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use nightcity_geometry::OrbitCamera;
use nightcity_layout::{CityConfig, TextureSlot};
use serde::Deserialize;
use tracing::{error, info};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const ENV_PREFIX: &str = "NIGHTCITY";

/// Everything the viewer reads at startup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub city_name: String,
    pub city: CityConfig,
    pub camera: CameraSettings,
    pub textures: TextureSettings,
}

/// Initial orbit camera placement.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub auto_rotate: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        CameraSettings {
            distance: 80.0,
            yaw: -90.0,
            pitch: -15.0,
            auto_rotate: false,
        }
    }
}

impl CameraSettings {
    /// Camera looking at the city centre from the configured angle.
    pub fn orbit_camera(&self) -> OrbitCamera {
        let mut camera = OrbitCamera::new([0.0; 3], self.distance, self.yaw, self.pitch);
        camera.auto_rotate = self.auto_rotate;
        camera
    }
}

/// Image paths for each texture slot.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TextureSettings {
    pub building: String,
    pub tower: String,
    pub skyscraper: String,
    pub road: String,
    pub pond: String,
}

impl Default for TextureSettings {
    fn default() -> Self {
        TextureSettings {
            building: "assets/building.jpg".to_string(),
            tower: "assets/tower.png".to_string(),
            skyscraper: "assets/skyscraper.jpg".to_string(),
            road: "assets/road.jpg".to_string(),
            pond: "assets/pond.jpg".to_string(),
        }
    }
}

impl TextureSettings {
    pub fn path(&self, slot: TextureSlot) -> &str {
        match slot {
            TextureSlot::Building => &self.building,
            TextureSlot::Tower => &self.tower,
            TextureSlot::Skyscraper => &self.skyscraper,
            TextureSlot::Road => &self.road,
            TextureSlot::Pond => &self.pond,
        }
    }
}

/// Loads settings from `path` (if it exists) and `NIGHTCITY__*` environment variables.
pub fn load_settings(path: &str) -> anyhow::Result<Settings> {
    info!("Attempting to load configuration from {}", path);
    let builder = Config::builder().add_source(File::new(path, FileFormat::Toml).required(false));
    match finish(builder) {
        Ok(settings) => {
            info!(city = %settings.city_name, config = ?settings.city, "Successfully loaded configuration");
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            Err(e)
        }
    }
}

/// Layers the environment over `builder`, deserializes and validates.
fn finish(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Settings> {
    let settings: Settings = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("reading configuration sources")?
        .try_deserialize()
        .context("parsing configuration")?;

    settings.city.validate().context("validating city configuration")?;
    Ok(settings)
}
