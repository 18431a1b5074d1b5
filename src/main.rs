mod config;   // brings `config.rs` in as `crate::config`
mod graphics; // brings `graphics.rs` in as `crate::graphics`
mod input;
mod textures;

use graphics::window_conf;
use nightcity_layout::CityScene;
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Night Cityscape Generator started.");

    if let Err(e) = run().await {
        error!("Viewer failed: {:?}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // An optional first argument overrides the settings file.
    let path = std::env::args().nth(1).unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let settings = config::load_settings(&path)?;

    info!(city = %settings.city_name, "Generating night city...");
    let scene = CityScene::init(&settings.city)?;

    info!("Loading textures...");
    let textures = textures::load_textures(&settings.textures).await;

    graphics::run_visualization_loop(scene, textures, settings.camera.orbit_camera()).await;
    info!("Viewer closed.");
    Ok(())
}
