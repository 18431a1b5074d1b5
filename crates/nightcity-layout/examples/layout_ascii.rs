use nightcity_layout::{BuildingKind, CityConfig, CitySize, LayoutEngine};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    // A small mixed city: 3 skyscrapers, 4 towers, 5 offices.
    let config = CityConfig { city_size: CitySize::Small, ..CityConfig::default() };
    if let Err(e) = config.validate() {
        println!("Invalid configuration: {}", e);
        return;
    }

    let (layout, grid) = match LayoutEngine::new(&config) {
        Ok(engine) => engine.run_with_grid(),
        Err(e) => {
            println!("Error creating layout engine: {:?}", e);
            return;
        }
    };

    println!("Occupancy after generation:");
    println!("{}", grid);

    println!("Buildings ({} of {} requested):", layout.buildings.len(), config.num_buildings);
    for b in &layout.buildings {
        let w = b.cell.to_world(layout.grid_size);
        println!(
            "  {:<10} grid ({:2}, {:2}) world ({:6.1}, {:6.1}) height {:5.1}",
            format!("{:?}", b.kind),
            b.cell.x,
            b.cell.z,
            w.x,
            w.z,
            b.height
        );
    }
    for kind in BuildingKind::PRIORITY {
        println!("  {:?}: {}", kind, layout.count(kind));
    }

    println!("Trees: {}", layout.trees.len());
    println!("Street lamps: {}", layout.lamps.len());
    println!("Car at ({}, {})", layout.car.x, layout.car.z);
    println!(
        "Pond at ({}, {}) radius {}, {} rim cells",
        layout.pond.center.x,
        layout.pond.center.z,
        layout.pond.radius,
        layout.pond.outline().len()
    );
}
