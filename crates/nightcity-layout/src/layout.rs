//! Procedural layout of roads, buildings, trees, lamps, the car and the pond.
//!
//! Phases run in a fixed order against one [`OccupancyGrid`]; every phase
//! sees the reservations left by the ones before it:
//!
//! 1. roads, a horizontal and a vertical line through the grid centre
//! 2. buildings, seeded random draws with 5x5 footprints
//! 3. trees, a second seed with 3x3 footprints
//! 4. street lamps, a fixed sweep beside both roads
//! 5. the car, parked on the horizontal road
//! 6. the pond, a filled disk north-east of the crossing
//!
//! Placement that runs out of attempts skips the feature. Nothing here
//! returns an error once the engine exists.

use nightcity_geometry::raster::{bresenham_line, midpoint_circle};
use tracing::{debug, info};

use crate::config::{BuildingKind, BuildingStyle, CityConfig};
use crate::error::LayoutError;
use crate::map::{GridCell, OccupancyGrid};
use crate::rng::{BUILDING_SEED, PlacementRng, TREE_SEED};

/// Roads stop this many cells short of each edge.
const ROAD_MARGIN: i32 = 5;

const BUILDING_MARGIN: i32 = 5;
const BUILDING_FOOTPRINT: u32 = 5;
const BUILDING_ATTEMPTS: u32 = 100;

const TREE_MARGIN: i32 = 3;
const TREE_FOOTPRINT: u32 = 3;
const TREE_ATTEMPTS: u32 = 50;

/// First lamp position along each road.
const LAMP_START: i32 = 8;
const LAMP_STRIDE: usize = 6;
/// Lamps within this distance of the crossing are skipped.
const LAMP_CROSSING_CLEARANCE: i32 = 3;
/// Lamps stand this far to either side of the road.
const LAMP_OFFSET: i32 = 2;

const CAR_OFFSET: i32 = 5;
/// Pond centre offset from the grid centre, `(+x, -z)`.
const POND_OFFSET: i32 = 8;

/// A placed building.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Building {
    /// Centre cell of the 5x5 footprint.
    pub cell: GridCell,
    /// Building kind.
    pub kind: BuildingKind,
    /// Height from the configuration for `kind`.
    pub height: f32,
}

/// The pond, a disk of whole cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pond {
    /// Centre cell.
    pub center: GridCell,
    /// Radius in cells.
    pub radius: i32,
}

impl Pond {
    /// Rim cells of the pond from the midpoint circle rasterizer.
    ///
    /// Cells on octant boundaries repeat; the rim is drawn, not counted.
    pub fn outline(&self) -> Vec<GridCell> {
        midpoint_circle(self.center.x, self.center.z, self.radius)
            .into_iter()
            .map(GridCell::from)
            .collect()
    }
}

/// Everything the layout engine placed for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct CityLayout {
    /// Cells per side of the grid the layout was built on.
    pub grid_size: usize,
    /// Horizontal road cells followed by vertical road cells; the crossing
    /// cell appears in both.
    pub roads: Vec<GridCell>,
    /// Placed buildings in placement order.
    pub buildings: Vec<Building>,
    /// Tree cells.
    pub trees: Vec<GridCell>,
    /// Street lamp cells.
    pub lamps: Vec<GridCell>,
    /// Car position on the horizontal road.
    pub car: GridCell,
    /// The pond.
    pub pond: Pond,
}

impl CityLayout {
    /// Runs every placement phase for `config`.
    pub fn generate(config: &CityConfig) -> Result<Self, LayoutError> {
        Ok(LayoutEngine::new(config)?.run())
    }

    /// Centre index of the grid.
    pub fn center(&self) -> i32 {
        self.grid_size as i32 / 2
    }

    /// Number of placed buildings of `kind`.
    pub fn count(&self, kind: BuildingKind) -> usize {
        self.buildings.iter().filter(|b| b.kind == kind).count()
    }
}

/// Running per-kind totals for quota placement.
#[derive(Debug, Default)]
struct KindCounts {
    skyscrapers: u32,
    towers: u32,
    offices: u32,
}

impl KindCounts {
    fn get(&self, kind: BuildingKind) -> u32 {
        match kind {
            BuildingKind::Skyscraper => self.skyscrapers,
            BuildingKind::Tower => self.towers,
            BuildingKind::Office => self.offices,
        }
    }

    fn add(&mut self, kind: BuildingKind) {
        match kind {
            BuildingKind::Skyscraper => self.skyscrapers += 1,
            BuildingKind::Tower => self.towers += 1,
            BuildingKind::Office => self.offices += 1,
        }
    }
}

/// Owns the occupancy grid while a layout is being built.
pub struct LayoutEngine {
    config: CityConfig,
    grid: OccupancyGrid,
    building_rng: PlacementRng,
    tree_rng: PlacementRng,
}

impl LayoutEngine {
    /// Creates an engine with an all-free grid sized for `config`.
    ///
    /// The configuration is trusted; run [`CityConfig::validate`] first.
    pub fn new(config: &CityConfig) -> Result<Self, LayoutError> {
        let grid = OccupancyGrid::new(config.city_size.grid_size())?;
        info!(grid_size = grid.size(), "Occupancy grid initialized");
        Ok(LayoutEngine {
            config: config.clone(),
            grid,
            building_rng: PlacementRng::new(BUILDING_SEED),
            tree_rng: PlacementRng::new(TREE_SEED),
        })
    }

    /// The grid in its current state.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    fn size(&self) -> i32 {
        self.grid.size() as i32
    }

    fn center(&self) -> i32 {
        self.size() / 2
    }

    /// Runs all phases in order and returns the layout, dropping the grid.
    pub fn run(self) -> CityLayout {
        self.run_with_grid().0
    }

    /// Runs all phases in order and returns the layout with the final grid.
    pub fn run_with_grid(mut self) -> (CityLayout, OccupancyGrid) {
        let roads = self.place_roads();
        let buildings = self.place_buildings();
        let trees = self.place_trees();
        let lamps = self.place_street_lamps();
        let car = self.place_car();
        let pond = self.place_pond();

        info!(
            roads = roads.len(),
            buildings = buildings.len(),
            trees = trees.len(),
            lamps = lamps.len(),
            reserved = self.grid.reserved_count(),
            "Layout generated"
        );

        let layout = CityLayout {
            grid_size: self.grid.size(),
            roads,
            buildings,
            trees,
            lamps,
            car,
            pond,
        };
        (layout, self.grid)
    }

    /// Rasterizes the two crossing roads and reserves their cells.
    pub fn place_roads(&mut self) -> Vec<GridCell> {
        let (n, c) = (self.size(), self.center());
        let horizontal = bresenham_line(ROAD_MARGIN, c, n - ROAD_MARGIN, c);
        let vertical = bresenham_line(c, ROAD_MARGIN, c, n - ROAD_MARGIN);

        let roads: Vec<GridCell> = horizontal.into_iter().chain(vertical).map(GridCell::from).collect();
        for &cell in &roads {
            self.grid.reserve_cell(cell);
        }
        debug!(cells = roads.len(), "Roads placed");
        roads
    }

    /// Kind for the next building, given what has been placed so far.
    ///
    /// Mixed cities fill the skyscraper quota, then the tower quota, and
    /// make everything after that an office.
    fn next_kind(&self, placed: &KindCounts) -> BuildingKind {
        match self.config.building_style {
            BuildingStyle::Skyscrapers => BuildingKind::Skyscraper,
            BuildingStyle::Towers => BuildingKind::Tower,
            BuildingStyle::Mixed => BuildingKind::PRIORITY[..2]
                .iter()
                .copied()
                .find(|&kind| placed.get(kind) < self.config.quota(kind))
                .unwrap_or(BuildingKind::Office),
        }
    }

    /// Draws random spots for each requested building and keeps the first free one.
    pub fn place_buildings(&mut self) -> Vec<Building> {
        self.building_rng.reset();
        let (lo, hi) = (BUILDING_MARGIN, self.size() - BUILDING_MARGIN);
        let mut buildings = Vec::with_capacity(self.config.num_buildings as usize);
        let mut placed = KindCounts::default();

        for index in 0..self.config.num_buildings {
            let Some(cell) = find_free_spot(
                &self.grid,
                &mut self.building_rng,
                lo,
                hi,
                BUILDING_FOOTPRINT,
                BUILDING_ATTEMPTS,
            ) else {
                debug!(index, "No free spot for building, skipping");
                continue;
            };

            self.grid.reserve(cell.x, cell.z, BUILDING_FOOTPRINT);
            let kind = self.next_kind(&placed);
            placed.add(kind);
            let height = self.config.height_for(kind);
            debug!(index, x = cell.x, z = cell.z, ?kind, height, "Building placed");
            buildings.push(Building { cell, kind, height });
        }

        info!(
            requested = self.config.num_buildings,
            placed = buildings.len(),
            draws = self.building_rng.draws(),
            "Buildings placed"
        );
        buildings
    }

    /// Scatters trees with their own seed.
    pub fn place_trees(&mut self) -> Vec<GridCell> {
        self.tree_rng.reset();
        let (lo, hi) = (TREE_MARGIN, self.size() - TREE_MARGIN);
        let requested = self.config.tree_count();
        let mut trees = Vec::with_capacity(requested as usize);

        for _ in 0..requested {
            if let Some(cell) = find_free_spot(&self.grid, &mut self.tree_rng, lo, hi, TREE_FOOTPRINT, TREE_ATTEMPTS) {
                self.grid.reserve(cell.x, cell.z, TREE_FOOTPRINT);
                trees.push(cell);
            }
        }

        info!(requested, placed = trees.len(), draws = self.tree_rng.draws(), "Trees placed");
        trees
    }

    fn try_place_lamp(&mut self, cell: GridCell, lamps: &mut Vec<GridCell>) {
        if self.grid.is_cell_free(cell) {
            self.grid.reserve_cell(cell);
            lamps.push(cell);
        }
    }

    /// Sweeps both roads at a fixed stride, putting a lamp on each side where there is room.
    pub fn place_street_lamps(&mut self) -> Vec<GridCell> {
        let (n, c) = (self.size(), self.center());
        let mut lamps = Vec::new();

        let stops: Vec<i32> = (LAMP_START..n - LAMP_START)
            .step_by(LAMP_STRIDE)
            .filter(|&i| (i - c).abs() > LAMP_CROSSING_CLEARANCE)
            .collect();

        for &i in &stops {
            self.try_place_lamp(GridCell::new(i, c + LAMP_OFFSET), &mut lamps);
            self.try_place_lamp(GridCell::new(i, c - LAMP_OFFSET), &mut lamps);
        }
        for &j in &stops {
            self.try_place_lamp(GridCell::new(c + LAMP_OFFSET, j), &mut lamps);
            self.try_place_lamp(GridCell::new(c - LAMP_OFFSET, j), &mut lamps);
        }

        debug!(lamps = lamps.len(), "Street lamps placed");
        lamps
    }

    /// Parks the car on the horizontal road. The car does not reserve cells.
    pub fn place_car(&self) -> GridCell {
        let c = self.center();
        GridCell::new(c - CAR_OFFSET, c)
    }

    /// Reserves the pond's filled disk, clipped to the grid.
    pub fn place_pond(&mut self) -> Pond {
        let c = self.center();
        let pond = Pond {
            center: GridCell::new(c + POND_OFFSET, c - POND_OFFSET),
            radius: self.config.pond_radius as i32,
        };
        self.grid.reserve_disk(pond.center.x, pond.center.z, pond.radius);
        debug!(x = pond.center.x, z = pond.center.z, radius = pond.radius, "Pond area marked");
        pond
    }
}

/// Draws up to `attempts` candidate centres in `[lo, hi)` on both axes and
/// returns the first whose footprint is free.
fn find_free_spot(
    grid: &OccupancyGrid,
    rng: &mut PlacementRng,
    lo: i32,
    hi: i32,
    footprint: u32,
    attempts: u32,
) -> Option<GridCell> {
    (0..attempts).find_map(|_| {
        let x = rng.draw(lo, hi);
        let z = rng.draw(lo, hi);
        grid.is_free(x, z, footprint).then_some(GridCell::new(x, z))
    })
}
