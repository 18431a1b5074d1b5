//! City configuration handed to the layout engine.
//!
//! The engine trusts these values. [`CityConfig::validate`] is the single
//! place where the accepted ranges are enforced, and callers are expected to
//! run it before generating.

use crate::error::LayoutError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Overall city size class, selecting the grid dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CitySize {
    /// 50x50 grid.
    Small,
    /// 70x70 grid.
    #[default]
    Medium,
    /// 100x100 grid.
    Large,
}

impl CitySize {
    /// Maps the numeric class `1..=3` to a size.
    pub fn from_class(class: u32) -> Option<Self> {
        match class {
            1 => Some(CitySize::Small),
            2 => Some(CitySize::Medium),
            3 => Some(CitySize::Large),
            _ => None,
        }
    }

    /// The numeric class, `1..=3`.
    pub fn class(self) -> u32 {
        match self {
            CitySize::Small => 1,
            CitySize::Medium => 2,
            CitySize::Large => 3,
        }
    }

    /// Cells per side of the world grid.
    pub fn grid_size(self) -> usize {
        match self {
            CitySize::Small => 50,
            CitySize::Medium => 70,
            CitySize::Large => 100,
        }
    }
}

/// Which building kinds a city is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BuildingStyle {
    /// Every building is a skyscraper.
    Skyscrapers,
    /// Every building is a tower.
    Towers,
    /// Skyscrapers, towers and offices filled by per-kind quota.
    #[default]
    Mixed,
}

/// The kind of a placed building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BuildingKind {
    /// Tall slab, highest quota priority.
    Skyscraper,
    /// Narrow mid-rise.
    Tower,
    /// Low office block.
    Office,
}

impl BuildingKind {
    /// Quota priority order for mixed cities.
    pub const PRIORITY: [BuildingKind; 3] = [BuildingKind::Skyscraper, BuildingKind::Tower, BuildingKind::Office];
}

/// Offices are drawn shorter than their configured height.
const OFFICE_HEIGHT_SCALE: f32 = 0.7;

/// Validated input parameters for one city.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CityConfig {
    /// Grid size class.
    pub city_size: CitySize,
    /// Building style.
    pub building_style: BuildingStyle,
    /// Total buildings to attempt.
    pub num_buildings: u32,
    /// Skyscraper quota (mixed style) or count (skyscraper style).
    pub num_skyscrapers: u32,
    /// Tower quota (mixed style) or count (tower style).
    pub num_towers: u32,
    /// Office quota (mixed style).
    pub num_offices: u32,
    /// Skyscraper footprint width (world units).
    pub skyscraper_width: f32,
    /// Skyscraper height (world units).
    pub skyscraper_height: f32,
    /// Tower footprint width.
    pub tower_width: f32,
    /// Tower height.
    pub tower_height: f32,
    /// Office footprint width.
    pub office_width: f32,
    /// Office height before scaling.
    pub office_height: f32,
    /// Pond radius in cells; truncated to whole cells for reservation.
    pub pond_radius: f32,
}

impl Default for CityConfig {
    fn default() -> Self {
        CityConfig {
            city_size: CitySize::Medium,
            building_style: BuildingStyle::Mixed,
            num_buildings: 12,
            num_skyscrapers: 3,
            num_towers: 4,
            num_offices: 5,
            skyscraper_width: 4.0,
            skyscraper_height: 60.0,
            tower_width: 3.0,
            tower_height: 30.0,
            office_width: 5.0,
            office_height: 20.0,
            pond_radius: 6.0,
        }
    }
}

fn check_range(value: f32, min: f32, max: f32, msg: &'static str) -> Result<(), LayoutError> {
    if (min..=max).contains(&value) { Ok(()) } else { Err(LayoutError::OutOfRange(msg)) }
}

fn check_count(value: u32, min: u32, max: u32, msg: &'static str) -> Result<(), LayoutError> {
    if (min..=max).contains(&value) { Ok(()) } else { Err(LayoutError::OutOfRange(msg)) }
}

impl CityConfig {
    /// Checks every field the chosen style uses against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns `Err(LayoutError::OutOfRange)` for a value outside its range and
    /// `Err(LayoutError::InvalidConfig)` when `num_buildings` disagrees with the
    /// per-kind counts.
    pub fn validate(&self) -> Result<(), LayoutError> {
        match self.building_style {
            BuildingStyle::Skyscrapers => {
                check_count(self.num_skyscrapers, 5, 20, "skyscraper count must be 5-20")?;
                if self.num_buildings != self.num_skyscrapers {
                    return Err(LayoutError::InvalidConfig("num_buildings must equal num_skyscrapers"));
                }
            }
            BuildingStyle::Towers => {
                check_count(self.num_towers, 5, 20, "tower count must be 5-20")?;
                if self.num_buildings != self.num_towers {
                    return Err(LayoutError::InvalidConfig("num_buildings must equal num_towers"));
                }
            }
            BuildingStyle::Mixed => {
                check_count(self.num_skyscrapers, 1, 10, "skyscraper count must be 1-10")?;
                check_count(self.num_towers, 1, 10, "tower count must be 1-10")?;
                check_count(self.num_offices, 1, 10, "office count must be 1-10")?;
                if self.num_buildings != self.num_skyscrapers + self.num_towers + self.num_offices {
                    return Err(LayoutError::InvalidConfig("num_buildings must equal the sum of per-kind counts"));
                }
            }
        }

        if self.uses(BuildingKind::Skyscraper) {
            check_range(self.skyscraper_width, 1.0, 10.0, "skyscraper width must be 1-10")?;
            check_range(self.skyscraper_height, 10.0, 100.0, "skyscraper height must be 10-100")?;
        }
        if self.uses(BuildingKind::Tower) {
            check_range(self.tower_width, 1.0, 5.0, "tower width must be 1-5")?;
            check_range(self.tower_height, 5.0, 50.0, "tower height must be 5-50")?;
        }
        if self.uses(BuildingKind::Office) {
            check_range(self.office_width, 1.0, 8.0, "office width must be 1-8")?;
            check_range(self.office_height, 3.0, 80.0, "office height must be 3-80")?;
        }
        check_range(self.pond_radius, 2.0, 15.0, "pond radius must be 2-15")
    }

    /// Whether buildings of `kind` can appear under the configured style.
    pub fn uses(&self, kind: BuildingKind) -> bool {
        match self.building_style {
            BuildingStyle::Skyscrapers => kind == BuildingKind::Skyscraper,
            BuildingStyle::Towers => kind == BuildingKind::Tower,
            BuildingStyle::Mixed => true,
        }
    }

    /// Target count for `kind` under mixed quota placement.
    pub fn quota(&self, kind: BuildingKind) -> u32 {
        match kind {
            BuildingKind::Skyscraper => self.num_skyscrapers,
            BuildingKind::Tower => self.num_towers,
            BuildingKind::Office => self.num_offices,
        }
    }

    /// Rendered height of a building of `kind`.
    pub fn height_for(&self, kind: BuildingKind) -> f32 {
        match kind {
            BuildingKind::Skyscraper => self.skyscraper_height,
            BuildingKind::Tower => self.tower_height,
            BuildingKind::Office => self.office_height * OFFICE_HEIGHT_SCALE,
        }
    }

    /// Footprint width of a building of `kind`.
    pub fn width_for(&self, kind: BuildingKind) -> f32 {
        match kind {
            BuildingKind::Skyscraper => self.skyscraper_width,
            BuildingKind::Tower => self.tower_width,
            BuildingKind::Office => self.office_width,
        }
    }

    /// Trees attempted for this city size.
    pub fn tree_count(&self) -> u32 {
        8 * self.city_size.class()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skyscraper_city() -> CityConfig {
        CityConfig {
            city_size: CitySize::Small,
            building_style: BuildingStyle::Skyscrapers,
            num_buildings: 5,
            num_skyscrapers: 5,
            num_towers: 0,
            num_offices: 0,
            skyscraper_width: 4.0,
            skyscraper_height: 50.0,
            pond_radius: 4.0,
            ..CityConfig::default()
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert_eq!(CityConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_size_classes() {
        assert_eq!(CitySize::from_class(1).map(CitySize::grid_size), Some(50));
        assert_eq!(CitySize::from_class(2).map(CitySize::grid_size), Some(70));
        assert_eq!(CitySize::from_class(3).map(CitySize::grid_size), Some(100));
        assert_eq!(CitySize::from_class(4), None);
        assert_eq!(CitySize::Large.class(), 3);
    }

    #[test]
    fn test_single_style_counts() {
        let mut cfg = skyscraper_city();
        assert_eq!(cfg.validate(), Ok(()));

        cfg.num_skyscrapers = 4;
        cfg.num_buildings = 4;
        assert!(matches!(cfg.validate(), Err(LayoutError::OutOfRange(_))));

        cfg.num_skyscrapers = 6;
        assert!(matches!(cfg.validate(), Err(LayoutError::InvalidConfig(_))));
    }

    #[test]
    fn test_unused_dimensions_are_ignored() {
        let mut cfg = skyscraper_city();
        cfg.tower_width = 0.0;
        cfg.office_height = -1.0;
        assert_eq!(cfg.validate(), Ok(()));

        cfg.skyscraper_height = 120.0;
        assert!(matches!(cfg.validate(), Err(LayoutError::OutOfRange(_))));
    }

    #[test]
    fn test_mixed_sum_must_match() {
        let mut cfg = CityConfig::default();
        cfg.num_buildings = 11;
        assert!(matches!(cfg.validate(), Err(LayoutError::InvalidConfig(_))));

        cfg.num_offices = 0;
        cfg.num_buildings = 7;
        assert!(matches!(cfg.validate(), Err(LayoutError::OutOfRange(_))));
    }

    #[test]
    fn test_pond_radius_range() {
        let mut cfg = CityConfig::default();
        cfg.pond_radius = 1.5;
        assert!(matches!(cfg.validate(), Err(LayoutError::OutOfRange(_))));
        cfg.pond_radius = 15.0;
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn test_heights_by_kind() {
        let cfg = CityConfig::default();
        assert_eq!(cfg.height_for(BuildingKind::Skyscraper), 60.0);
        assert_eq!(cfg.height_for(BuildingKind::Tower), 30.0);
        assert_eq!(cfg.height_for(BuildingKind::Office), 20.0 * 0.7);
        assert_eq!(cfg.width_for(BuildingKind::Office), 5.0);
        assert_eq!(cfg.tree_count(), 16);
    }
}
