use serde::{Deserialize, Serialize};

use crate::grid::TileKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildCategory {
    Residential,
    Commercial,
    Industrial,
    Services,
}

impl BuildCategory {
    pub const ALL: [BuildCategory; 4] = [
        BuildCategory::Residential,
        BuildCategory::Commercial,
        BuildCategory::Industrial,
        BuildCategory::Services,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuildCategory::Residential => "Residential",
            BuildCategory::Commercial => "Commercial",
            BuildCategory::Industrial => "Industrial",
            BuildCategory::Services => "Services",
        }
    }
}

/// One-time changes applied to the city when a building is completed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BuildEffects {
    pub happiness: f64,
    pub traffic: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    House,
    Condominium,
    Shop,
    Farm,
    Factory,
    PowerPlant,
    WaterPlant,
    University,
    Park,
    CityHall,
    CentralBank,
    PoliceStation,
    Hospital,
    Road,
    /// Spawned by the game as a penalty; never offered in the build menu.
    Slum,
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 15] = [
        BuildingKind::House,
        BuildingKind::Condominium,
        BuildingKind::Shop,
        BuildingKind::Farm,
        BuildingKind::Factory,
        BuildingKind::PowerPlant,
        BuildingKind::WaterPlant,
        BuildingKind::University,
        BuildingKind::Park,
        BuildingKind::CityHall,
        BuildingKind::CentralBank,
        BuildingKind::PoliceStation,
        BuildingKind::Hospital,
        BuildingKind::Road,
        BuildingKind::Slum,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuildingKind::House => "House",
            BuildingKind::Condominium => "Condominium",
            BuildingKind::Shop => "Shop",
            BuildingKind::Farm => "Farm",
            BuildingKind::Factory => "Factory",
            BuildingKind::PowerPlant => "Power Plant",
            BuildingKind::WaterPlant => "Water Treatment Plant",
            BuildingKind::University => "University",
            BuildingKind::Park => "Park",
            BuildingKind::CityHall => "City Hall",
            BuildingKind::CentralBank => "Central Bank",
            BuildingKind::PoliceStation => "Police Station",
            BuildingKind::Hospital => "Hospital",
            BuildingKind::Road => "Road",
            BuildingKind::Slum => "Slum",
        }
    }

    /// Footprint as `(width, height)` in cells.
    pub fn footprint(self) -> (usize, usize) {
        match self {
            BuildingKind::House
            | BuildingKind::Shop
            | BuildingKind::Factory
            | BuildingKind::PowerPlant
            | BuildingKind::Park
            | BuildingKind::Road
            | BuildingKind::Slum => (1, 1),
            BuildingKind::Condominium => (3, 1),
            BuildingKind::Farm
            | BuildingKind::WaterPlant
            | BuildingKind::PoliceStation
            | BuildingKind::Hospital => (2, 2),
            BuildingKind::University | BuildingKind::CityHall | BuildingKind::CentralBank => (3, 2),
        }
    }

    pub fn tile(self) -> TileKind {
        match self {
            BuildingKind::House | BuildingKind::Condominium => TileKind::Residential,
            BuildingKind::Shop => TileKind::Commercial,
            BuildingKind::Farm => TileKind::Farm,
            BuildingKind::Factory => TileKind::Industrial,
            BuildingKind::PowerPlant => TileKind::Utility,
            BuildingKind::WaterPlant => TileKind::WaterPlant,
            BuildingKind::University => TileKind::University,
            BuildingKind::Park => TileKind::Park,
            BuildingKind::CityHall => TileKind::CityHall,
            BuildingKind::CentralBank => TileKind::CentralBank,
            BuildingKind::PoliceStation => TileKind::Police,
            BuildingKind::Hospital => TileKind::Hospital,
            BuildingKind::Road => TileKind::Road,
            BuildingKind::Slum => TileKind::Blight,
        }
    }

    pub fn category(self) -> BuildCategory {
        match self {
            BuildingKind::House | BuildingKind::Condominium => BuildCategory::Residential,
            BuildingKind::Shop | BuildingKind::Farm => BuildCategory::Commercial,
            BuildingKind::Factory | BuildingKind::PowerPlant | BuildingKind::WaterPlant => {
                BuildCategory::Industrial
            }
            BuildingKind::University
            | BuildingKind::Park
            | BuildingKind::CityHall
            | BuildingKind::CentralBank
            | BuildingKind::PoliceStation
            | BuildingKind::Hospital
            | BuildingKind::Road
            | BuildingKind::Slum => BuildCategory::Services,
        }
    }

    /// Buildings that must already exist somewhere on the grid.
    pub fn requires(self) -> &'static [BuildingKind] {
        match self {
            BuildingKind::CentralBank => &[BuildingKind::CityHall],
            _ => &[],
        }
    }

    pub fn cost(self) -> f64 {
        match self {
            BuildingKind::House => 100.0,
            BuildingKind::Condominium => 280.0,
            BuildingKind::Shop => 200.0,
            BuildingKind::Farm => 220.0,
            BuildingKind::Factory => 300.0,
            BuildingKind::PowerPlant => 350.0,
            BuildingKind::WaterPlant => 380.0,
            BuildingKind::University => 500.0,
            BuildingKind::Park => 120.0,
            BuildingKind::CityHall => 800.0,
            BuildingKind::CentralBank => 2000.0,
            BuildingKind::PoliceStation => 450.0,
            BuildingKind::Hospital => 600.0,
            BuildingKind::Road => 20.0,
            BuildingKind::Slum => 0.0,
        }
    }

    pub fn effects(self) -> BuildEffects {
        match self {
            BuildingKind::Factory => BuildEffects {
                happiness: -2.0,
                traffic: 2.0,
            },
            BuildingKind::University | BuildingKind::Park => BuildEffects {
                happiness: 2.0,
                traffic: 0.0,
            },
            BuildingKind::Road => BuildEffects {
                happiness: 0.0,
                traffic: 1.0,
            },
            _ => BuildEffects::default(),
        }
    }

    pub fn in_menu(self) -> bool {
        self != BuildingKind::Slum
    }

    /// Build-menu entries for one category, in menu order.
    pub fn menu(category: BuildCategory) -> &'static [BuildingKind] {
        match category {
            BuildCategory::Residential => &[BuildingKind::House, BuildingKind::Condominium],
            BuildCategory::Commercial => &[BuildingKind::Shop, BuildingKind::Farm],
            BuildCategory::Industrial => &[
                BuildingKind::Factory,
                BuildingKind::PowerPlant,
                BuildingKind::WaterPlant,
            ],
            BuildCategory::Services => &[
                BuildingKind::CityHall,
                BuildingKind::CentralBank,
                BuildingKind::University,
                BuildingKind::PoliceStation,
                BuildingKind::Hospital,
                BuildingKind::Road,
                BuildingKind::Park,
            ],
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}
