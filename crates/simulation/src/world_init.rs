// =============================================================================
// Starter town: a small connected city laid out around the city hall.
// =============================================================================

use bevy::prelude::*;

use crate::catalog::BuildingKind;
use crate::grid::CityGrid;

/// Marker resource that, when present, causes `init_world` to leave the grid
/// empty. Used by the test harness and by the runner's `--empty` flag.
#[derive(Resource)]
pub struct SkipWorldInit;

/// Roads: the full row under the city hall plus one spur heading south.
const MAIN_STREET_Y: usize = 2;
const SPUR_X: usize = 10;
const SPUR_LEN: usize = 7;

const STARTER_BUILDINGS: &[(BuildingKind, usize, usize)] = &[
    (BuildingKind::CityHall, 0, 0),
    (BuildingKind::House, 0, 3),
    (BuildingKind::House, 1, 3),
    (BuildingKind::House, 2, 3),
    (BuildingKind::House, 3, 3),
    (BuildingKind::Shop, 4, 3),
    (BuildingKind::Shop, 5, 3),
    (BuildingKind::Farm, 6, 3),
    (BuildingKind::PowerPlant, 8, 3),
    (BuildingKind::Park, 9, 3),
    (BuildingKind::Factory, 9, 5),
    (BuildingKind::Shop, 9, 6),
    (BuildingKind::Shop, 9, 7),
    (BuildingKind::Shop, 9, 8),
    (BuildingKind::Shop, 9, 9),
    (BuildingKind::WaterPlant, 11, 3),
    (BuildingKind::House, 11, 5),
    (BuildingKind::House, 11, 6),
    (BuildingKind::House, 11, 7),
    (BuildingKind::Condominium, 11, 8),
    (BuildingKind::University, 14, 3),
];

/// Every building of the starter town with its top-left cell, roads first.
pub fn starter_town() -> Vec<(BuildingKind, usize, usize)> {
    let mut layout = Vec::with_capacity(STARTER_BUILDINGS.len() + 32);
    layout.push(STARTER_BUILDINGS[0]);
    for x in 0..crate::config::GRID_SIZE {
        layout.push((BuildingKind::Road, x, MAIN_STREET_Y));
    }
    for y in MAIN_STREET_Y + 1..=MAIN_STREET_Y + SPUR_LEN {
        layout.push((BuildingKind::Road, SPUR_X, y));
    }
    layout.extend_from_slice(&STARTER_BUILDINGS[1..]);
    layout
}

/// Lay out the starter town for free. Placement conflicts are logged and
/// skipped so a pre-populated grid is never overwritten.
pub fn init_world(mut grid: ResMut<CityGrid>, skip: Option<Res<SkipWorldInit>>) {
    if skip.is_some() {
        return;
    }
    let mut placed = 0;
    for (kind, x, y) in starter_town() {
        match grid.place_building(x, y, kind) {
            Ok(_) => placed += 1,
            Err(e) => warn!("starter town: {} at ({x}, {y}) skipped: {e}", kind.name()),
        }
    }
    info!("starter town laid out with {placed} buildings");
}
