//! Road connectivity from the city hall.
//!
//! A building counts as *connected* when one of its cells touches a road that
//! can be reached, road-to-road, from a road touching the city hall. Most
//! economy formulas only count connected buildings.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::grid::{CityGrid, GroupId, TileKind};

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Connectivity {
    /// Road cells reachable from the city hall.
    pub roads: HashSet<(usize, usize)>,
    /// Building groups touching one of those roads.
    pub groups: HashSet<GroupId>,
}

impl Connectivity {
    pub fn is_connected(&self, group_id: GroupId) -> bool {
        self.groups.contains(&group_id)
    }
}

fn is_road(grid: &CityGrid, x: usize, y: usize) -> bool {
    grid.get(x, y).tile() == Some(TileKind::Road)
}

pub fn recompute_connectivity(grid: &CityGrid) -> Connectivity {
    let mut result = Connectivity::default();

    let mut stack: Vec<(usize, usize)> = Vec::new();
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    for (x, y, cell) in grid.iter() {
        if cell.tile() != Some(TileKind::CityHall) {
            continue;
        }
        let (neighbors, ncount) = grid.neighbors4(x, y);
        for &(nx, ny) in &neighbors[..ncount] {
            if is_road(grid, nx, ny) && seen.insert((nx, ny)) {
                stack.push((nx, ny));
            }
        }
    }
    if stack.is_empty() {
        return result;
    }

    while let Some((x, y)) = stack.pop() {
        result.roads.insert((x, y));
        let (neighbors, ncount) = grid.neighbors4(x, y);
        for &(nx, ny) in &neighbors[..ncount] {
            if is_road(grid, nx, ny) && seen.insert((nx, ny)) {
                stack.push((nx, ny));
            }
        }
    }

    for (x, y, cell) in grid.iter() {
        let Some(occupant) = cell.occupant else {
            continue;
        };
        if occupant.tile == TileKind::Road {
            continue;
        }
        let (neighbors, ncount) = grid.neighbors4(x, y);
        if neighbors[..ncount]
            .iter()
            .any(|pos| result.roads.contains(pos))
        {
            result.groups.insert(occupant.group_id);
        }
    }

    result
}

/// Recompute [`Connectivity`] whenever the grid changed since the last run.
pub fn refresh_connectivity(grid: Res<CityGrid>, mut connectivity: ResMut<Connectivity>) {
    if !grid.is_changed() {
        return;
    }
    #[cfg(feature = "trace")]
    let _span = bevy::log::info_span!("refresh_connectivity").entered();

    let next = recompute_connectivity(&grid);
    if *connectivity != next {
        debug!(
            "connectivity: {} roads, {} buildings connected",
            next.roads.len(),
            next.groups.len()
        );
        *connectivity = next;
    }
}
