use std::collections::HashSet;
use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::BuildingKind;
use crate::config::{GRID_SIZE, MARGIN_LEFT, MARGIN_TOP, TILE_PITCH_PX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    Residential,
    Commercial,
    Industrial,
    Farm,
    Utility,
    WaterPlant,
    University,
    Park,
    CityHall,
    CentralBank,
    Police,
    Hospital,
    Road,
    Blight,
}

impl TileKind {
    pub const COUNT: usize = 14;

    pub const ALL: [TileKind; Self::COUNT] = [
        TileKind::Residential,
        TileKind::Commercial,
        TileKind::Industrial,
        TileKind::Farm,
        TileKind::Utility,
        TileKind::WaterPlant,
        TileKind::University,
        TileKind::Park,
        TileKind::CityHall,
        TileKind::CentralBank,
        TileKind::Police,
        TileKind::Hospital,
        TileKind::Road,
        TileKind::Blight,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn tag(self) -> &'static str {
        match self {
            TileKind::Residential => "residential",
            TileKind::Commercial => "commercial",
            TileKind::Industrial => "industrial",
            TileKind::Farm => "farm",
            TileKind::Utility => "utility",
            TileKind::WaterPlant => "water_plant",
            TileKind::University => "university",
            TileKind::Park => "park",
            TileKind::CityHall => "city_hall",
            TileKind::CentralBank => "central_bank",
            TileKind::Police => "police",
            TileKind::Hospital => "hospital",
            TileKind::Road => "road",
            TileKind::Blight => "blight",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tile| tile.tag() == tag)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Dense per-tile lookup table. Indexing is exhaustive over [`TileKind`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileTable<T>([T; TileKind::COUNT]);

impl<T: Copy> TileTable<T> {
    pub fn from_fn(f: impl Fn(TileKind) -> T) -> Self {
        Self(TileKind::ALL.map(f))
    }

    #[inline]
    pub fn get(&self, tile: TileKind) -> T {
        self.0[tile.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (TileKind, T)> + '_ {
        TileKind::ALL.into_iter().map(move |tile| (tile, self.get(tile)))
    }
}

/// Identifier shared by every cell of one placed building.
///
/// Allocated by [`CityGrid`] from a monotonically increasing counter and never
/// reused, so two placements can never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupId(u64);

impl GroupId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    pub tile: TileKind,
    pub group_id: GroupId,
    /// Only the anchor (top-left) cell of a footprint is the root.
    pub is_root: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub occupant: Option<Occupant>,
}

impl Cell {
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.occupant.is_some_and(|o| o.is_root)
    }

    #[inline]
    pub fn tile(&self) -> Option<TileKind> {
        self.occupant.map(|o| o.tile)
    }

    #[inline]
    pub fn group_id(&self) -> Option<GroupId> {
        self.occupant.map(|o| o.group_id)
    }

    #[inline]
    fn root_group_of(&self, tile: TileKind) -> Option<GroupId> {
        match self.occupant {
            Some(o) if o.is_root && o.tile == tile => Some(o.group_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementError {
    /// Part of the footprint falls outside the grid.
    OutOfBounds,
    /// At least one footprint cell already holds a building.
    Occupied,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => f.write_str("footprint extends past the grid edge"),
            PlacementError::Occupied => f.write_str("footprint overlaps an existing building"),
        }
    }
}

impl std::error::Error for PlacementError {}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct CityGrid {
    pub cells: Vec<Cell>,
    pub size: usize,
    next_group: u64,
}

impl Default for CityGrid {
    fn default() -> Self {
        Self::new(GRID_SIZE)
    }
}

impl CityGrid {
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![Cell::default(); size * size],
            size,
            next_group: 1,
        }
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    /// Iterate `(x, y, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i % size, i / size, cell))
    }

    /// Returns up to 4 cardinal neighbors and the count of valid entries.
    /// Use `&result[..count]` to iterate over valid neighbors.
    pub fn neighbors4(&self, x: usize, y: usize) -> ([(usize, usize); 4], usize) {
        let mut result = [(0, 0); 4];
        let mut count = 0;
        if x + 1 < self.size {
            result[count] = (x + 1, y);
            count += 1;
        }
        if x > 0 {
            result[count] = (x - 1, y);
            count += 1;
        }
        if y + 1 < self.size {
            result[count] = (x, y + 1);
            count += 1;
        }
        if y > 0 {
            result[count] = (x, y - 1);
            count += 1;
        }
        (result, count)
    }

    pub fn grid_to_px(x: usize, y: usize) -> (i32, i32) {
        (
            MARGIN_LEFT + x as i32 * TILE_PITCH_PX,
            MARGIN_TOP + y as i32 * TILE_PITCH_PX,
        )
    }

    /// Screen position to grid cell, `None` when the point misses the grid.
    pub fn px_to_grid(px: i32, py: i32) -> Option<(usize, usize)> {
        let gx = (px - MARGIN_LEFT).div_euclid(TILE_PITCH_PX);
        let gy = (py - MARGIN_TOP).div_euclid(TILE_PITCH_PX);
        let size = GRID_SIZE as i32;
        if (0..size).contains(&gx) && (0..size).contains(&gy) {
            Some((gx as usize, gy as usize))
        } else {
            None
        }
    }

    // -----------------------------------------------------------------------
    // Placement / demolition
    // -----------------------------------------------------------------------

    pub fn can_place(&self, x: usize, y: usize, w: usize, h: usize) -> bool {
        self.check_footprint(x, y, w, h).is_ok()
    }

    pub fn check_footprint(
        &self,
        x: usize,
        y: usize,
        w: usize,
        h: usize,
    ) -> Result<(), PlacementError> {
        let fits = |start: usize, len: usize| start.checked_add(len).is_some_and(|end| end <= self.size);
        if !fits(x, w) || !fits(y, h) {
            return Err(PlacementError::OutOfBounds);
        }
        for j in 0..h {
            for i in 0..w {
                if self.get(x + i, y + j).is_occupied() {
                    return Err(PlacementError::Occupied);
                }
            }
        }
        Ok(())
    }

    /// Place `kind` with its top-left corner at `(x, y)`.
    ///
    /// Either every footprint cell is written or none is.
    pub fn place_building(
        &mut self,
        x: usize,
        y: usize,
        kind: BuildingKind,
    ) -> Result<GroupId, PlacementError> {
        let (w, h) = kind.footprint();
        self.check_footprint(x, y, w, h)?;

        let group_id = GroupId(self.next_group);
        self.next_group += 1;
        let tile = kind.tile();
        for j in 0..h {
            for i in 0..w {
                let idx = self.index(x + i, y + j);
                self.cells[idx].occupant = Some(Occupant {
                    tile,
                    group_id,
                    is_root: i == 0 && j == 0,
                });
            }
        }
        Ok(group_id)
    }

    /// Clear every cell belonging to `group_id`. Returns the number of cells cleared.
    pub fn demolish_group(&mut self, group_id: GroupId) -> usize {
        let mut cleared = 0;
        for cell in &mut self.cells {
            if cell.group_id() == Some(group_id) {
                cell.occupant = None;
                cleared += 1;
            }
        }
        cleared
    }

    /// Demolish whatever building covers `(x, y)`, including all of its other cells.
    /// Empty or out-of-range cells are a no-op.
    pub fn demolish_at(&mut self, x: usize, y: usize) -> Option<GroupId> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let group_id = self.get(x, y).group_id()?;
        self.demolish_group(group_id);
        Some(group_id)
    }

    // -----------------------------------------------------------------------
    // Counting
    // -----------------------------------------------------------------------

    /// Number of buildings (root cells) of `tile`, connected or not.
    pub fn count_all(&self, tile: TileKind) -> u32 {
        self.cells
            .iter()
            .filter(|cell| cell.root_group_of(tile).is_some())
            .count() as u32
    }

    /// Number of buildings of `tile` whose group is in `connected`.
    pub fn count_connected(&self, connected: &HashSet<GroupId>, tile: TileKind) -> u32 {
        self.cells
            .iter()
            .filter_map(|cell| cell.root_group_of(tile))
            .filter(|group_id| connected.contains(group_id))
            .count() as u32
    }

    pub fn has_building(&self, kind: BuildingKind) -> bool {
        let tile = kind.tile();
        self.cells.iter().any(|cell| cell.root_group_of(tile).is_some())
    }

    /// Footprint cells of one group.
    pub fn group_cells(&self, group_id: GroupId) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|(_, _, cell)| cell.group_id() == Some(group_id))
            .map(|(x, y, _)| (x, y))
            .collect()
    }
}
