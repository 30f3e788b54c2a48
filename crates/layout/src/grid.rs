//! Zoned cell grid and building lot allocation.
//!
//! The grid is `CELLS_SIDE x CELLS_SIDE`, addressed by a row-major cell id.
//! Each zone owns a fixed id range; ids outside every range are buffer cells
//! and are never built on. A cell is occupied exactly when it is missing from
//! its zone's free list, and both are updated together on commit.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{CELLS_SIDE, CELL_SIZE, GRID_CELLS};
use crate::error::LayoutError;
use crate::params::ZoneRanges;
use crate::zone::Zone;

#[inline]
pub fn row_of(id: usize) -> usize {
    id / CELLS_SIDE
}

#[inline]
pub fn col_of(id: usize) -> usize {
    id % CELLS_SIDE
}

/// Paint-order key of a cell. Larger keys are nearer the viewer and drawn later.
///
/// `100 * (row + col)` orders the anti-diagonals; subtracting `|row - col|`
/// orders cells within one anti-diagonal.
pub fn depth_key(id: usize) -> i32 {
    let row = row_of(id) as i32;
    let col = col_of(id) as i32;
    100 * (row + col) - (row - col).abs()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCell {
    pub zone: Option<Zone>,
    /// Floors of the tower covering this cell.
    pub floors: Option<u32>,
}

/// A free anchor cell together with how far the free run extends from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lot {
    pub id: usize,
    /// Free cells along the row, anchor included.
    pub max_w: usize,
    /// Free cells down the column, anchor included.
    pub max_z: usize,
}

impl Lot {
    pub fn row(&self) -> usize {
        row_of(self.id)
    }

    pub fn col(&self) -> usize {
        col_of(self.id)
    }

    /// Top-left pixel of the cell before projection, padding excluded.
    pub fn pos(&self) -> (i32, i32) {
        (self.col() as i32 * CELL_SIZE, self.row() as i32 * CELL_SIZE)
    }

    /// True on the outer ring of the grid: row 0, column 0 and the last row
    /// and column. The far row and column count as edges too, so towers there
    /// get the tall height range and the wide footprint cap.
    pub fn is_edge(&self) -> bool {
        let last = CELLS_SIDE - 1;
        self.row() == 0 || self.col() == 0 || self.row() == last || self.col() == last
    }
}

pub struct CityGrid {
    cells: Vec<GridCell>,
    free: [Vec<usize>; 3],
    ranges: ZoneRanges,
}

impl CityGrid {
    /// Builds an empty grid with every zoned cell free.
    pub fn new(ranges: &ZoneRanges) -> Self {
        let mut cells = vec![GridCell::default(); GRID_CELLS];
        let mut free: [Vec<usize>; 3] = Default::default();
        for (id, cell) in cells.iter_mut().enumerate() {
            if let Some(zone) = ranges.zone_of(id) {
                cell.zone = Some(zone);
                free[zone.index()].push(id);
            }
        }
        Self {
            cells,
            free,
            ranges: *ranges,
        }
    }

    pub fn ranges(&self) -> &ZoneRanges {
        &self.ranges
    }

    pub fn cell(&self, id: usize) -> Option<&GridCell> {
        self.cells.get(id)
    }

    pub fn is_occupied(&self, id: usize) -> bool {
        self.cells.get(id).is_some_and(|c| c.floors.is_some())
    }

    pub fn same_zone(&self, id: usize, zone: Zone) -> bool {
        self.cells.get(id).is_some_and(|c| c.zone == Some(zone))
    }

    /// Free cells of `zone`, in no particular order.
    pub fn free_cells(&self, zone: Zone) -> &[usize] {
        &self.free[zone.index()]
    }

    fn is_buildable(&self, id: usize, zone: Zone) -> bool {
        self.same_zone(id, zone) && !self.is_occupied(id)
    }

    /// Picks a random free cell of `zone` and measures its free run along the
    /// row and down the column. Returns `None` once the zone is full.
    pub fn allocate_free_cell<R: Rng + ?Sized>(&self, zone: Zone, rng: &mut R) -> Option<Lot> {
        let id = *self.free[zone.index()].choose(rng)?;
        Some(self.lot_at(id, zone))
    }

    fn lot_at(&self, id: usize, zone: Zone) -> Lot {
        let (row, col) = (row_of(id), col_of(id));

        let mut max_w = 0;
        while col + max_w < CELLS_SIDE && self.is_buildable(id + max_w, zone) {
            max_w += 1;
        }
        let mut max_z = 0;
        while row + max_z < CELLS_SIDE && self.is_buildable(id + max_z * CELLS_SIDE, zone) {
            max_z += 1;
        }
        Lot { id, max_w, max_z }
    }

    /// Shrinks `depth` so the whole `width x depth` rectangle is free.
    ///
    /// The extents of a [`Lot`] only cover its first row and first column, so
    /// an interior cell may already be taken by a neighbouring tower.
    pub fn fit_footprint(&self, lot: &Lot, width: usize, depth: usize) -> (usize, usize) {
        let width = width.min(lot.max_w).max(1);
        let depth = depth.min(lot.max_z).max(1);
        let Some(zone) = self.cells.get(lot.id).and_then(|c| c.zone) else {
            return (width, depth);
        };
        for dz in 1..depth {
            let row_start = lot.id + dz * CELLS_SIDE;
            if (0..width).any(|dx| !self.is_buildable(row_start + dx, zone)) {
                return (width, dz);
            }
        }
        (width, depth)
    }

    /// Marks the `width x depth` rectangle anchored at `anchor` as built with
    /// `height` floors and removes it from the free list.
    ///
    /// Returns the tower's depth key: the largest [`depth_key`] over the
    /// footprint. Nothing is changed when an error is returned.
    pub fn commit_placement(
        &mut self,
        anchor: usize,
        width: usize,
        depth: usize,
        height: u32,
    ) -> Result<i32, LayoutError> {
        if width == 0 || depth == 0 || height == 0 {
            return Err(LayoutError::EmptyFootprint);
        }
        let zone = self
            .cells
            .get(anchor)
            .ok_or(LayoutError::CellOutOfRange { cell: anchor })?
            .zone
            .ok_or(LayoutError::UnzonedCell { cell: anchor })?;
        if col_of(anchor) + width > CELLS_SIDE || row_of(anchor) + depth > CELLS_SIDE {
            return Err(LayoutError::CellOutOfRange { cell: anchor });
        }

        let footprint: Vec<usize> = (0..depth)
            .flat_map(|dz| (0..width).map(move |dx| anchor + dz * CELLS_SIDE + dx))
            .collect();
        for &id in &footprint {
            if !self.same_zone(id, zone) {
                return Err(LayoutError::CellOutsideZone { cell: id, zone });
            }
            if self.is_occupied(id) {
                return Err(LayoutError::FootprintOccupied { cell: id });
            }
        }

        let free = &mut self.free[zone.index()];
        let mut key = i32::MIN;
        for &id in &footprint {
            self.cells[id].floors = Some(height);
            if let Some(pos) = free.iter().position(|&c| c == id) {
                free.swap_remove(pos);
            }
            key = key.max(depth_key(id));
        }
        Ok(key)
    }
}
