use crate::grid::{col_of, row_of};
use crate::palette::Rgb;
use crate::zone::Zone;

/// One placed building. Created once by the packer and never changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Tower {
    /// Contributor email, `None` for unattributed volume.
    pub owner: Option<String>,
    pub zone: Zone,
    /// Anchor cell id (the footprint's top-left cell).
    pub cell: usize,
    pub width: u32,
    pub depth: u32,
    pub height: u32,
    pub color: Rgb,
    pub z_index: i32,
}

impl Tower {
    pub fn volume(&self) -> u64 {
        u64::from(self.width) * u64::from(self.depth) * u64::from(self.height)
    }

    pub fn footprint(&self) -> u32 {
        self.width * self.depth
    }

    pub fn row(&self) -> usize {
        row_of(self.cell)
    }

    pub fn col(&self) -> usize {
        col_of(self.cell)
    }

    /// Group id used by the renderer: the owner's email, or empty.
    pub fn tag(&self) -> &str {
        self.owner.as_deref().unwrap_or("")
    }
}

/// Outcome of packing one zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneReport {
    pub zone: Zone,
    pub zone_lines: u64,
    /// Contributors that received a non-zero target.
    pub contributors: usize,
    pub contributor_target: f64,
    pub contributor_volume: f64,
    pub residual_target: f64,
    pub residual_volume: f64,
    pub towers: usize,
    /// The zone ran out of free cells before a target was met.
    pub exhausted: bool,
}

impl ZoneReport {
    pub fn empty(zone: Zone, zone_lines: u64) -> Self {
        Self {
            zone,
            zone_lines,
            contributors: 0,
            contributor_target: 0.0,
            contributor_volume: 0.0,
            residual_target: 0.0,
            residual_volume: 0.0,
            towers: 0,
            exhausted: false,
        }
    }
}
