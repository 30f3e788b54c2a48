//! Runtime layout tunables.
//!
//! Collects the packing constants into a single [`LayoutParams`] resource so a
//! deployment can override them from JSON without recompiling. Missing fields
//! fall back to the defaults below.

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::config::{GRID_CELLS, MAX_FLOORS};
use crate::error::LayoutError;
use crate::stats::TimeWindow;
use crate::zone::Zone;

/// Inclusive range of cell ids owned by one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRange {
    pub first: usize,
    pub last: usize,
}

impl CellRange {
    pub const fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }

    pub fn contains(&self, id: usize) -> bool {
        (self.first..=self.last).contains(&id)
    }

    pub fn len(&self) -> usize {
        (self.last + 1).saturating_sub(self.first)
    }

    pub fn is_empty(&self) -> bool {
        self.last < self.first
    }

    fn overlaps(&self, other: &CellRange) -> bool {
        self.first <= other.last && other.first <= self.last
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRanges {
    pub code: CellRange,
    pub docs: CellRange,
    pub tests: CellRange,
}

impl Default for ZoneRanges {
    fn default() -> Self {
        // Whole rows, with one buffer row between neighbouring districts.
        Self {
            code: CellRange::new(0, 39),
            docs: CellRange::new(50, 69),
            tests: CellRange::new(80, 99),
        }
    }
}

impl ZoneRanges {
    pub fn get(&self, zone: Zone) -> CellRange {
        match zone {
            Zone::Code => self.code,
            Zone::Docs => self.docs,
            Zone::Tests => self.tests,
        }
    }

    /// Zone owning `id`, if any.
    pub fn zone_of(&self, id: usize) -> Option<Zone> {
        Zone::ALL.into_iter().find(|z| self.get(*z).contains(id))
    }
}

/// Inclusive range of tower heights, in floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightRange {
    pub min: u32,
    pub max: u32,
}

impl HeightRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Heights for towers on the grid border and in the interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightProfile {
    pub edge: HeightRange,
    pub inner: HeightRange,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Contributors that get their own colored towers, per zone.
    pub max_ranked_users: usize,
    /// Contributors listed in the per-render summary log.
    pub max_logged_users: usize,
    /// Lines of a zone that map to one unit of volume.
    pub lines_per_volume: f64,
    /// Upper bound on the top contributor's target volume.
    pub first_volume_cap: f64,
    /// A tower bigger than `overshoot` times the remaining volume is shrunk once.
    pub overshoot: f64,
    pub contributor_heights: HeightProfile,
    pub residual_heights: HeightProfile,
    /// Footprint side limit on the grid border.
    pub edge_footprint_cap: usize,
    /// Footprint side limit in the interior.
    pub inner_footprint_cap: usize,
    pub window: TimeWindow,
    pub zones: ZoneRanges,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            max_ranked_users: 10,
            max_logged_users: 15,
            lines_per_volume: 500.0,
            first_volume_cap: 30.0,
            overshoot: 1.3,
            contributor_heights: HeightProfile {
                edge: HeightRange::new(2, 9),
                inner: HeightRange::new(1, 5),
            },
            residual_heights: HeightProfile {
                edge: HeightRange::new(4, 9),
                inner: HeightRange::new(1, 5),
            },
            edge_footprint_cap: 3,
            inner_footprint_cap: 2,
            window: TimeWindow::Total,
            zones: ZoneRanges::default(),
        }
    }
}

impl LayoutParams {
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let invalid = |msg: String| Err(LayoutError::InvalidParams(msg));

        for zone in Zone::ALL {
            let r = self.zones.get(zone);
            if r.is_empty() || r.last >= GRID_CELLS {
                return invalid(format!(
                    "{} range {}..={} must be non-empty and below {GRID_CELLS}",
                    zone.name(),
                    r.first,
                    r.last
                ));
            }
        }
        for (i, a) in Zone::ALL.iter().enumerate() {
            for b in &Zone::ALL[i + 1..] {
                if self.zones.get(*a).overlaps(&self.zones.get(*b)) {
                    return invalid(format!("{} and {} ranges overlap", a.name(), b.name()));
                }
            }
        }

        for (name, range) in [
            ("contributor edge", self.contributor_heights.edge),
            ("contributor inner", self.contributor_heights.inner),
            ("residual edge", self.residual_heights.edge),
            ("residual inner", self.residual_heights.inner),
        ] {
            if range.min == 0 || range.min > range.max || range.max > MAX_FLOORS {
                return invalid(format!(
                    "{name} heights {}..={} must lie within 1..={MAX_FLOORS}",
                    range.min, range.max
                ));
            }
        }

        if self.edge_footprint_cap == 0 || self.inner_footprint_cap == 0 {
            return invalid("footprint caps must be at least 1".to_string());
        }
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.lines_per_volume) || !positive(self.overshoot) {
            return invalid("lines_per_volume and overshoot must be positive".to_string());
        }
        if !self.first_volume_cap.is_finite() || self.first_volume_cap < 0.0 {
            return invalid("first_volume_cap must not be negative".to_string());
        }
        Ok(())
    }
}
