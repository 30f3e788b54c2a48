use bevy::log::{debug, info, warn};
use rand::Rng;

use crate::error::LayoutError;
use crate::grid::{CityGrid, Lot};
use crate::packer::types::{Tower, ZoneReport};
use crate::packer::volume::{contributor_targets, residual_target};
use crate::palette::{random_grey, ColorBook, Rgb};
use crate::params::{HeightProfile, LayoutParams};
use crate::stats::{RepoStat, UserStat};
use crate::zone::Zone;

/// Takes one unit off a tower whose volume exceeds `factor` times the
/// remaining budget: depth first, then width, then height. A dimension of
/// two or less is never cut.
pub(super) fn trim_overshoot(
    w: usize,
    z: usize,
    h: u32,
    remaining: f64,
    factor: f64,
) -> (usize, usize, u32) {
    if (w * z) as f64 * h as f64 <= remaining * factor {
        return (w, z, h);
    }
    if z > 2 {
        (w, z - 1, h)
    } else if w > 2 {
        (w - 1, z, h)
    } else if h > 2 {
        (w, z, h - 1)
    } else {
        (w, z, h)
    }
}

enum Owner<'u> {
    Contributor { email: &'u str, color: Rgb },
    Residual,
}

struct ZoneBuilder<'a, R: Rng + ?Sized> {
    grid: &'a mut CityGrid,
    params: &'a LayoutParams,
    rng: &'a mut R,
    zone: Zone,
    towers: Vec<Tower>,
}

impl<R: Rng + ?Sized> ZoneBuilder<'_, R> {
    /// Places towers until `target` volume is reached. Returns the placed
    /// volume and whether the zone ran out of free cells first.
    fn fill(&mut self, target: f64, owner: &Owner) -> Result<(f64, bool), LayoutError> {
        let mut placed = 0.0;
        while placed < target {
            let Some(lot) = self.grid.allocate_free_cell(self.zone, &mut *self.rng) else {
                return Ok((placed, true));
            };
            let tower = self.place(lot, target - placed, owner)?;
            placed += tower.volume() as f64;
            self.towers.push(tower);
        }
        Ok((placed, false))
    }

    fn place(&mut self, lot: Lot, remaining: f64, owner: &Owner) -> Result<Tower, LayoutError> {
        let profile: &HeightProfile = match owner {
            Owner::Contributor { .. } => &self.params.contributor_heights,
            Owner::Residual => &self.params.residual_heights,
        };
        let edge = lot.is_edge();
        let (heights, cap) = if edge {
            (profile.edge, self.params.edge_footprint_cap)
        } else {
            (profile.inner, self.params.inner_footprint_cap)
        };

        let h = self.rng.gen_range(heights.min..=heights.max);
        let w = self.rng.gen_range(1..=lot.max_w.min(cap));
        let z = self.rng.gen_range(1..=lot.max_z.min(cap));
        let (w, z) = self.grid.fit_footprint(&lot, w, z);
        let (w, z, h) = trim_overshoot(w, z, h, remaining, self.params.overshoot);

        let z_index = self.grid.commit_placement(lot.id, w, z, h)?;
        let (owner, color) = match owner {
            Owner::Contributor { email, color } => (Some(email.to_string()), *color),
            Owner::Residual => (None, random_grey(&mut *self.rng)),
        };
        let tower = Tower {
            owner,
            zone: self.zone,
            cell: lot.id,
            width: w as u32,
            depth: z as u32,
            height: h,
            color,
            z_index,
        };
        debug!(
            "{} tower for {:?} at cell {} w={} z={} h={} z_index={} color {}",
            self.zone.name(),
            tower.owner,
            tower.cell,
            tower.width,
            tower.depth,
            tower.height,
            tower.z_index,
            tower.color
        );
        Ok(tower)
    }
}

/// Packs one zone: colored towers for each ranked contributor, then grey
/// towers for the lines no ranked contributor owns.
///
/// `ranked` must be ordered by code lines, largest first; only the first
/// `params.max_ranked_users` entries are used. Packing stops quietly when
/// the zone runs out of free cells.
pub fn pack_zone<R: Rng + ?Sized>(
    grid: &mut CityGrid,
    zone: Zone,
    repo: &RepoStat,
    ranked: &[&UserStat],
    params: &LayoutParams,
    colors: &mut ColorBook,
    rng: &mut R,
) -> Result<(Vec<Tower>, ZoneReport), LayoutError> {
    let window = params.window;
    let zone_lines = zone.repo_lines(repo, window);
    let ranked = &ranked[..ranked.len().min(params.max_ranked_users)];
    let user_lines: Vec<u64> = ranked.iter().map(|u| zone.user_lines(u, window)).collect();
    let targets = contributor_targets(zone_lines, &user_lines, params);

    let mut report = ZoneReport::empty(zone, zone_lines);
    let mut builder = ZoneBuilder {
        grid,
        params,
        rng,
        zone,
        towers: Vec::new(),
    };

    for (user, &target) in ranked.iter().zip(&targets) {
        if target <= 0.0 {
            continue;
        }
        let color = colors.color_for(&user.email, user.color, &mut *builder.rng);
        let owner = Owner::Contributor {
            email: &user.email,
            color,
        };
        let (placed, exhausted) = builder.fill(target, &owner)?;
        report.contributors += 1;
        report.contributor_target += target;
        report.contributor_volume += placed;
        if exhausted {
            report.exhausted = true;
            warn!(
                "{} zone full: {} got {placed} of {target:.2} volume",
                zone.name(),
                user.display_name()
            );
        }
    }

    let ranked_lines: u64 = user_lines.iter().sum();
    report.residual_target = residual_target(report.contributor_volume, zone_lines, ranked_lines);
    let (placed, exhausted) = builder.fill(report.residual_target, &Owner::Residual)?;
    report.residual_volume = placed;
    if exhausted {
        report.exhausted = true;
        warn!(
            "{} zone full: unattributed volume {placed} of {:.2}",
            zone.name(),
            report.residual_target
        );
    }

    report.towers = builder.towers.len();
    info!(
        "{} zone: {} lines, {} towers, contributor volume {}/{:.2}, residual {}/{:.2}",
        zone.name(),
        zone_lines,
        report.towers,
        report.contributor_volume,
        report.contributor_target,
        report.residual_volume,
        report.residual_target
    );
    Ok((builder.towers, report))
}
