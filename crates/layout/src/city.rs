//! One render's worth of layout: grid, packing of all three zones, colors.

use bevy::log::info;
use rand::Rng;

use crate::error::LayoutError;
use crate::grid::CityGrid;
use crate::packer::{pack_zone, Tower, ZoneReport};
use crate::palette::ColorBook;
use crate::params::LayoutParams;
use crate::stats::RepoStat;
use crate::zone::Zone;

/// Everything the renderer needs from a finished layout.
pub struct CityLayout {
    pub grid: CityGrid,
    /// Towers in placement order (code, docs, tests); not yet depth sorted.
    pub towers: Vec<Tower>,
    pub reports: Vec<ZoneReport>,
    pub colors: ColorBook,
}

impl CityLayout {
    pub fn report(&self, zone: Zone) -> Option<&ZoneReport> {
        self.reports.iter().find(|r| r.zone == zone)
    }
}

/// Builds a fresh grid and packs the code, docs and tests zones in turn.
///
/// Contributors are ranked once by code lines and that ranking is used for
/// every zone.
pub fn build_city<R: Rng + ?Sized>(
    stats: &RepoStat,
    params: &LayoutParams,
    rng: &mut R,
) -> Result<CityLayout, LayoutError> {
    params.validate()?;

    let window = params.window;
    let ranked = stats.ranked_users(window);
    let code_total = stats.code_lines.get(window);
    for (user, share) in stats.contributor_shares(window, params.max_logged_users) {
        info!(
            "{}({}): {} lines/{} ({}%)",
            user.display_name(),
            user.email,
            user.code_lines.get(window),
            code_total,
            share
        );
    }

    let mut grid = CityGrid::new(&params.zones);
    let mut colors = ColorBook::default();
    let mut towers = Vec::new();
    let mut reports = Vec::with_capacity(Zone::ALL.len());
    for zone in Zone::ALL {
        let (placed, report) =
            pack_zone(&mut grid, zone, stats, &ranked, params, &mut colors, &mut *rng)?;
        towers.extend(placed);
        reports.push(report);
    }

    Ok(CityLayout {
        grid,
        towers,
        reports,
        colors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::UserStat;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_empty_repo_builds_empty_city() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let city = build_city(&RepoStat::default(), &LayoutParams::default(), &mut rng)
            .expect("empty stats are fine");
        assert!(city.towers.is_empty());
        assert_eq!(city.reports.len(), 3);
        assert!(city.colors.is_empty());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let mut params = LayoutParams::default();
        params.edge_footprint_cap = 0;
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            build_city(&RepoStat::default(), &params, &mut rng),
            Err(LayoutError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_towers_grouped_by_zone_order() {
        let mut stats = RepoStat::default();
        stats.code_lines.total = 1000;
        stats.doc_lines.total = 1000;
        stats.test_lines.total = 1000;
        let mut u = UserStat {
            email: "a@x".into(),
            ..Default::default()
        };
        u.code_lines.total = 600;
        u.doc_lines.total = 600;
        u.test_lines.total = 600;
        stats.users.insert(u.email.clone(), u);

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let city = build_city(&stats, &LayoutParams::default(), &mut rng).expect("build");
        let zones: Vec<Zone> = city.towers.iter().map(|t| t.zone).collect();
        let mut sorted = zones.clone();
        sorted.sort_by_key(|z| z.index());
        assert_eq!(zones, sorted);
        for zone in Zone::ALL {
            let report = city.report(zone).expect("report per zone");
            assert!(report.towers >= 1, "{zone:?}");
        }
    }
}
