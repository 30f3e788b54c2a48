//! Whole-layout invariants over many seeds.
//!
//! Run: cargo test -p layout --test city_layout

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use layout::config::CELLS_SIDE;
use layout::packer::Tower;
use layout::stats::{RepoStat, TimeWindow};
use layout::zone::Zone;
use layout::{build_city, LayoutParams};

fn sample_repo() -> RepoStat {
    let doc = json!({
        "code_lines": { "total": 42_000, "last_year": 9_000 },
        "doc_lines": { "total": 6_000, "last_year": 1_000 },
        "test_lines": { "total": 15_000, "last_year": 4_000 },
        "users": {
            "ana@example.com": {
                "email": "ana@example.com",
                "username": "ana",
                "code_lines": { "total": 20_000, "last_year": 1_000 },
                "doc_lines": { "total": 3_000 },
                "test_lines": { "total": 7_000, "last_year": 2_000 }
            },
            "bo@example.com": {
                "email": "bo@example.com",
                "code_lines": { "total": 12_000, "last_year": 6_000 },
                "doc_lines": { "total": 500, "last_year": 1_000 },
                "test_lines": { "total": 4_000, "last_year": 1_500 }
            },
            "cy@example.com": {
                "email": "cy@example.com",
                "code_lines": { "total": 3_000, "last_year": 2_000 },
                "test_lines": { "total": 1_000 }
            }
        }
    });
    RepoStat::from_json(&doc.to_string()).expect("fixture parses")
}

fn footprint(t: &Tower) -> impl Iterator<Item = usize> + '_ {
    (0..t.depth as usize)
        .flat_map(move |dz| (0..t.width as usize).map(move |dx| t.cell + dz * CELLS_SIDE + dx))
}

fn check_layout(stats: &RepoStat, params: &LayoutParams, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let city = build_city(stats, params, &mut rng).expect("build");

    let mut used = HashSet::new();
    for t in &city.towers {
        assert!(t.width > 0 && t.depth > 0 && t.height > 0, "{t:?}");
        let range = params.zones.get(t.zone);
        assert!(t.col() + t.width as usize <= CELLS_SIDE, "{t:?} wraps a row");
        for id in footprint(t) {
            assert!(range.contains(id), "seed {seed}: {t:?} leaves its zone at {id}");
            assert!(used.insert(id), "seed {seed}: cell {id} used twice");
            assert!(city.grid.is_occupied(id));
        }
    }

    for zone in Zone::ALL {
        let range = params.zones.get(zone);
        let area: u32 = city
            .towers
            .iter()
            .filter(|t| t.zone == zone)
            .map(Tower::footprint)
            .sum();
        assert!(area as usize <= range.len());
        assert_eq!(
            city.grid.free_cells(zone).len(),
            range.len() - area as usize,
            "free list out of sync in {zone:?}"
        );
        for &id in city.grid.free_cells(zone) {
            assert!(!city.grid.is_occupied(id));
        }
    }
}

#[test]
fn test_layout_invariants_over_seeds() {
    let stats = sample_repo();
    let params = LayoutParams::default();
    for seed in 0..200 {
        check_layout(&stats, &params, seed);
    }
}

#[test]
fn test_layout_invariants_for_time_window() {
    let stats = sample_repo();
    let params = LayoutParams {
        window: TimeWindow::LastYear,
        ..Default::default()
    };
    for seed in 0..100 {
        check_layout(&stats, &params, seed);
    }
}

#[test]
fn test_window_changes_ranking() {
    let stats = sample_repo();
    let total: Vec<&str> = stats
        .ranked_users(TimeWindow::Total)
        .iter()
        .map(|u| u.email.as_str())
        .collect();
    let last_year: Vec<&str> = stats
        .ranked_users(TimeWindow::LastYear)
        .iter()
        .map(|u| u.email.as_str())
        .collect();
    assert_eq!(total[0], "ana@example.com");
    assert_eq!(last_year[0], "bo@example.com");
}

#[test]
fn test_same_seed_same_city() {
    let stats = sample_repo();
    let params = LayoutParams::default();
    let a = build_city(&stats, &params, &mut ChaCha8Rng::seed_from_u64(77)).expect("build");
    let b = build_city(&stats, &params, &mut ChaCha8Rng::seed_from_u64(77)).expect("build");
    assert_eq!(a.towers, b.towers);
}

#[test]
fn test_owners_are_known_contributors() {
    let stats = sample_repo();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let city = build_city(&stats, &LayoutParams::default(), &mut rng).expect("build");
    for t in &city.towers {
        if let Some(owner) = &t.owner {
            assert!(stats.users.contains_key(owner), "{owner}");
        }
    }
    assert!(city.towers.iter().any(|t| t.owner.is_none()), "unattributed lines get grey towers");
}
