//! Criterion benchmarks for the layout.
//!
//! Benchmarks:
//!   - allocate_free_cell on an empty code zone
//!   - build_city for a repository with twelve contributors
//!
//! Run with: cargo bench -p layout --bench layout_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use layout::grid::CityGrid;
use layout::params::ZoneRanges;
use layout::stats::{RepoStat, UserStat};
use layout::zone::Zone;
use layout::{build_city, LayoutParams};

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_allocate");
    group.sample_size(1000);

    let grid = CityGrid::new(&ZoneRanges::default());
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    group.bench_function("code_zone_empty", |b| {
        b.iter(|| black_box(grid.allocate_free_cell(black_box(Zone::Code), &mut rng)));
    });

    group.finish();
}

fn bench_build_city(c: &mut Criterion) {
    let mut stats = RepoStat::default();
    for i in 0..12u64 {
        let mut u = UserStat {
            email: format!("dev{i}@example.com"),
            ..Default::default()
        };
        u.code_lines.total = 10_000 - i * 500;
        u.doc_lines.total = 2_000 - i * 100;
        u.test_lines.total = 4_000 - i * 200;
        stats.code_lines.append(&u.code_lines);
        stats.doc_lines.append(&u.doc_lines);
        stats.test_lines.append(&u.test_lines);
        stats.users.insert(u.email.clone(), u);
    }
    let params = LayoutParams::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    c.bench_function("build_city_12_users", |b| {
        b.iter(|| black_box(build_city(black_box(&stats), &params, &mut rng)));
    });
}

criterion_group!(benches, bench_allocate, bench_build_city);
criterion_main!(benches);
