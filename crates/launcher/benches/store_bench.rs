//! Criterion benchmarks for the JSON store.
//!
//! Every bridge call except the error log fetch runs on the UI thread, so
//! document writes must stay well under a frame.  The tail read runs in the
//! background but scans the whole log.
//!
//! Run with:
//! ```bash
//! cargo bench --package launcher --bench store_bench
//! ```

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use launcher::infrastructure::storage::{JsonStore, Store};
use launcher_core::{Config, Game};
use uuid::Uuid;

fn bench_dir() -> PathBuf {
    std::env::temp_dir().join(format!("launcher_bench_{}", Uuid::new_v4()))
}

fn make_config(games: usize) -> Config {
    Config::new(
        (0..games)
            .map(|i| {
                let mut game = Game::new_blank();
                game.location = format!("/games/diablo-{i}");
                game.instances = 2;
                game.flags = vec!["-w".to_string(), "-skiptobnet".to_string()];
                game
            })
            .collect(),
    )
}

fn bench_write(c: &mut Criterion) {
    let dir = bench_dir();
    let store = JsonStore::new(&dir);
    store.load().expect("load");

    let mut group = c.benchmark_group("store_write");
    for games in [1usize, 10, 100] {
        let cfg = make_config(games);
        group.bench_with_input(BenchmarkId::from_parameter(games), &cfg, |b, cfg| {
            b.iter(|| store.write(black_box(cfg)).expect("write"))
        });
    }
    group.finish();

    fs::remove_dir_all(&dir).ok();
}

fn bench_get_errors(c: &mut Criterion) {
    let dir = bench_dir();
    let store = JsonStore::new(&dir);
    store.load().expect("load");

    let mut group = c.benchmark_group("store_get_errors");
    for lines in [100usize, 10_000, 100_000] {
        let body: String = (0..lines)
            .map(|i| format!("2024-01-01T00:00:00Z ERROR launcher: failure number {i}\n"))
            .collect();
        fs::write(store.error_log_path(), body).expect("write log");

        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, _| {
            b.iter(|| store.get_errors(black_box(25)).expect("get_errors"))
        });
    }
    group.finish();

    fs::remove_dir_all(&dir).ok();
}

criterion_group!(benches, bench_write, bench_get_errors);
criterion_main!(benches);
