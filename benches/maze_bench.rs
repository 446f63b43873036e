use criterion::{black_box, criterion_group, criterion_main, Criterion};
use probelab::{find_all_solutions, find_shortest_path, Maze};
use std::time::Duration;

fn maze_10x10() -> Maze {
    Maze::from_bits(
        &[
            [1, 1, 1, 1, 1, 0, 0, 1, 1, 1],
            [0, 1, 1, 1, 1, 1, 0, 1, 0, 1],
            [0, 0, 1, 0, 1, 1, 1, 0, 0, 1],
            [1, 0, 1, 1, 1, 0, 1, 1, 0, 1],
            [0, 0, 0, 1, 0, 0, 0, 1, 0, 1],
            [1, 0, 1, 1, 1, 0, 0, 1, 1, 0],
            [0, 0, 0, 0, 1, 0, 0, 1, 0, 1],
            [0, 1, 1, 1, 1, 1, 1, 1, 0, 0],
            [1, 1, 1, 1, 1, 0, 0, 1, 1, 1],
            [0, 0, 1, 0, 0, 1, 1, 0, 0, 1],
        ],
        (0, 0),
        (7, 5),
    )
}

fn maze_open_5x5() -> Maze {
    // Worst case for the enumeration: no walls, every simple path explored.
    Maze::from_bits(&[[1u8; 5]; 5], (0, 0), (4, 4))
}

fn bench_shortest(c: &mut Criterion) {
    let walled = maze_10x10();
    c.bench_function("shortest_10x10_walled", |b| {
        b.iter(|| black_box(find_shortest_path(&walled)))
    });

    let open = maze_open_5x5();
    c.bench_function("shortest_5x5_open", |b| {
        b.iter(|| black_box(find_shortest_path(&open)))
    });
}

fn bench_enumerate(c: &mut Criterion) {
    let walled = maze_10x10();
    c.bench_function("all_solutions_10x10_walled", |b| {
        b.iter(|| black_box(find_all_solutions(&walled)))
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .measurement_time(Duration::from_secs(3))
        .warm_up_time(Duration::from_millis(500))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_shortest, bench_enumerate
}
criterion_main!(benches);
