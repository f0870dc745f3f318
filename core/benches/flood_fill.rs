use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ovalsweep_core::*;
use std::hint::black_box;

const TIERS: [(Coord, Coord); 3] = [(16, 16), (32, 64), (100, 100)];

fn bench_open_empty_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill/empty");
    for (rows, cols) in TIERS {
        for shape in [Shape::Rectangle, Shape::Ellipse] {
            let config = BoardConfig::new(rows, cols, shape, 0);
            let center = (rows / 2, cols / 2);
            group.bench_with_input(
                BenchmarkId::new(format!("{shape:?}"), format!("{rows}x{cols}")),
                &config,
                |b, &config| {
                    b.iter(|| {
                        let mut board = Board::new(config, 0);
                        black_box(board.start_with_layout(center, &[]))
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_first_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill/first_reveal");
    for (rows, cols) in TIERS {
        let config = BoardConfig::new(rows, cols, Shape::Ellipse, 12);
        let center = (rows / 2, cols / 2);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{cols}")),
            &config,
            |b, &config| {
                let mut seed = 0;
                b.iter(|| {
                    seed += 1;
                    let mut board = Board::new(config, seed);
                    black_box(board.reveal(center))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_open_empty_board, bench_first_reveal);
criterion_main!(benches);
