use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ovalsweep_core::*;
use std::hint::black_box;

fn bench_ellipse_cells(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape_oracle/count_cells");
    for size in [(9, 9), (16, 30), (100, 100)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size.0, size.1)),
            &size,
            |b, &size| b.iter(|| black_box(Shape::Ellipse.count_cells(black_box(size)))),
        );
    }
    group.finish();
}

fn bench_win_check(c: &mut Criterion) {
    let config = BoardConfig::new(64, 64, Shape::Ellipse, 0);
    let mut board = Board::new(config, 0);
    board.start_with_layout((32, 32), &[(0, 31)]).ok();

    c.bench_function("shape_oracle/has_revealed_all_64x64", |b| {
        b.iter(|| black_box(board.has_revealed_all()))
    });
}

criterion_group!(benches, bench_ellipse_cells, bench_win_check);
criterion_main!(benches);
