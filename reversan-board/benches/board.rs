use criterion::*;

#[cfg(unix)]
use pprof::criterion::{Output, PProfProfiler};

use reversan_board::test_utils::perft;
use reversan_board::{Board, Color, Position};

fn criterion_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(50);

    for depth in 1..6 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| perft::run_perft(black_box(depth)))
        });
    }

    group.finish();
}

fn criterion_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("operations");

    for &position in Position::ALL.iter() {
        let board = Board::make_initial(position);

        group.bench_with_input(
            BenchmarkId::new("legal_moves", position),
            &board,
            |b, &board| b.iter(|| black_box(board).legal_moves(Color::Black)),
        );

        group.bench_with_input(
            BenchmarkId::new("evaluate", position),
            &board,
            |b, &board| b.iter(|| black_box(board).evaluate()),
        );

        group.bench_with_input(
            BenchmarkId::new("apply_move", position),
            &board,
            |b, &board| {
                let mv = board
                    .legal_moves(Color::Black)
                    .next()
                    .expect("benchmark layouts leave black a move");
                b.iter(|| {
                    let mut child = black_box(board);
                    child.apply_move(Color::Black, mv);
                    child
                })
            },
        );
    }

    group.finish();
}

#[cfg(unix)]
criterion_group! {
    name = board;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_perft, criterion_operations
}

#[cfg(not(unix))]
criterion_group! {
    name = board;
    config = Criterion::default();
    targets = criterion_perft, criterion_operations
}

criterion_main!(board);
