use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameLoop, GameSnapshot, Piece};
use blockfall::types::{GameAction, Shape};

fn bench_tick(c: &mut Criterion) {
    let mut game = GameLoop::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let full = Board::from_rows(&["IIIIIIIIII"; 4]).unwrap();

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = full.clone();
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Piece::spawn(Shape::T);

    c.bench_function("move_sideways", |b| {
        b.iter(|| {
            if !piece.move_right(&board) {
                piece = Piece::spawn(Shape::T);
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = GameLoop::new(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            game.apply_action(black_box(GameAction::Rotate));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let game = GameLoop::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_move,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
