use uttt::board::GlobalBoard;
use uttt::evaluate::evaluate;
use uttt::move_generation::legal_moves;
use uttt::uttt_board;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let empty = GlobalBoard::new();
    let busy = uttt_board! {
        XOX|O..|X.O
        .O.|.X.|..X
        X..|..O|O..
        ...|X.O|...
        OX.|.O.|X..
        O..|X..|.X.
        ..X|...|O..
        ..O|X..|...
        X..|.O.|.O.
    };

    c.bench_function("legal moves, free choice on empty board", |b| {
        b.iter(|| legal_moves(black_box(&empty), None))
    });
    c.bench_function("legal moves, free choice mid-game", |b| {
        b.iter(|| legal_moves(black_box(&busy), None))
    });
    c.bench_function("evaluate mid-game", |b| {
        b.iter(|| evaluate(black_box(&busy)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
