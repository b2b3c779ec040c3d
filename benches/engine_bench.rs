use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use kalah::board::{Board, Player};
use kalah::eval::Evaluator;
use kalah::movegen::legal_moves;
use kalah::search::{Algorithm, Searcher};
use kalah::session::Session;

fn midgame() -> Board {
    Board::from_pits([3, 0, 2, 5, 0, 1, 20], [1, 4, 0, 0, 6, 2, 28]).unwrap()
}

fn bench_sow(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("sow_every_opening_pit", |b| {
        b.iter(|| {
            for pit in 0..6 {
                let mut copy = black_box(board);
                black_box(copy.sow(Player::One, pit));
            }
        })
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let board = midgame();
    c.bench_function("legal_moves_midgame", |b| {
        b.iter(|| legal_moves(black_box(Player::Two), black_box(&board)))
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.measurement_time(Duration::from_secs(10));
    let opening = Board::new();
    let middle = midgame();

    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        for depth in [2, 4] {
            group.bench_function(format!("{}_opening_depth_{}", algorithm.name(), depth), |b| {
                b.iter(|| {
                    let mut session = Session::new();
                    Searcher::new(Player::One, Evaluator::NetScore, &mut session)
                        .search(algorithm, black_box(&opening), depth)
                })
            });
        }
        group.bench_function(format!("{}_midgame_depth_4", algorithm.name()), |b| {
            b.iter(|| {
                let mut session = Session::new();
                Searcher::new(Player::Two, Evaluator::OwnScore, &mut session)
                    .search(algorithm, black_box(&middle), 4)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sow, bench_legal_moves, bench_search);
criterion_main!(benches);
