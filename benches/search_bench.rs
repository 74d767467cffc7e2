use criterion::{criterion_group, criterion_main, Criterion, black_box};
use tacbot::board::{Board, Mark};
use tacbot::perft::perft;
use tacbot::search::alphabeta::Searcher;

fn bench_search(c: &mut Criterion) {
    // Worst real search the engine faces: a corner opening, full-depth reply.
    let b: Board = "X.. ... ...".parse().unwrap();
    c.bench_function("choose_move_after_corner_open", |ben| {
        ben.iter(|| {
            let mut s = Searcher::new();
            let r = s.choose_move(black_box(&b), Mark::O);
            black_box(r.nodes)
        })
    });

    c.bench_function("perft_9_empty_board", |ben| {
        let empty = Board::new();
        ben.iter(|| black_box(perft(black_box(&empty), Mark::X, 9)))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
