//! Move generation and search benchmarks.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_bg::{
    legal_move_sequences, BoardState, DiceRoll, DifficultyProfile, GameRng, HeuristicEvaluator,
    SearchEngine,
};

fn bench_movegen(c: &mut Criterion) {
    let state = BoardState::starting();

    c.bench_function("movegen_opening_3_4", |b| {
        b.iter(|| legal_move_sequences(black_box(&state), DiceRoll::new(3, 4)))
    });

    c.bench_function("movegen_opening_double_6", |b| {
        b.iter(|| legal_move_sequences(black_box(&state), DiceRoll::new(6, 6)))
    });

    c.bench_function("movegen_all_21_rolls", |b| {
        b.iter(|| {
            for roll in DiceRoll::all() {
                black_box(legal_move_sequences(black_box(&state), roll));
            }
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let state = BoardState::starting();
    let evaluator = HeuristicEvaluator::new();
    let engine = SearchEngine::new(&evaluator);

    c.bench_function("select_depth_1", |b| {
        let profile = DifficultyProfile::new("d1", 1, 0.0, 0.0);
        let mut rng = GameRng::new(42);
        b.iter(|| engine.select(black_box(&state), DiceRoll::new(3, 4), &profile, &mut rng))
    });

    c.bench_function("select_depth_2", |b| {
        let profile = DifficultyProfile::new("d2", 2, 0.0, 0.0);
        let mut rng = GameRng::new(42);
        b.iter(|| engine.select(black_box(&state), DiceRoll::new(3, 4), &profile, &mut rng))
    });
}

criterion_group!(benches, bench_movegen, bench_search);
criterion_main!(benches);
