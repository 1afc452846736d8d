//! Solver benchmarks: fictitious-play rounds and full elimination runs.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use matrix_games::{solve_fictitious_play, Game, Player};

fn mixed_matrix(rows: usize, cols: usize) -> Vec<Vec<f64>> {
    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| f64::from(((r * 13 + c * 7) % 11) as u32) - 5.0)
                .collect()
        })
        .collect()
}

fn bench_fictitious_play(c: &mut Criterion) {
    let matrix = mixed_matrix(8, 8);
    c.bench_function("fictitious_play_8x8_10k_rounds", |b| {
        b.iter(|| solve_fictitious_play(black_box(&matrix), 10_000).unwrap())
    });
}

fn bench_iterated_deletion(c: &mut Criterion) {
    // Staircase payoffs: every pass finds another dominated strategy.
    let rows: Vec<Vec<f64>> = (0..8)
        .map(|r| (0..8).map(|col| f64::from((r + col) as u32)).collect())
        .collect();
    let player = Player::from_rows("P", &rows).unwrap();
    let opponent = Player::from_rows("O", &rows).unwrap();
    let game = Game::new(player, opponent).unwrap();

    c.bench_function("iterated_deletion_8x8", |b| {
        b.iter_batched(
            || game.clone(),
            |mut g| g.solve_by_iterated_deletion(true),
            BatchSize::SmallInput,
        )
    });
}

fn bench_pure_equilibrium(c: &mut Criterion) {
    let rows = mixed_matrix(8, 8);
    let player = Player::from_rows("P", &rows).unwrap();
    let opponent = Player::from_rows("O", &rows).unwrap();
    let game = Game::new(player, opponent).unwrap();

    c.bench_function("pure_nash_equilibrium_8x8", |b| {
        b.iter(|| black_box(&game).pure_nash_equilibrium().unwrap())
    });
}

criterion_group!(
    benches,
    bench_fictitious_play,
    bench_iterated_deletion,
    bench_pure_equilibrium
);
criterion_main!(benches);
