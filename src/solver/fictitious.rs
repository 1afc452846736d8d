//! Fictitious-play approximation for m x n zero-sum games.
//!
//! Brown's fictitious play as popularized by Williams: each round the
//! row player plays the best response to the column player's accumulated
//! payoffs and vice versa. Play counters, normalized by the round count,
//! approximate the equilibrium mixed strategies, and the bracketed
//! cumulative extrema estimate the game value. Accuracy improves with
//! the iteration count; there is no convergence-based early exit.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Result of a fictitious-play run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FictitiousPlaySolution {
    row_counts: Vec<u32>,
    col_counts: Vec<u32>,
    value: f64,
    iterations: u32,
}

impl FictitiousPlaySolution {
    /// How often each row was the active best response.
    #[must_use]
    pub fn row_counts(&self) -> &[u32] {
        &self.row_counts
    }

    /// How often each column was the active best response.
    #[must_use]
    pub fn col_counts(&self) -> &[u32] {
        &self.col_counts
    }

    /// Estimated value of the game for the row player.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Number of rounds that produced this estimate.
    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Row play counts normalized to an approximate mixed strategy.
    #[must_use]
    pub fn row_mix(&self) -> Vec<f64> {
        normalize(&self.row_counts, self.iterations)
    }

    /// Column play counts normalized to an approximate mixed strategy.
    #[must_use]
    pub fn col_mix(&self) -> Vec<f64> {
        normalize(&self.col_counts, self.iterations)
    }
}

fn normalize(counts: &[u32], iterations: u32) -> Vec<f64> {
    counts
        .iter()
        .map(|&c| f64::from(c) / f64::from(iterations))
        .collect()
}

/// Approximate the mixed equilibrium of a zero-sum payoff matrix by
/// `iterations` rounds of alternating best responses.
///
/// Each round: the active row's counter and payoff row are accumulated
/// for the column player, who responds with the column minimizing the
/// accumulated payoffs; that column's counter and (transposed) payoff
/// row are accumulated for the row player, who responds with the row
/// maximizing them. Ties break toward the lowest index on both sides.
/// Row 0 opens the play. The value estimate is
/// `(max(row_cum) + min(col_cum)) / 2 / iterations`.
///
/// The matrix must be rectangular and non-empty, and `iterations` must
/// be positive; all three are rejected before the loop starts.
pub fn solve_fictitious_play(
    payoff_matrix: &[Vec<f64>],
    iterations: u32,
) -> Result<FictitiousPlaySolution, GameError> {
    if iterations == 0 {
        return Err(GameError::ZeroIterations);
    }
    let Some(first) = payoff_matrix.first() else {
        return Err(GameError::EmptyStrategySet {
            player: "payoff matrix".to_string(),
        });
    };
    let num_cols = first.len();
    if num_cols == 0 {
        return Err(GameError::EmptyStrategySet {
            player: "payoff matrix".to_string(),
        });
    }
    for (row, payoffs) in payoff_matrix.iter().enumerate() {
        if payoffs.len() != num_cols {
            return Err(GameError::RaggedMatrix {
                row,
                len: payoffs.len(),
                expected: num_cols,
            });
        }
    }
    let num_rows = payoff_matrix.len();

    // column-major copy for the row player's accumulation step
    let transpose: Vec<Vec<f64>> = (0..num_cols)
        .map(|c| payoff_matrix.iter().map(|row| row[c]).collect())
        .collect();

    let mut row_cum_payoff = vec![0.0f64; num_rows];
    let mut col_cum_payoff = vec![0.0f64; num_cols];
    let mut row_counts = vec![0u32; num_rows];
    let mut col_counts = vec![0u32; num_cols];
    let mut active_row = 0usize;

    for _ in 0..iterations {
        row_counts[active_row] += 1;
        for (cum, payoff) in col_cum_payoff.iter_mut().zip(&payoff_matrix[active_row]) {
            *cum += payoff;
        }

        let active_col = index_of_min(&col_cum_payoff);
        col_counts[active_col] += 1;
        for (cum, payoff) in row_cum_payoff.iter_mut().zip(&transpose[active_col]) {
            *cum += payoff;
        }

        active_row = index_of_max(&row_cum_payoff);
    }

    let upper = row_cum_payoff.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lower = col_cum_payoff.iter().copied().fold(f64::INFINITY, f64::min);
    let value = (upper + lower) / 2.0 / f64::from(iterations);

    Ok(FictitiousPlaySolution {
        row_counts,
        col_counts,
        value,
        iterations,
    })
}

/// First index holding the minimum value.
fn index_of_min(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v < values[best] {
            best = i;
        }
    }
    best
}

/// First index holding the maximum value.
fn index_of_max(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}
