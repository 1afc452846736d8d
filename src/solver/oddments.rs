//! Closed-form mixed-strategy solvers for 2x2 and 3x3 games.
//!
//! Oddments are the unnormalized magnitudes behind an algebraic
//! mixed-equilibrium distribution. [`oddments2`] is the cheap path for
//! 2x2 games but breaks down when a raw oddment is zero; [`formula_2x2`]
//! is the closed-form fallback. [`oddments3`] covers 3x3 games via
//! column-difference cross terms.

use crate::core::{GameError, Strategy};

/// Closed-form 2x2 mixed distribution.
///
/// Computes `bd = S0.p1 - S1.p1`, `ca = S1.p0 - S0.p0`, `q = bd / (ca + bd)`
/// and returns `(q, 1 - q)`.
///
/// Fails with [`GameError::UnsupportedSize`] unless the set holds exactly
/// 2 strategies and with [`GameError::ZeroDenominator`] when
/// `ca + bd == 0` (degenerate game); never returns NaN.
pub fn formula_2x2(strategy_set: &[Strategy]) -> Result<(f64, f64), GameError> {
    let [s0, s1] = strategy_set else {
        return Err(GameError::UnsupportedSize {
            size: strategy_set.len(),
            expected: "exactly 2",
        });
    };
    let bd = s0.payoff(1)? - s1.payoff(1)?;
    let ca = s1.payoff(0)? - s0.payoff(0)?;
    let denominator = ca + bd;
    if denominator == 0.0 {
        return Err(GameError::ZeroDenominator);
    }
    let q = bd / denominator;
    Ok((q, 1.0 - q))
}

/// 2x2 mixed distribution from row oddments.
///
/// The raw oddments are `|S1.p0 - S1.p1|` and `|S0.p0 - S0.p1|`,
/// normalized by their sum.
///
/// Fails with [`GameError::ZeroOddment`] when either raw oddment is
/// exactly zero; the algebraic method is invalid there and the caller
/// should use [`formula_2x2`] instead. Fails with
/// [`GameError::UnsupportedSize`] unless the set holds exactly 2
/// strategies.
pub fn oddments2(strategy_set: &[Strategy]) -> Result<(f64, f64), GameError> {
    let [s0, s1] = strategy_set else {
        return Err(GameError::UnsupportedSize {
            size: strategy_set.len(),
            expected: "exactly 2",
        });
    };
    let oddments = [
        (s1.payoff(0)? - s1.payoff(1)?).abs(),
        (s0.payoff(0)? - s0.payoff(1)?).abs(),
    ];
    if oddments.contains(&0.0) {
        return Err(GameError::ZeroOddment);
    }
    let sum: f64 = oddments.iter().sum();
    Ok((oddments[0] / sum, oddments[1] / sum))
}

/// 3x3 mixed distribution from column-difference cross terms.
///
/// For each strategy, form the column differences `c1c2 = p0 - p1` and
/// `c2c3 = p1 - p2`; the oddment excluding strategy `k` is the absolute
/// 2x2 determinant of the remaining two strategies' difference pairs.
/// The three magnitudes are normalized by their sum.
///
/// Fails with [`GameError::UnsupportedSize`] unless the set holds exactly
/// 3 strategies and with [`GameError::DegenerateInput`] when all three
/// oddments vanish (fully degenerate payoff structure); never returns
/// NaN.
pub fn oddments3(strategy_set: &[Strategy]) -> Result<(f64, f64, f64), GameError> {
    if strategy_set.len() != 3 {
        return Err(GameError::UnsupportedSize {
            size: strategy_set.len(),
            expected: "exactly 3",
        });
    }
    let mut c1c2 = [0.0f64; 3];
    let mut c2c3 = [0.0f64; 3];
    for (i, strategy) in strategy_set.iter().enumerate() {
        c1c2[i] = strategy.payoff(0)? - strategy.payoff(1)?;
        c2c3[i] = strategy.payoff(1)? - strategy.payoff(2)?;
    }

    let cross = |i: usize, j: usize| (c1c2[i] * c2c3[j] - c1c2[j] * c2c3[i]).abs();
    let oddments = [cross(1, 2), cross(0, 2), cross(0, 1)];
    let sum: f64 = oddments.iter().sum();
    if sum == 0.0 {
        return Err(GameError::DegenerateInput);
    }
    Ok((oddments[0] / sum, oddments[1] / sum, oddments[2] / sum))
}

/// Transpose a strategy set: transposed strategy `p` holds, across all
/// original strategies, the payoff at position `p`. Views a player's
/// payoffs from the opponent's row perspective. Pure function; the input
/// is untouched and the output strategies are named `S*_{p}`.
#[must_use]
pub fn transpose_strategy_set(strategy_set: &[Strategy]) -> Vec<Strategy> {
    let positions = strategy_set.first().map_or(0, Strategy::payoff_count);
    (0..positions)
        .map(|p| {
            Strategy::new(
                format!("S*_{p}"),
                strategy_set.iter().map(|s| s.payoffs()[p]),
            )
        })
        .collect()
}
